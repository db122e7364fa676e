//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Obstacle, Player};
use super::scenery::Scenery;
use super::spawner::Spawner;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; waiting for a restart command
    GameOver,
}

/// Things that happened during the last tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned { x: f32 },
    /// An obstacle left the screen without hitting the player
    ObstaclePassed { score: u32 },
    /// The player hit an obstacle; the run is over
    Collision { score: u32 },
    /// A fresh session replaced the finished one
    Restarted { previous_score: u32 },
}

/// One playthrough, from the first tick to game over.
///
/// Never reset field by field: a restart assigns a brand new `Session`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub score: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles: Vec::new(),
            spawner: Spawner::default(),
            score: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete world state: the current session plus everything that outlives it
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared by spawning and scenery, survives restarts
    pub rng: Pcg32,
    /// Simulation tick counter since startup
    pub time_ticks: u64,
    pub scenery: Scenery,
    pub session: Session,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let scenery = Scenery::new(&mut rng);
        Self {
            seed,
            rng,
            time_ticks: 0,
            scenery,
            session: Session::new(),
            events: Vec::new(),
        }
    }

    /// Discard the current session and start a fresh one
    pub fn restart(&mut self) {
        let previous = std::mem::take(&mut self.session);
        log::info!("Restarting after score {}", previous.score);
        self.events.push(GameEvent::Restarted {
            previous_score: previous.score,
        });
    }
}
