//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::entity::Direction;
use super::state::{GameEvent, GamePhase, GameState, Session};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Restart key or restart-button click (only honoured after game over)
    pub restart: bool,
    /// Keep clouds drifting while the game-over screen is up
    pub animate_idle_scenery: bool,
}

impl TickInput {
    /// Held directions in a fixed order
    pub fn directions(&self) -> impl Iterator<Item = Direction> {
        [
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
            (self.down, Direction::Down),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if state.session.is_over() {
        if input.restart {
            // The fresh session starts moving on the next tick
            state.restart();
            return;
        }
        if input.animate_idle_scenery {
            state.scenery.advance_clouds(&mut state.rng);
        }
        return;
    }

    update_session(state, input);

    // Road and clouds stop the moment the run ends
    if !state.session.is_over() {
        state.scenery.advance_road();
        state.scenery.advance_clouds(&mut state.rng);
    }
}

/// Player, spawning, obstacle movement, collision and scoring for a running session
fn update_session(state: &mut GameState, input: &TickInput) {
    let GameState {
        session,
        rng,
        events,
        ..
    } = state;

    for dir in input.directions() {
        session.player.steer(dir);
    }

    if let Some(obstacle) = session.spawner.tick(rng) {
        log::debug!("Spawned obstacle at x={:.0}", obstacle.pos.x);
        events.push(GameEvent::ObstacleSpawned { x: obstacle.pos.x });
        session.obstacles.push(obstacle);
    }

    sweep_obstacles(session, events);
}

/// Move every obstacle, then test it against the player and cull it if it
/// has left the screen. Every obstacle gets both checks every tick.
fn sweep_obstacles(session: &mut Session, events: &mut Vec<GameEvent>) {
    let player = session.player.hitbox();
    let mut collided = false;
    let mut passed = 0;

    session.obstacles.retain_mut(|obstacle| {
        obstacle.advance();
        if obstacle.hitbox().overlaps(&player) {
            collided = true;
        }
        if obstacle.is_off_screen() {
            passed += 1;
            return false;
        }
        true
    });

    for _ in 0..passed {
        session.score += 1;
        log::debug!("Obstacle passed, score {}", session.score);
        events.push(GameEvent::ObstaclePassed {
            score: session.score,
        });
    }

    if collided {
        session.phase = GamePhase::GameOver;
        log::info!("Collision! Final score {}", session.score);
        events.push(GameEvent::Collision {
            score: session.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::{Obstacle, Player};
    use glam::Vec2;
    use proptest::prelude::*;

    /// A state whose obstacle lane never reaches the player
    fn state_with_obstacle_at(x: f32) -> GameState {
        let mut state = GameState::new(12345);
        state.session.obstacles.push(Obstacle::new(x));
        state
    }

    /// Put an obstacle right on top of the player
    fn crash(state: &mut GameState) {
        let mut obstacle = Obstacle::new(state.session.player.pos.x);
        obstacle.pos.y = state.session.player.pos.y;
        state.session.obstacles.push(obstacle);
        tick(state, &TickInput::default());
        assert_eq!(state.session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_obstacle_scores_after_174_ticks() {
        let mut state = state_with_obstacle_at(ROAD_LEFT);
        // Keep the spawner from adding traffic in the player's lane
        state.session.spawner.threshold = u32::MAX;

        for _ in 0..173 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.obstacles.len(), 1);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.session.score, 1);
        assert!(state.session.obstacles.is_empty());
        assert_eq!(state.events, vec![GameEvent::ObstaclePassed { score: 1 }]);
        assert_eq!(state.session.phase, GamePhase::Running);
    }

    #[test]
    fn test_spawns_every_46_ticks_while_running() {
        let mut state = GameState::new(1);
        // The first spawn cannot reach the player within 92 ticks
        let mut spawns = 0;
        for _ in 0..92 {
            tick(&mut state, &TickInput::default());
            spawns += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
                .count();
        }
        assert_eq!(spawns, 2);
        assert_eq!(state.session.obstacles.len(), 2);
    }

    #[test]
    fn test_collision_ends_session_once() {
        let mut state = GameState::new(42);
        crash(&mut state);
        let collisions = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Collision { .. }))
            .count();
        assert_eq!(collisions, 1);

        tick(&mut state, &TickInput::default());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_two_simultaneous_collisions_end_session_once() {
        let mut state = GameState::new(42);
        let player = state.session.player.pos;
        for dx in [-20.0, 20.0] {
            let mut obstacle = Obstacle::new(player.x + dx);
            obstacle.pos.y = player.y;
            state.session.obstacles.push(obstacle);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.session.phase, GamePhase::GameOver);
        assert_eq!(
            state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Collision { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = GameState::new(7);
        state.session.obstacles.push(Obstacle::new(ROAD_LEFT));
        crash(&mut state);

        let session = state.session.clone();
        let lines = state.scenery.lines.clone();
        let clouds = state.scenery.clouds.clone();
        let tree_offset = state.scenery.tree_offset;

        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &input);
        }

        assert_eq!(state.session, session);
        assert_eq!(state.scenery.lines, lines);
        assert_eq!(state.scenery.clouds, clouds);
        assert_eq!(state.scenery.tree_offset, tree_offset);
    }

    #[test]
    fn test_idle_clouds_can_keep_drifting() {
        let mut state = GameState::new(7);
        crash(&mut state);
        let clouds = state.scenery.clouds.clone();
        let lines = state.scenery.lines.clone();

        let input = TickInput {
            animate_idle_scenery: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_ne!(state.scenery.clouds, clouds);
        assert_eq!(state.scenery.lines, lines);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new(3);
        let input = TickInput {
            restart: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.session.player.pos.x, Player::start_position().x + PLAYER_SPEED);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::Restarted { .. })));
    }

    #[test]
    fn test_restart_yields_fresh_session() {
        let mut state = GameState::new(99);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        state.session.score = 17;
        crash(&mut state);
        assert!(!state.session.obstacles.is_empty());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);

        assert_eq!(state.session, Session::new());
        assert_eq!(state.session.player.pos, Vec2::new(420.0, 649.0));
        assert_eq!(
            state.events,
            vec![GameEvent::Restarted {
                previous_score: 17
            }]
        );

        // Simulation resumes on the following tick
        tick(&mut state, &TickInput::default());
        assert_eq!(state.session.spawner.timer, 1);
    }

    #[test]
    fn test_scenery_scrolls_while_running() {
        let mut state = GameState::new(5);
        let first_line = state.scenery.lines[1];
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scenery.lines[1], first_line + LINE_SPEED);
        assert!(state.scenery.tree_offset > 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.session, state2.session);
        assert_eq!(state1.scenery.clouds, state2.scenery.clouds);
    }

    fn tick_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down)| TickInput {
                left,
                right,
                up,
                down,
                ..Default::default()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn player_stays_in_bounds_and_obstacles_only_move_down(
            seed in any::<u64>(),
            inputs in prop::collection::vec(tick_input(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            let (min, max) = state.session.player.bounds();

            for input in &inputs {
                let before: Vec<f32> = state.session.obstacles.iter().map(|o| o.pos.y).collect();
                let running = !state.session.is_over();
                tick(&mut state, input);

                let pos = state.session.player.pos;
                prop_assert!(pos.x >= min.x && pos.x <= max.x);
                prop_assert!(pos.y >= min.y && pos.y <= max.y);

                if running {
                    // Survivors keep their relative order; new spawns are appended
                    let survivors = state.session.obstacles.iter().take(before.len());
                    for (obstacle, old_y) in survivors.zip(before.iter().filter(|y| **y + OBSTACLE_SPEED <= SCREEN_HEIGHT)) {
                        prop_assert!(obstacle.pos.y > *old_y);
                    }
                }
            }
        }
    }
}
