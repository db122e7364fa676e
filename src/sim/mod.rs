//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per logical tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod scenery;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use entity::{Cloud, Direction, Obstacle, Player, Side};
pub use scenery::Scenery;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Session};
pub use tick::{TickInput, tick};
