//! Road Dodger - a top-down arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, scrolling, collisions, game state)
//! - `renderer`: Render-surface capability and the per-frame scene painter
//! - `platform`: Input model, frame clock and macroquad polling
//! - `ui`: Restart control
//! - `settings`: Runtime settings loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{FpsLimit, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per displayed frame)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Simulation ticks per second
    pub const TICKS_PER_SECOND: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Viewport dimensions (logical pixels)
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;

    /// Road bounds: 420 px wide, centred
    pub const ROAD_LEFT: f32 = SCREEN_WIDTH / 2.0 - 210.0;
    pub const ROAD_RIGHT: f32 = SCREEN_WIDTH / 2.0 + 210.0;
    /// Light grey shoulder outside each road bound
    pub const SHOULDER_WIDTH: f32 = 15.0;
    /// Yellow edge line inside each road bound
    pub const EDGE_LINE_WIDTH: f32 = 4.0;

    /// Car sprites are shared by the player and the traffic
    pub const CAR_WIDTH: f32 = 60.0;
    pub const CAR_HEIGHT: f32 = 99.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Gap between the player's starting position and the bottom edge
    pub const PLAYER_START_MARGIN: f32 = 20.0;

    /// Oncoming traffic moves down this many pixels per tick
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Ticks the spawn timer must exceed before the next obstacle appears
    pub const SPAWN_THRESHOLD: u32 = 45;

    /// Centre lane markings
    pub const LINE_LENGTH: f32 = 50.0;
    pub const LINE_WIDTH: f32 = 10.0;
    pub const LINE_SPACING: f32 = 100.0;
    pub const LINE_SPEED: f32 = 5.0;

    /// Clouds drifting over the verges
    pub const CLOUDS_PER_SIDE: usize = 3;
    pub const CLOUD_SPEED_FACTOR: f32 = 0.7;
    pub const CLOUD_MIN_HEIGHT: f32 = 100.0;
    pub const CLOUD_MAX_HEIGHT: f32 = 160.0;
    pub const CLOUD_MIN_WIDTH: f32 = 25.0;
    pub const CLOUD_MAX_WIDTH: f32 = 40.0;
    /// Clouds keep at least this far from the road
    pub const CLOUD_ROAD_GAP: f32 = 10.0;
    /// Extra random distance above the viewport a wrapped cloud may restart from
    pub const CLOUD_WRAP_JITTER: f32 = 120.0;

    /// Roadside tree rows
    pub const TREE_SPACING: f32 = 150.0;
    pub const TREE_FIRST_ROW: f32 = -100.0;
    /// Tree rows scroll this many pixels per second of simulated time
    pub const TREE_SPEED_PER_SECOND: f32 = 5.0;
    pub const TREE_SPRITE_WIDTH: f32 = 80.0;
    pub const TREE_SPRITE_HEIGHT: f32 = 120.0;

    /// Sun in the top-right corner
    pub const SUN_X: f32 = SCREEN_WIDTH - 80.0;
    pub const SUN_Y: f32 = 80.0;
    pub const SUN_RADIUS: f32 = 30.0;

    /// Restart control
    pub const BUTTON_WIDTH: f32 = 200.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
}
