//! Platform abstraction layer
//!
//! Handles everything between the window and the simulation:
//! - Input sampling and mapping to `TickInput`
//! - Frame timing (fixed-step accumulator, frame limiter, FPS counter)
//! - Driving the simulation from rendered frames

pub mod clock;
pub mod driver;
pub mod input;
pub mod mq_input;

pub use clock::{FixedStep, FpsCounter, FrameLimiter};
pub use driver::Driver;
pub use input::{FrameInput, InputEvent, Key};
