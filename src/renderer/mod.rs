//! Rendering module
//!
//! The scene painter only talks to the `Canvas` trait; `mq_canvas` is the
//! macroquad implementation used by the game window.

pub mod canvas;
pub mod mq_canvas;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod sprites;

pub use canvas::{Canvas, Rgba};
pub use mq_canvas::{MqCanvas, MqSprite, load_sprites};
pub use scene::{Hud, Paint, render_frame};
pub use sprites::{SpriteKind, Sprites};
