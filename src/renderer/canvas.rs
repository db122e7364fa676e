//! The drawing surface the scene is painted onto

use glam::Vec2;

use crate::sim::Rect;

/// Straight RGBA, each channel in `[0, 1]`
pub type Rgba = [f32; 4];

/// A 2D drawing surface in screen coordinates (y grows downward).
///
/// Implemented by the macroquad backend for the real window and by a
/// recording canvas in tests.
pub trait Canvas {
    /// Loaded image handle
    type Sprite;

    /// Clear the whole surface
    fn fill(&mut self, color: Rgba);

    fn rect(&mut self, rect: Rect, color: Rgba);

    /// Filled ellipse inscribed in `bounds`
    fn ellipse(&mut self, bounds: Rect, color: Rgba);

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Filled convex polygon
    fn polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Draw a sprite with its top-left corner at `pos`
    fn blit(&mut self, sprite: &Self::Sprite, pos: Vec2);

    /// Draw text with the top-left of its bounding box at `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);

    /// Width and height `text` would occupy at `size`
    fn measure_text(&self, text: &str, size: f32) -> Vec2;

    /// Draw text centred on `center`
    fn text_centered(&mut self, text: &str, center: Vec2, size: f32, color: Rgba) {
        let dims = self.measure_text(text, size);
        self.text(text, center - dims / 2.0, size, color);
    }
}
