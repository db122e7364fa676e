//! macroquad backend for `Canvas`, plus sprite loading

use std::path::Path;

use glam::Vec2;
use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_rectangle, draw_triangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{
    DrawTextureParams, FilterMode, Texture2D, draw_texture_ex, load_texture,
};
use macroquad::window::clear_background;

use super::canvas::{Canvas, Rgba};
use super::sprites::{SpriteKind, Sprites};
use crate::sim::Rect;

/// Segments used to approximate an ellipse outline
const ELLIPSE_SEGMENTS: usize = 24;

/// A loaded texture and the size it is drawn at
#[derive(Clone)]
pub struct MqSprite {
    pub texture: Texture2D,
    pub size: Vec2,
}

/// Draws straight to the macroquad window
#[derive(Debug, Default)]
pub struct MqCanvas;

fn color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

impl Canvas for MqCanvas {
    type Sprite = MqSprite;

    fn fill(&mut self, c: Rgba) {
        clear_background(color(c));
    }

    fn rect(&mut self, r: Rect, c: Rgba) {
        draw_rectangle(r.x, r.y, r.w, r.h, color(c));
    }

    fn ellipse(&mut self, bounds: Rect, c: Rgba) {
        let center = bounds.center();
        let radii = Vec2::new(bounds.w / 2.0, bounds.h / 2.0);
        let points: Vec<Vec2> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let theta = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                center + radii * Vec2::new(theta.cos(), theta.sin())
            })
            .collect();
        self.polygon(&points, c);
    }

    fn circle(&mut self, center: Vec2, radius: f32, c: Rgba) {
        draw_circle(center.x, center.y, radius, color(c));
    }

    fn polygon(&mut self, points: &[Vec2], c: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        // Triangle fan from the first vertex
        let a = vec2(first.x, first.y);
        for pair in rest.windows(2) {
            draw_triangle(
                a,
                vec2(pair[0].x, pair[0].y),
                vec2(pair[1].x, pair[1].y),
                color(c),
            );
        }
    }

    fn blit(&mut self, sprite: &MqSprite, pos: Vec2) {
        draw_texture_ex(
            &sprite.texture,
            pos.x,
            pos.y,
            Color::new(1.0, 1.0, 1.0, 1.0),
            DrawTextureParams {
                dest_size: Some(vec2(sprite.size.x, sprite.size.y)),
                ..Default::default()
            },
        );
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, c: Rgba) {
        // macroquad positions text by its baseline
        let dims = measure_text(text, None, size as u16, 1.0);
        draw_text(text, pos.x, pos.y + dims.offset_y, size, color(c));
    }

    fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        let dims = measure_text(text, None, size as u16, 1.0);
        Vec2::new(dims.width, dims.height)
    }
}

/// Load every sprite once. A file that fails to load leaves its slot empty
/// and the scene draws primitive shapes in its place.
pub async fn load_sprites(asset_dir: &Path) -> Sprites<MqSprite> {
    let mut sprites = Sprites::empty();
    for kind in SpriteKind::ALL {
        let path = asset_dir.join(kind.file_name());
        let path = path.to_string_lossy();
        match load_texture(&path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                log::info!("Loaded {:?} sprite from {}", kind, path);
                sprites.insert(
                    kind,
                    MqSprite {
                        texture,
                        size: kind.size(),
                    },
                );
            }
            Err(e) => {
                log::warn!("Could not load {:?} sprite from {}: {}; using fallback", kind, path, e);
            }
        }
    }
    sprites
}
