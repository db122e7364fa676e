//! Per-frame scene painter
//!
//! Paints the world back to front onto any `Canvas`: sky, verges, road,
//! cars, then the HUD and the game-over overlay.

use glam::Vec2;

use super::canvas::{Canvas, Rgba};
use super::palette;
use super::shapes::{self, paint_all};
use super::sprites::{SpriteKind, Sprites};
use crate::consts::*;
use crate::sim::{Cloud, GameState, Obstacle, Player, Rect, Scenery};
use crate::ui::RestartButton;

pub const SCORE_TEXT_SIZE: f32 = 36.0;
pub const FPS_TEXT_SIZE: f32 = 24.0;
pub const GAME_OVER_TEXT_SIZE: f32 = 72.0;
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Presentation-only inputs that are not part of the simulation
#[derive(Debug, Clone, Default)]
pub struct Hud {
    /// Pointer position, for the restart button hover state
    pub pointer: Vec2,
    /// FPS readout, if enabled
    pub fps: Option<u32>,
}

/// Anything in the world that knows how to draw itself
pub trait Paint {
    fn paint<C: Canvas>(&self, canvas: &mut C, sprites: &Sprites<C::Sprite>);
}

/// Blit `kind` over `body`, or paint the fallback car shape when it is missing
fn paint_car<C: Canvas>(
    canvas: &mut C,
    sprites: &Sprites<C::Sprite>,
    kind: SpriteKind,
    body: Rect,
    color: Rgba,
) {
    match sprites.get(kind) {
        Some(sprite) => canvas.blit(sprite, Vec2::new(body.x, body.y)),
        None => paint_all(canvas, &shapes::car(body, color)),
    }
}

impl Paint for Player {
    fn paint<C: Canvas>(&self, canvas: &mut C, sprites: &Sprites<C::Sprite>) {
        paint_car(
            canvas,
            sprites,
            SpriteKind::PlayerCar,
            self.hitbox(),
            palette::PLAYER_BODY,
        );
    }
}

impl Paint for Obstacle {
    fn paint<C: Canvas>(&self, canvas: &mut C, sprites: &Sprites<C::Sprite>) {
        paint_car(
            canvas,
            sprites,
            SpriteKind::NpcCar,
            self.hitbox(),
            palette::NPC_BODY,
        );
    }
}

impl Paint for Cloud {
    fn paint<C: Canvas>(&self, canvas: &mut C, _sprites: &Sprites<C::Sprite>) {
        paint_all(canvas, &shapes::cloud(self));
    }
}

/// Render the complete frame for `state`
pub fn render_frame<C: Canvas>(
    canvas: &mut C,
    state: &GameState,
    sprites: &Sprites<C::Sprite>,
    button: &RestartButton,
    hud: &Hud,
) {
    canvas.fill(palette::SKY);
    draw_verges(canvas, sprites);
    draw_sun(canvas);
    for cloud in &state.scenery.clouds {
        cloud.paint(canvas, sprites);
    }
    draw_trees(canvas, &state.scenery, sprites);
    draw_road(canvas, &state.scenery);

    let session = &state.session;
    session.player.paint(canvas, sprites);
    for obstacle in &session.obstacles {
        obstacle.paint(canvas, sprites);
    }

    canvas.text(
        &format!("Score: {}", session.score),
        Vec2::new(10.0, 10.0),
        SCORE_TEXT_SIZE,
        palette::SCORE_TEXT,
    );
    if let Some(fps) = hud.fps {
        canvas.text(
            &format!("FPS: {fps}"),
            Vec2::new(10.0, 10.0 + SCORE_TEXT_SIZE),
            FPS_TEXT_SIZE,
            palette::SCORE_TEXT,
        );
    }

    if session.is_over() {
        draw_game_over(canvas, button, hud.pointer);
    }
}

/// Optional verge texture on both sides of the road, vertically centred
fn draw_verges<C: Canvas>(canvas: &mut C, sprites: &Sprites<C::Sprite>) {
    if let Some(background) = sprites.get(SpriteKind::Background) {
        let y = (SCREEN_HEIGHT - SpriteKind::Background.size().y) / 2.0;
        canvas.blit(background, Vec2::new(0.0, y));
        canvas.blit(background, Vec2::new(ROAD_RIGHT, y));
    }
}

fn draw_sun<C: Canvas>(canvas: &mut C) {
    let center = Vec2::new(SUN_X, SUN_Y);
    canvas.circle(center, SUN_RADIUS + 8.0, palette::SUN_GLOW);
    canvas.circle(center, SUN_RADIUS + 4.0, palette::SUN_GLOW);
    canvas.circle(center, SUN_RADIUS, palette::SUN);
}

fn draw_trees<C: Canvas>(canvas: &mut C, scenery: &Scenery, sprites: &Sprites<C::Sprite>) {
    match sprites.get(SpriteKind::Tree) {
        Some(tree) => {
            for y in scenery.tree_rows() {
                let top = y - TREE_SPRITE_HEIGHT;
                canvas.blit(tree, Vec2::new(ROAD_LEFT - 100.0, top));
                canvas.blit(tree, Vec2::new(ROAD_RIGHT + 20.0, top));
            }
        }
        None => {
            for y in scenery.tree_rows() {
                paint_all(canvas, &shapes::tree(Vec2::new(ROAD_LEFT - 140.0, y), 1.0));
                paint_all(canvas, &shapes::tree(Vec2::new(ROAD_RIGHT + 20.0, y), 1.0));
            }
        }
    }
}

fn draw_road<C: Canvas>(canvas: &mut C, scenery: &Scenery) {
    canvas.rect(
        Rect::new(ROAD_LEFT - SHOULDER_WIDTH, 0.0, SHOULDER_WIDTH, SCREEN_HEIGHT),
        palette::ROAD_EDGE,
    );
    canvas.rect(
        Rect::new(ROAD_RIGHT, 0.0, SHOULDER_WIDTH, SCREEN_HEIGHT),
        palette::ROAD_EDGE,
    );
    canvas.rect(
        Rect::new(ROAD_LEFT, 0.0, ROAD_RIGHT - ROAD_LEFT, SCREEN_HEIGHT),
        palette::ROAD,
    );
    canvas.rect(
        Rect::new(ROAD_LEFT, 0.0, EDGE_LINE_WIDTH, SCREEN_HEIGHT),
        palette::EDGE_LINE,
    );
    canvas.rect(
        Rect::new(ROAD_RIGHT - EDGE_LINE_WIDTH, 0.0, EDGE_LINE_WIDTH, SCREEN_HEIGHT),
        palette::EDGE_LINE,
    );

    let x = SCREEN_WIDTH / 2.0 - LINE_WIDTH / 2.0;
    for &y in &scenery.lines {
        canvas.rect(Rect::new(x, y, LINE_WIDTH, LINE_LENGTH), palette::LANE_LINE);
    }
}

fn draw_game_over<C: Canvas>(canvas: &mut C, button: &RestartButton, pointer: Vec2) {
    canvas.text_centered(
        GAME_OVER_TEXT,
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - 50.0),
        GAME_OVER_TEXT_SIZE,
        palette::GAME_OVER_TEXT,
    );

    let color = if button.is_hovered(pointer) {
        palette::BUTTON_HOVER
    } else {
        palette::BUTTON
    };
    canvas.rect(button.bounds, color);
    canvas.text_centered(
        button.label,
        button.bounds.center(),
        SCORE_TEXT_SIZE,
        palette::BLACK,
    );
}
