//! Colors for game elements

use super::canvas::Rgba;

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const WHITE: Rgba = rgb(255, 255, 255);
pub const BLACK: Rgba = rgb(0, 0, 0);
pub const RED: Rgba = rgb(255, 0, 0);

pub const SKY: Rgba = rgb(135, 206, 235);
pub const SUN: Rgba = rgb(255, 255, 0);
pub const SUN_GLOW: Rgba = rgb(255, 255, 150);
pub const CLOUD: Rgba = WHITE;

pub const ROAD: Rgba = rgb(64, 64, 64);
pub const ROAD_EDGE: Rgba = rgb(169, 169, 169);
pub const EDGE_LINE: Rgba = rgb(255, 240, 60);
pub const LANE_LINE: Rgba = WHITE;

pub const TREE: Rgba = rgb(46, 139, 87);
pub const TREE_DARK: Rgba = rgb(40, 100, 60);
pub const TRUNK: Rgba = rgb(101, 67, 33);
pub const TRUNK_DARK: Rgba = rgb(86, 57, 28);

// Primitive cars, used when the car sprites are missing
pub const PLAYER_BODY: Rgba = rgb(30, 90, 200);
pub const NPC_BODY: Rgba = rgb(200, 40, 40);
pub const WINDOW: Rgba = rgb(170, 210, 240);
pub const TIRE: Rgba = rgb(20, 20, 20);

pub const BUTTON: Rgba = rgb(50, 200, 50);
pub const BUTTON_HOVER: Rgba = rgb(70, 220, 70);
pub const SCORE_TEXT: Rgba = BLACK;
pub const GAME_OVER_TEXT: Rgba = RED;
