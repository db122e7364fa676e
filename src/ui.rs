//! Restart control shown on the game-over screen

use glam::Vec2;

use crate::consts::*;
use crate::sim::Rect;

pub const RESTART_LABEL: &str = "RESTART";

#[derive(Debug, Clone, PartialEq)]
pub struct RestartButton {
    pub bounds: Rect,
    pub label: &'static str,
}

impl Default for RestartButton {
    /// Centred horizontally, just below the middle of the screen
    fn default() -> Self {
        Self {
            bounds: Rect::new(
                SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 + 50.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            label: RESTART_LABEL,
        }
    }
}

impl RestartButton {
    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.bounds.contains(pointer)
    }

    /// True when any of the given pointer presses landed on the button
    pub fn clicked_by<I>(&self, presses: I) -> bool
    where
        I: IntoIterator<Item = Vec2>,
    {
        presses.into_iter().any(|p| self.bounds.contains(p))
    }
}
