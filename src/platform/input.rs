//! Polled input for one rendered frame

use glam::Vec2;

use crate::sim::TickInput;
use crate::ui::RestartButton;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Restart,
}

/// Discrete events gathered since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    KeyDown(Key),
    /// Primary pointer button pressed at `pos`
    PointerDown { pos: Vec2 },
}

/// Everything sampled from the input devices this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Current pointer position (for hover)
    pub pointer: Vec2,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }

    /// Restart key pressed, or a pointer press inside the restart button
    pub fn restart_requested(&self, button: &RestartButton) -> bool {
        let key = self.events.contains(&InputEvent::KeyDown(Key::Restart));
        let click = button.clicked_by(self.events.iter().filter_map(|e| match e {
            InputEvent::PointerDown { pos } => Some(*pos),
            _ => None,
        }));
        key || click
    }

    pub fn tick_input(&self, button: &RestartButton, animate_idle_scenery: bool) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            restart: self.restart_requested(button),
            animate_idle_scenery,
        }
    }
}
