//! Input sampling from macroquad

use glam::Vec2;
use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_pressed,
    is_quit_requested, mouse_position,
};

use super::input::{FrameInput, InputEvent, Key};

/// Sample the keyboard and pointer once for this frame.
///
/// Call `macroquad::input::prevent_quit` at startup so window close shows up
/// here as `InputEvent::Quit` instead of ending the process.
pub fn poll() -> FrameInput {
    let (mx, my) = mouse_position();
    let pointer = Vec2::new(mx, my);

    let mut events = Vec::new();
    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }
    for (code, key) in [
        (KeyCode::Left, Key::Left),
        (KeyCode::Right, Key::Right),
        (KeyCode::Up, Key::Up),
        (KeyCode::Down, Key::Down),
        (KeyCode::R, Key::Restart),
    ] {
        if is_key_pressed(code) {
            events.push(InputEvent::KeyDown(key));
        }
    }
    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::PointerDown { pos: pointer });
    }

    FrameInput {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        pointer,
        events,
    }
}
