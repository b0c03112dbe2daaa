//! Input polling
//!
//! Reads macroquad's keyboard/mouse state once per frame and turns it into a
//! `FrameInput` the simulation can consume.

use macroquad::prelude::{
    is_key_down, is_key_pressed, is_mouse_button_pressed, is_quit_requested, mouse_position,
    prevent_quit, KeyCode,
};
use super::{FrameInput, HeldKeys, InputEvent, Key, MouseButton};

/// Physical key for each logical key
pub const KEY_BINDINGS: [(KeyCode, Key); 14] = [
    (KeyCode::Key0, Key::Num0),
    (KeyCode::Key1, Key::Num1),
    (KeyCode::Key2, Key::Num2),
    (KeyCode::Key3, Key::Num3),
    (KeyCode::Key4, Key::Num4),
    (KeyCode::Key5, Key::Num5),
    (KeyCode::Key6, Key::Num6),
    (KeyCode::Key7, Key::Num7),
    (KeyCode::Key8, Key::Num8),
    (KeyCode::Key9, Key::Num9),
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Space, Key::Space),
    (KeyCode::Escape, Key::Escape),
];

const MOUSE_BINDINGS: [(macroquad::prelude::MouseButton, MouseButton); 3] = [
    (macroquad::prelude::MouseButton::Left, MouseButton::Left),
    (macroquad::prelude::MouseButton::Middle, MouseButton::Middle),
    (macroquad::prelude::MouseButton::Right, MouseButton::Right),
];

/// Keyboard/mouse poller
pub struct InputState;

impl InputState {
    /// Take over window close so it arrives as `InputEvent::Quit`
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// Call once per frame
    pub fn poll(&mut self, now_ms: u64) -> FrameInput {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        let mut held = HeldKeys::NONE;
        for (code, key) in KEY_BINDINGS {
            if is_key_pressed(code) {
                events.push(InputEvent::KeyDown(key));
            }
            if is_key_down(code) {
                held.press(key);
            }
        }

        let (mx, my) = mouse_position();
        for (mq_button, button) in MOUSE_BINDINGS {
            if is_mouse_button_pressed(mq_button) {
                events.push(InputEvent::MouseDown {
                    button,
                    x: mx as i32,
                    y: my as i32,
                });
            }
        }

        FrameInput { events, held, now_ms }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
