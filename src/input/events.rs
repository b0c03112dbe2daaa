//! Per-frame input data
//!
//! Window-independent description of what the player did during one frame:
//! a queue of discrete events plus a snapshot of every key held down.

/// Keys the aquarium reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Up,
    Down,
    Space,
    Escape,
}

impl Key {
    /// Digit keys in scan order, 0 first
    pub const DIGITS: [Key; 10] = [
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
    ];

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// Snapshot of held keys (one bit per `Key`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys(u16);

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys(0);

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut held = Self::NONE;
        for &key in keys {
            held.press(key);
        }
        held
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A discrete event queued during the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    KeyDown(Key),
    MouseDown { button: MouseButton, x: i32, y: i32 },
}

/// Everything the simulation consumes for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
    /// Tick clock reading for this frame (milliseconds)
    pub now_ms: u64,
}

impl FrameInput {
    /// Frame with held keys and no events
    #[cfg(test)]
    pub fn held(held: HeldKeys, now_ms: u64) -> Self {
        Self { events: Vec::new(), held, now_ms }
    }
}
