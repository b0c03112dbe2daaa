//! Input handling
//!
//! `events` holds the window-independent frame input types; `state` fills
//! them from macroquad once per frame.

mod events;
mod state;

pub use events::*;
pub use state::InputState;
