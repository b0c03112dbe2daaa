//! Aquarium simulation
//!
//! Everything that changes from frame to frame lives in `runtime::Aquarium`.
//! `fish` and `particles` hold the per-entity rules and know nothing about the
//! window; only `renderer` talks to macroquad.

pub mod fish;
pub mod particles;
pub mod runtime;
pub mod renderer;

pub use runtime::{Aquarium, TickClock};
pub use renderer::draw_scene;
