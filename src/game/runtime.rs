//! Aquarium runtime
//!
//! `Aquarium` owns the whole scene. `step` consumes it together with one
//! frame of input and returns the next state. The update order inside `step`
//! is fixed:
//!
//! 1. events (quit flag, anchor drops)
//! 2. speed from digit keys
//! 3. depth from Up/Down
//! 4. horizontal swim + wall turn
//! 5. bubble release (debounced)
//! 6. bubbles rise, surfaced ones removed
//! 7. anchors sink, grounded ones removed
//!
//! Anything spawned in steps 1 or 5 has already moved once when it is drawn.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{AquariumConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{FrameInput, InputEvent, Key, MouseButton};
use super::fish::Fish;
use super::particles::{advance_anchors, advance_bubbles, Anchor, Bubble};

/// Millisecond counter advanced once per processed frame.
///
/// Reads `frames * 1000 / fps`, so it tracks frames, not wall time.
#[derive(Debug, Clone)]
pub struct TickClock {
    fps: u32,
    frames: u64,
}

impl TickClock {
    pub fn new(fps: u32) -> Self {
        Self { fps: fps.max(1), frames: 0 }
    }

    /// Current reading in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.frames * 1000 / self.fps as u64
    }

    /// Advance by one frame
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Minimum spacing between two triggers of the same action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    window_ms: u64,
    last_ms: Option<u64>,
}

impl Debounce {
    pub fn new(window_ms: u64) -> Self {
        Self { window_ms, last_ms: None }
    }

    /// Fire if the window has passed since the last fire (or never fired).
    /// Returns whether it fired.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let ready = match self.last_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.window_ms,
        };
        if ready {
            self.last_ms = Some(now_ms);
        }
        ready
    }
}

/// Complete scene state
#[derive(Debug, Clone)]
pub struct Aquarium {
    pub fish: Fish,
    pub bubbles: Vec<Bubble>,
    pub anchors: Vec<Anchor>,
    /// Set by Escape or a window close; the loop ends after this frame renders
    pub quit: bool,
    pub width: i32,
    pub height: i32,
    bubble_timer: Debounce,
    rng: StdRng,
    config: AquariumConfig,
}

impl Aquarium {
    /// New scene on the standard canvas.
    /// `fish_size` comes from the loaded (and upscaled) sprite.
    pub fn new(config: AquariumConfig, fish_size: (i32, i32), seed: u64) -> Self {
        Self::with_tank(config, fish_size, seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_tank(config: AquariumConfig, fish_size: (i32, i32), seed: u64, width: i32, height: i32) -> Self {
        let (fx, fy) = config.fish_start;
        let mut fish = Fish::new(
            fx,
            fy,
            fish_size.0,
            fish_size.1,
            config.fish_start_direction.into(),
            config.fish_start_speed,
        );
        fish.clamp_depth(height);

        Self {
            fish,
            bubbles: Vec::new(),
            anchors: Vec::new(),
            quit: false,
            width,
            height,
            bubble_timer: Debounce::new(config.bubble_debounce_ms),
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn config(&self) -> &AquariumConfig {
        &self.config
    }

    /// Advance one frame
    pub fn step(mut self, input: &FrameInput) -> Self {
        self.handle_events(&input.events);

        let held = input.held;
        self.fish.adjust_speed(held, &self.config.speed_levels);
        self.fish.adjust_depth(held, self.config.depth_step, self.height);
        self.fish.swim(self.width);

        if held.is_down(Key::Space) && self.bubble_timer.try_fire(input.now_ms) {
            let (x, y) = self.fish.leading_edge();
            let bubble = Bubble::spawn(x, y, self.config.bubble_diameter, &mut self.rng);
            self.bubbles.push(bubble);
        }

        self.bubbles = advance_bubbles(std::mem::take(&mut self.bubbles), self.config.bubble_rise);
        self.anchors = advance_anchors(std::mem::take(&mut self.anchors), self.height);
        self
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => self.quit = true,
                InputEvent::MouseDown { button: MouseButton::Left, x, y } => {
                    let anchor = Anchor::spawn(x, y, self.config.anchor_weight, &mut self.rng);
                    self.anchors.push(anchor);
                }
                _ => {}
            }
        }
    }
}
