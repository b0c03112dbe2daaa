//! Aquarium: a fish, rising bubbles and sinking anchors
//!
//! Controls:
//! - Up/Down: change depth
//! - Space: release bubbles
//! - 0-9: change swim speed
//! - Left click: drop an anchor
//! - Escape or closing the window: quit
//!
//! Exits with status 1 if any image fails to load.

mod config;
mod game;
mod input;
mod texture;

use macroquad::logging::{error, info};
use macroquad::prelude::*;

use config::{config_search_paths, resolve_config, SCREEN_HEIGHT, SCREEN_WIDTH};
use game::{draw_scene, Aquarium, TickClock};
use input::InputState;
use texture::SpriteImages;

fn window_conf() -> Conf {
    Conf {
        window_title: "Aquarium".to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed for runs without a configured one
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

/// Block until `target_frame_time` seconds have passed since `frame_start`.
/// Sleeps for the bulk, then spins for precision.
fn limit_frame_rate(frame_start: f64, target_frame_time: f64) {
    let remaining = target_frame_time - (get_time() - frame_start);
    if remaining <= 0.0 {
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }
    while get_time() - frame_start < target_frame_time {
        std::hint::spin_loop();
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let (config, source) = resolve_config(&config_search_paths());
    match &source {
        Some(path) => info!("Config: {}", path.display()),
        None => info!("Config: built-in defaults"),
    }

    let images = match SpriteImages::load(&config) {
        Ok(images) => images,
        Err(e) => {
            error!("Error loading image: {} - {}", e.path().display(), e);
            std::process::exit(1);
        }
    };
    let fish_size = images.fish_size();
    let sprites = images.upload();

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("Seed: {}", seed);

    let target_frame_time = config.frame_time();
    let mut clock = TickClock::new(config.fps);
    let mut input = InputState::new();
    let mut aquarium = Aquarium::new(config, fish_size, seed);

    loop {
        let frame_start = get_time();

        let frame = input.poll(clock.now_ms());
        aquarium = aquarium.step(&frame);
        draw_scene(&aquarium, &sprites);

        limit_frame_rate(frame_start, target_frame_time);
        next_frame().await;
        clock.tick();

        if aquarium.quit {
            break;
        }
    }

    info!("Quit after {} frames", clock.frames());
}
