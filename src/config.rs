//! Aquarium configuration
//!
//! Every tunable of the scene lives here with its default value. An optional
//! `aquarium.ron` file can override any subset of fields; fields it leaves out
//! keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Logical canvas width in pixels
pub const SCREEN_WIDTH: i32 = 800;
/// Logical canvas height in pixels
pub const SCREEN_HEIGHT: i32 = 600;

/// File name searched for in the working directory and the config directory
pub const CONFIG_FILE_NAME: &str = "aquarium.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which way the fish starts out swimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartDirection {
    #[default]
    Left,
    Right,
}

/// Inclusive integer range used for random bubble diameters and anchor weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Image paths loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub anchor: PathBuf,
    pub fish: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("images/water_background.png"),
            anchor: PathBuf::from("images/anchor.png"),
            fish: PathBuf::from("images/fish.png"),
        }
    }
}

/// All scene tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AquariumConfig {
    /// Frame rate cap
    pub fps: u32,
    /// Minimum milliseconds between two bubbles
    pub bubble_debounce_ms: u64,
    /// Pixels a bubble rises per frame
    pub bubble_rise: i32,
    /// Pixels the fish moves per frame on Up/Down
    pub depth_step: i32,
    pub bubble_diameter: IntRange,
    pub anchor_weight: IntRange,
    /// Speed for digit keys 0 through 9, in key order
    pub speed_levels: [i32; 10],
    pub fish_start: (i32, i32),
    pub fish_start_speed: i32,
    pub fish_start_direction: StartDirection,
    /// Upscale the fish sprite with Scale2x after loading
    pub fish_scale2x: bool,
    pub assets: AssetPaths,
    pub instructions: String,
    pub font_size: u16,
    /// Fixed RNG seed (None = seeded from the clock)
    pub seed: Option<u64>,
}

impl Default for AquariumConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            bubble_debounce_ms: 200,
            bubble_rise: 5,
            depth_step: 5,
            bubble_diameter: IntRange::new(3, 10),
            anchor_weight: IntRange::new(5, 20),
            speed_levels: [1, 3, 5, 7, 9, 11, 13, 15, 17, 19],
            fish_start: (400, 300),
            fish_start_speed: 5,
            fish_start_direction: StartDirection::Left,
            fish_scale2x: true,
            assets: AssetPaths::default(),
            instructions: "Press UP/DOWN arrows to adjust depth, SPACE to release bubbles, \
                           0-9 to change speed, mouse-click to drop anchors."
                .to_string(),
            font_size: 18,
            seed: None,
        }
    }
}

impl AquariumConfig {
    /// Target frame time in seconds
    pub fn frame_time(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ValidationError("fps must be at least 1".to_string()));
        }
        if self.bubble_rise <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "bubble_rise must be positive, got {}",
                self.bubble_rise
            )));
        }
        if self.depth_step <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "depth_step must be positive, got {}",
                self.depth_step
            )));
        }
        for (name, range) in [("bubble_diameter", self.bubble_diameter), ("anchor_weight", self.anchor_weight)] {
            if range.min > range.max {
                return Err(ConfigError::ValidationError(format!(
                    "{} range is inverted: {}..={}",
                    name, range.min, range.max
                )));
            }
            if range.min <= 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, range.min
                )));
            }
        }
        if let Some(level) = self.speed_levels.iter().find(|&&s| s <= 0) {
            return Err(ConfigError::ValidationError(format!(
                "speed levels must be positive, got {}",
                level
            )));
        }
        if self.fish_start_speed <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "fish_start_speed must be positive, got {}",
                self.fish_start_speed
            )));
        }
        Ok(())
    }
}

/// Load a config from a RON file and validate it
pub fn load_config(path: &Path) -> Result<AquariumConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Parse a config from a RON string and validate it
pub fn load_config_from_str(contents: &str) -> Result<AquariumConfig, ConfigError> {
    let config: AquariumConfig = ron::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Places an `aquarium.ron` is looked for, in priority order
pub fn config_search_paths() -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("aquarium").join(CONFIG_FILE_NAME));
    }

    paths
}

/// Resolve the active config: first readable file in `search`, else defaults.
///
/// Returns the config and the file it came from. A file that exists but fails
/// to parse or validate is reported and skipped.
pub fn resolve_config(search: &[PathBuf]) -> (AquariumConfig, Option<PathBuf>) {
    for path in search {
        if !path.exists() {
            continue;
        }
        match load_config(path) {
            Ok(config) => return (config, Some(path.clone())),
            Err(e) => {
                macroquad::logging::warn!("Ignoring config {}: {}", path.display(), e);
            }
        }
    }
    (AquariumConfig::default(), None)
}
