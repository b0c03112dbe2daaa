//! Scene sprites
//!
//! Loads the three images the aquarium needs, prepares them on the CPU with
//! `import`, then uploads each one once as a GPU texture.
//!
//! - background: stretched to the window size
//! - anchor: used as-is
//! - fish: optionally Scale2x upscaled, uploaded in both facings

mod import;

pub use import::{load_rgba, mirror, scale2x, stretch, AssetError};

use image::RgbaImage;
use macroquad::prelude::{FilterMode, Texture2D};

use crate::config::{AquariumConfig, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Textures for one aquarium
pub struct Sprites {
    pub background: Texture2D,
    pub anchor: Texture2D,
    /// Fish as drawn in the source art (facing left)
    pub fish_left: Texture2D,
    /// Mirrored fish (facing right)
    pub fish_right: Texture2D,
}

/// CPU-side sprite images, ready for upload
pub struct SpriteImages {
    pub background: RgbaImage,
    pub anchor: RgbaImage,
    pub fish: RgbaImage,
}

impl SpriteImages {
    pub fn load(config: &AquariumConfig) -> Result<Self, AssetError> {
        let paths = &config.assets;

        let background = load_rgba(&paths.background)?;
        let background = stretch(&background, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);

        let anchor = load_rgba(&paths.anchor)?;

        let fish = load_rgba(&paths.fish)?;
        let fish = if config.fish_scale2x { scale2x(&fish) } else { fish };

        for (path, img) in [(&paths.background, &background), (&paths.anchor, &anchor), (&paths.fish, &fish)] {
            macroquad::logging::info!(
                "Loaded {} ({}x{})",
                path.display(),
                img.width(),
                img.height()
            );
        }

        Ok(Self { background, anchor, fish })
    }

    /// Fish bounding box size in pixels
    pub fn fish_size(&self) -> (i32, i32) {
        (self.fish.width() as i32, self.fish.height() as i32)
    }

    /// Create the GPU textures. Must run after the window exists.
    pub fn upload(self) -> Sprites {
        let fish_right = mirror(&self.fish);
        Sprites {
            background: to_texture(&self.background),
            anchor: to_texture(&self.anchor),
            fish_left: to_texture(&self.fish),
            fish_right: to_texture(&fish_right),
        }
    }
}

/// Upload an RGBA image; dimensions were checked against u16 at load time
fn to_texture(img: &RgbaImage) -> Texture2D {
    let texture = Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
    texture.set_filter(FilterMode::Nearest);
    texture
}
