//! Scene rendering
//!
//! Draws one frame back to front: background, bubbles, anchors, fish, then the
//! instruction label.

use macroquad::prelude::*;

use crate::texture::Sprites;
use super::Aquarium;

/// Label baseline offset from the bottom of the window
const LABEL_BOTTOM_MARGIN: f32 = 10.0;

/// Draw the whole scene. The caller presents the frame.
pub fn draw_scene(aquarium: &Aquarium, sprites: &Sprites) {
    clear_background(BLACK);
    draw_texture(&sprites.background, 0.0, 0.0, WHITE);

    // Bubble size is used as the circle radius
    for bubble in &aquarium.bubbles {
        draw_circle(bubble.x as f32, bubble.y as f32, bubble.diameter as f32, WHITE);
    }

    for anchor in &aquarium.anchors {
        draw_texture(&sprites.anchor, anchor.x as f32, anchor.y as f32, WHITE);
    }

    let fish = &aquarium.fish;
    let fish_texture = if fish.mirrored() { &sprites.fish_right } else { &sprites.fish_left };
    draw_texture_ex(
        fish_texture,
        fish.x as f32,
        fish.y as f32,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(fish.width as f32, fish.height as f32)),
            ..Default::default()
        },
    );

    draw_instructions(aquarium);
}

/// Instruction text centred horizontally, centred vertically on `height - 10`
fn draw_instructions(aquarium: &Aquarium) {
    let config = aquarium.config();
    let text = config.instructions.as_str();
    let font_size = config.font_size;

    let dims = measure_text(text, None, font_size, 1.0);
    let x = (aquarium.width as f32 - dims.width) * 0.5;
    let center_y = aquarium.height as f32 - LABEL_BOTTOM_MARGIN;
    let baseline = center_y - dims.height * 0.5 + dims.offset_y;
    draw_text(text, x, baseline, font_size as f32, WHITE);
}
