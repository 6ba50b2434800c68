//! Preview window for a rendered framebuffer
//!
//! Blits the framebuffer into a macroquad window, nearest-neighbour scaled
//! to fit while keeping its aspect ratio. Escape or closing the window quits.

use macroquad::prelude::{
    clear_background, draw_texture_ex, is_key_pressed, next_frame, screen_height, screen_width,
    vec2, Color as MqColor, Conf, DrawTextureParams, FilterMode, KeyCode, Texture2D, WHITE,
};
use macroquad::Window;

use crate::error::{RasterError, Result};
use crate::rasterizer::Framebuffer;

/// Window scale applied to the framebuffer size at startup
const INITIAL_SCALE: i32 = 2;

/// Open a window showing `fb` and block until it is closed.
/// Textures are limited to `u16` sides; larger buffers are
/// `InvalidDimension`.
pub fn show(fb: Framebuffer, title: String) -> Result<()> {
    texture_size(&fb)?;

    let conf = Conf {
        window_title: title,
        window_width: fb.width() as i32 * INITIAL_SCALE,
        window_height: fb.height() as i32 * INITIAL_SCALE,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    };

    tracing::debug!(width = fb.width(), height = fb.height(), "opening preview window");
    Window::from_config(conf, run(fb));
    Ok(())
}

fn texture_size(fb: &Framebuffer) -> Result<(u16, u16)> {
    match (u16::try_from(fb.width()), u16::try_from(fb.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RasterError::InvalidDimension {
            width: fb.width(),
            height: fb.height(),
        }),
    }
}

async fn run(fb: Framebuffer) {
    // Checked by `show` before the window opens
    let Ok((w, h)) = texture_size(&fb) else {
        return;
    };
    let texture = Texture2D::from_rgba8(w, h, &fb.to_rgba_bytes());
    texture.set_filter(FilterMode::Nearest);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(MqColor::from_rgba(30, 30, 35, 255));

        let (sw, sh) = (screen_width(), screen_height());
        let scale = (sw / fb.width() as f32).min(sh / fb.height() as f32);
        let (w, h) = (fb.width() as f32 * scale, fb.height() as f32 * scale);

        draw_texture_ex(
            &texture,
            (sw - w) / 2.0,
            (sh - h) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_size_rejects_sides_past_u16() {
        let fb = Framebuffer::new(320, 200).unwrap();
        assert_eq!(texture_size(&fb).unwrap(), (320, 200));

        let wide = Framebuffer::new(u16::MAX as usize + 1, 1).unwrap();
        assert!(matches!(
            texture_size(&wide),
            Err(RasterError::InvalidDimension {
                width: 65536,
                height: 1
            })
        ));
    }
}
