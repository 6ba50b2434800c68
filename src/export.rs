//! Export a framebuffer through the `image` crate (PNG, JPEG, BMP)

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::rasterizer::Framebuffer;

impl Framebuffer {
    /// Sides are at most `MAX_SIDE`, so they always fit the image's `u32`
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let c = self.pixels()[y as usize * self.width() + x as usize];
            Rgb(c.to_bytes())
        })
    }

    /// Save by file extension: `.ppm` uses the P3 writer, anything else
    /// goes through `image` (png, jpg/jpeg, bmp).
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("ppm"))
            .unwrap_or(false);

        if is_ppm {
            return self.save_ppm(path);
        }

        self.to_rgb_image().save(path)?;
        tracing::debug!(path = %path.display(), "wrote image");
        Ok(())
    }
}
