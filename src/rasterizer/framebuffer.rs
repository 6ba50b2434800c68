//! Framebuffer for software rendering

use super::types::Color;
use crate::error::{RasterError, Result};

/// Longest side accepted, so pixel coordinates always fit in an `i32`
pub const MAX_SIDE: usize = i32::MAX as usize;

/// Largest pixel count accepted (a 16384 x 16384 canvas)
pub const MAX_PIXELS: usize = 1 << 28;

/// Fixed-size grid of pixel colors, row-major, top row first.
///
/// Every cell always holds a valid color: construction fills the grid with
/// the background color. Coordinates are signed so primitives may extend
/// past the canvas; anything outside [0, width) x [0, height) is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
    background: Color,
}

impl Framebuffer {
    /// Pixel count for a `width` x `height` canvas, or `InvalidDimension`
    /// when a side is zero or the canvas exceeds `MAX_SIDE` / `MAX_PIXELS`
    pub fn pixel_count(width: usize, height: usize) -> Result<usize> {
        match width.checked_mul(height) {
            Some(len)
                if width > 0
                    && height > 0
                    && width <= MAX_SIDE
                    && height <= MAX_SIDE
                    && len <= MAX_PIXELS =>
            {
                Ok(len)
            }
            _ => Err(RasterError::InvalidDimension { width, height }),
        }
    }

    /// Black framebuffer. Fails with `InvalidDimension` if either side is
    /// zero or the canvas is larger than `MAX_SIDE` / `MAX_PIXELS` allow.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_background(width, height, Color::BLACK)
    }

    pub fn with_background(width: usize, height: usize, background: Color) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;

        Ok(Self {
            pixels: vec![background; len],
            width,
            height,
            background,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color the buffer was created with. A framebuffer read from a PPM
    /// file has no recorded background and reports black.
    pub fn background(&self) -> Color {
        self.background
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Index into `pixels`, or None when (x, y) is off the canvas
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Write a pixel. Off-canvas coordinates are silently ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Read a pixel, or None if (x, y) is off the canvas.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Subtract `amount` from every channel of every pixel
    pub fn darken(&mut self, amount: u8) {
        for pixel in &mut self.pixels {
            *pixel = pixel.darken(amount);
        }
    }

    /// Build a framebuffer from row-major pixels (used by the PPM reader).
    /// The background is set to black.
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if Self::pixel_count(width, height)? != pixels.len() {
            return Err(RasterError::InvalidDimension { width, height });
        }
        Ok(Self {
            pixels,
            width,
            height,
            background: Color::BLACK,
        })
    }

    /// RGBA bytes, 4 per pixel
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }

    /// Count of pixels currently holding `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}
