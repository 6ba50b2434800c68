//! Plain-text P3 PPM images
//!
//! Output layout: `P3`, `<width> <height>`, `255`, then one line per row
//! (top row first) of space-separated `r g b` triples with a trailing space.
//! The reader accepts any whitespace layout, `#` comments and max values
//! other than 255 (channels are rescaled to 0..=255).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{PpmError, Result};
use crate::rasterizer::{Color, Framebuffer};

/// Max channel value written to every file
pub const MAX_COLOR_VALUE: u32 = 255;

impl Framebuffer {
    /// P3 bytes for the whole framebuffer
    pub fn serialize(&self) -> Vec<u8> {
        let mut text = format!(
            "P3\n{} {}\n{}\n",
            self.width(),
            self.height(),
            MAX_COLOR_VALUE
        );
        text.reserve(self.pixels().len() * 12);

        for row in self.pixels().chunks(self.width()) {
            for c in row {
                text.push_str(&format!("{} {} {} ", c.r, c.g, c.b));
            }
            text.push('\n');
        }
        text.into_bytes()
    }

    /// Write the framebuffer as P3 text
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.serialize())
    }

    /// Save as a .ppm file
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut out)?;
        out.flush()?;
        tracing::debug!(
            path = %path.display(),
            width = self.width(),
            height = self.height(),
            "wrote ppm"
        );
        Ok(())
    }
}

/// Load a P3 image from disk
pub fn load_ppm<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
    let contents = fs::read_to_string(path)?;
    parse_ppm(&contents)
}

/// Parse P3 text into a framebuffer
pub fn parse_ppm(src: &str) -> Result<Framebuffer> {
    let mut tokens = src.lines().flat_map(|line| {
        let line = line.find('#').map_or(line, |i| &line[..i]);
        line.split_whitespace()
    });

    let magic = tokens.next().ok_or(PpmError::MissingToken("magic"))?;
    if magic != "P3" {
        return Err(PpmError::BadMagic(magic.to_string()).into());
    }

    let width = next_number(&mut tokens, "width")? as usize;
    let height = next_number(&mut tokens, "height")? as usize;
    let max = next_number(&mut tokens, "max value")?;
    if max == 0 || max > 65535 {
        return Err(PpmError::InvalidMaxValue(max).into());
    }

    let len = Framebuffer::pixel_count(width, height)?;

    let mut pixels = Vec::with_capacity(len.min(1 << 20));
    for _ in 0..len {
        let r = next_channel(&mut tokens, "red", max)?;
        let g = next_channel(&mut tokens, "green", max)?;
        let b = next_channel(&mut tokens, "blue", max)?;
        pixels.push(Color::new(r, g, b));
    }

    if let Some(extra) = tokens.next() {
        return Err(PpmError::TrailingData(extra.to_string()).into());
    }

    Framebuffer::from_pixels(width, height, pixels)
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> std::result::Result<u32, PpmError> {
    let token = tokens.next().ok_or(PpmError::MissingToken(field))?;
    token.parse().map_err(|_| PpmError::InvalidToken {
        field,
        token: token.to_string(),
    })
}

fn next_channel<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
    max: u32,
) -> std::result::Result<u8, PpmError> {
    let value = next_number(tokens, field)?;
    if value > max {
        return Err(PpmError::ValueOutOfRange { value, max });
    }
    Ok(((value * MAX_COLOR_VALUE + max / 2) / max) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use crate::rasterizer::{draw_triangle, FillMode, Vec2};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "glsr_{name}_{}_{}.ppm",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn serialize_layout() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(1, 0, Color::new(255, 128, 7));
        let text = String::from_utf8(fb.serialize()).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n0 0 0 255 128 7 \n0 0 0 0 0 0 \n");
    }

    #[test]
    fn write_ppm_matches_serialize() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.set_pixel(2, 1, Color::new(4, 5, 6));
        let mut out = Vec::new();
        fb.write_ppm(&mut out).unwrap();
        assert_eq!(out, fb.serialize());
    }

    #[test]
    fn loaded_image_reports_black_background() {
        let bg = Color::new(10, 20, 30);
        let fb = Framebuffer::with_background(2, 2, bg).unwrap();
        let parsed = parse_ppm(std::str::from_utf8(&fb.serialize()).unwrap()).unwrap();
        assert_eq!(parsed.background(), Color::BLACK);
        assert_eq!(parsed.get_pixel(0, 0), Some(bg));
    }

    #[test]
    fn fresh_framebuffer_reparses_as_background() {
        let bg = Color::new(10, 20, 30);
        let fb = Framebuffer::with_background(5, 3, bg).unwrap();
        let parsed = parse_ppm(std::str::from_utf8(&fb.serialize()).unwrap()).unwrap();

        assert_eq!(parsed.width(), 5);
        assert_eq!(parsed.height(), 3);
        assert_eq!(parsed.pixels().len(), 15);
        assert!(parsed.pixels().iter().all(|&c| c == bg));
    }

    #[test]
    fn drawn_pixels_survive_a_file_round_trip() {
        let mut fb = Framebuffer::new(16, 12).unwrap();
        draw_triangle(
            &mut fb,
            Vec2::new(1.0, 1.0),
            Vec2::new(14.0, 3.0),
            Vec2::new(4.0, 11.0),
            Color::new(60, 170, 255),
            FillMode::Filled,
        );

        let path = temp_path("round_trip");
        fb.save_ppm(&path).unwrap();
        let loaded = load_ppm(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.pixels(), fb.pixels());
    }

    #[test]
    fn reader_skips_comments_and_whitespace() {
        let src = "P3 # magic\n# a whole comment line\n2   1\n255\n255 0 0\t0 0 255\n";
        let fb = parse_ppm(src).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.get_pixel(1, 0), Some(Color::BLUE));
    }

    #[test]
    fn reader_rescales_max_value() {
        let fb = parse_ppm("P3\n2 1\n15\n7 0 15 15 15 15\n").unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(Color::new(119, 0, 255)));
        assert_eq!(fb.get_pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn reader_errors() {
        assert!(matches!(
            parse_ppm("P6\n1 1\n255\n0 0 0\n"),
            Err(RasterError::Ppm(PpmError::BadMagic(_)))
        ));
        assert!(matches!(
            parse_ppm(""),
            Err(RasterError::Ppm(PpmError::MissingToken("magic")))
        ));
        assert!(matches!(
            parse_ppm("P3\nx 1\n255\n"),
            Err(RasterError::Ppm(PpmError::InvalidToken { field: "width", .. }))
        ));
        assert!(matches!(
            parse_ppm("P3\n1 1\n0\n0 0 0\n"),
            Err(RasterError::Ppm(PpmError::InvalidMaxValue(0)))
        ));
        assert!(matches!(
            parse_ppm("P3\n2 2\n255\n0 0 0\n"),
            Err(RasterError::Ppm(PpmError::MissingToken("red")))
        ));
        assert!(matches!(
            parse_ppm("P3\n1 1\n255\n300 0 0\n"),
            Err(RasterError::Ppm(PpmError::ValueOutOfRange {
                value: 300,
                max: 255
            }))
        ));
        assert!(matches!(
            parse_ppm("P3\n1 1\n255\n0 0 0 9\n"),
            Err(RasterError::Ppm(PpmError::TrailingData(_)))
        ));
        assert!(matches!(
            parse_ppm("P3\n0 1\n255\n"),
            Err(RasterError::InvalidDimension {
                width: 0,
                height: 1
            })
        ));
        // Header alone is enough to reject an oversized canvas
        assert!(matches!(
            parse_ppm("P3\n4000000000 4000000000\n255\n"),
            Err(RasterError::InvalidDimension { .. })
        ));
    }
}
