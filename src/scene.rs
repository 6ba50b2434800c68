//! Scene loading, saving and rendering
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files. A scene
//! is a canvas size plus an ordered list of primitives; rendering issues the
//! draw calls in list order, so later primitives paint over earlier ones.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rasterizer::{
    draw_line, draw_triangle_with, Color, EdgeRule, FillMode, Framebuffer, RasterSettings, Vec2,
    HEIGHT, WIDTH,
};

/// A single draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Triangle {
        v0: Vec2,
        v1: Vec2,
        v2: Vec2,
        color: Color,
        /// Overrides the scene's fill mode for this triangle
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<FillMode>,
    },
}

impl Primitive {
    pub fn line(from: Vec2, to: Vec2, color: Color) -> Self {
        Primitive::Line { from, to, color }
    }

    pub fn triangle(v0: Vec2, v1: Vec2, v2: Vec2, color: Color) -> Self {
        Primitive::Triangle {
            v0,
            v1,
            v2,
            color,
            mode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub fill_mode: FillMode,
    #[serde(default)]
    pub edge_rule: EdgeRule,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Empty black scene
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            fill_mode: FillMode::default(),
            edge_rule: EdgeRule::default(),
            primitives: Vec::new(),
        }
    }

    /// The three-triangle lab picture on a 320x320 canvas
    pub fn demo() -> Self {
        let red = Color::new(255, 0, 0);
        let light_blue = Color::new(60, 170, 255);
        let dark_green = Color::new(0, 110, 40);

        let mut scene = Self::new(WIDTH, HEIGHT);
        scene.primitives = vec![
            Primitive::triangle(
                Vec2::new(160.0, 60.0),
                Vec2::new(150.0, 10.0),
                Vec2::new(75.0, 190.0),
                red,
            ),
            Primitive::triangle(
                Vec2::new(200.0, 30.0),
                Vec2::new(250.0, 50.0),
                Vec2::new(220.0, 100.0),
                light_blue,
            ),
            Primitive::triangle(
                Vec2::new(150.0, 125.0),
                Vec2::new(250.0, 225.0),
                Vec2::new(225.0, 125.0),
                dark_green,
            ),
        ];
        scene
    }

    /// Scene-wide rasterizer settings
    pub fn settings(&self) -> RasterSettings {
        RasterSettings::new(self.fill_mode, self.edge_rule)
    }

    /// Render with the scene's own settings; a triangle's `mode` wins
    /// over the scene fill mode.
    pub fn render(&self) -> Result<Framebuffer> {
        self.render_inner(self.settings(), false)
    }

    /// Render with `settings` forced onto every triangle
    pub fn render_with(&self, settings: &RasterSettings) -> Result<Framebuffer> {
        self.render_inner(*settings, true)
    }

    fn render_inner(&self, settings: RasterSettings, forced: bool) -> Result<Framebuffer> {
        let mut fb = Framebuffer::with_background(self.width, self.height, self.background)?;

        tracing::debug!(
            width = self.width,
            height = self.height,
            primitives = self.primitives.len(),
            ?settings,
            "rendering scene"
        );

        for primitive in &self.primitives {
            match *primitive {
                Primitive::Line { from, to, color } => draw_line(&mut fb, from, to, color),
                Primitive::Triangle {
                    v0,
                    v1,
                    v2,
                    color,
                    mode,
                } => {
                    let settings = match mode {
                        Some(mode) if !forced => settings.with_fill_mode(mode),
                        _ => settings,
                    };
                    draw_triangle_with(&mut fb, v0, v1, v2, color, &settings);
                }
            }
        }

        Ok(fb)
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Load a scene from a RON string
pub fn load_scene_from_str(s: &str) -> Result<Scene> {
    Ok(ron::from_str(s)?)
}

pub fn scene_to_string(scene: &Scene) -> Result<String> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    Ok(ron::ser::to_string_pretty(scene, config)?)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let contents = scene_to_string(scene)?;
    fs::write(path, contents)?;
    Ok(())
}
