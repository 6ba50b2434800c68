//! glsr: a small software rasterizer
//!
//! Turns line segments and triangles into pixels in an in-memory
//! framebuffer and writes the result out as a plain-text P3 PPM image:
//! - Parametric Bresenham-style line drawing
//! - Wireframe or barycentric filled triangles
//! - Painter's algorithm (later draws overwrite earlier ones)
//! - RON scene files describing a canvas and its primitives

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod export;
pub mod ppm;
pub mod rasterizer;
pub mod scene;

#[cfg(feature = "preview")]
pub mod preview;

pub use error::{PpmError, RasterError, Result};
pub use rasterizer::*;
pub use scene::{load_scene, load_scene_from_str, save_scene, scene_to_string, Primitive, Scene};
