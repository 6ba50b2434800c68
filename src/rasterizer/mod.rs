//! Software rasterizer
//!
//! Features:
//! - Bounds-checked framebuffer (off-canvas writes are dropped)
//! - Parametric line stepping along the dominant axis
//! - Wireframe and filled triangles, fill mode passed per call
//! - Painter's algorithm, no depth test

mod framebuffer;
mod math;
mod render;
mod types;

pub use framebuffer::*;
pub use math::*;
pub use render::*;
pub use types::*;

/// Canvas size used by the original lab scene
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 320;
