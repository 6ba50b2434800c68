//! Core rendering functions
//! Line stepping and triangle rasterization into a framebuffer

use super::framebuffer::Framebuffer;
use super::math::{barycentric, determinant, edge_function, Vec2, DEGENERATE_EPSILON};
use super::types::{Color, EdgeRule, FillMode, RasterSettings};

/// Draw a 1-pixel-wide line from `p0` to `p1`.
///
/// Endpoints are rounded to pixel coordinates, then the line is stepped one
/// pixel per unit along its dominant axis, interpolating the other axis.
/// A zero-length segment writes a single pixel.
pub fn draw_line(fb: &mut Framebuffer, p0: Vec2, p1: Vec2, color: Color) {
    let mut p0 = p0.round();
    let mut p1 = p1.round();

    // Transpose steep lines so x is always the dominant axis
    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
    if steep {
        p0 = p0.transpose();
        p1 = p1.transpose();
    }

    // Make it left-to-right
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let plot = |fb: &mut Framebuffer, x: i32, y: i32| {
        if steep {
            fb.set_pixel(y, x, color);
        } else {
            fb.set_pixel(x, y, color);
        }
    };

    let x0 = p0.x as i32;
    let x1 = p1.x as i32;

    if x0 == x1 {
        plot(fb, x0, p0.y as i32);
        return;
    }

    // Steps past the canvas along the dominant axis can't land anywhere.
    // Sides are at most MAX_SIDE, so the cast is lossless.
    let limit = (if steep { fb.height() } else { fb.width() }) as i32;
    let start = x0.max(0);
    let end = x1.min(limit - 1);

    let span = p1.x - p0.x;
    for x in start..=end {
        let t = (x as f32 - p0.x) / span;
        let y = (p0.y * (1.0 - t) + p1.y * t).round() as i32;
        plot(fb, x, y);
    }
}

/// Draw a triangle with the given fill mode and the inclusive edge rule
pub fn draw_triangle(
    fb: &mut Framebuffer,
    v0: Vec2,
    v1: Vec2,
    v2: Vec2,
    color: Color,
    mode: FillMode,
) {
    let settings = RasterSettings::default().with_fill_mode(mode);
    draw_triangle_with(fb, v0, v1, v2, color, &settings);
}

/// Draw a triangle using explicit rasterizer settings
pub fn draw_triangle_with(
    fb: &mut Framebuffer,
    v0: Vec2,
    v1: Vec2,
    v2: Vec2,
    color: Color,
    settings: &RasterSettings,
) {
    match settings.fill_mode {
        FillMode::Wireframe => {
            draw_line(fb, v0, v1, color);
            draw_line(fb, v1, v2, color);
            draw_line(fb, v2, v0, color);
        }
        FillMode::Filled => {
            let [v0, v1, v2] = canonical_order(v0, v1, v2);
            match settings.edge_rule {
                EdgeRule::Inclusive => fill_inclusive(fb, v0, v1, v2, color),
                EdgeRule::TopLeft => fill_top_left(fb, v0, v1, v2, color),
            }
        }
    }
}

/// Vertices sorted by (y, x), so the f32 inside test sees the same
/// arithmetic whatever order the caller listed them in
fn canonical_order(v0: Vec2, v1: Vec2, v2: Vec2) -> [Vec2; 3] {
    let mut vertices = [v0, v1, v2];
    vertices.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
    vertices
}

/// Inclusive pixel bounds of a triangle, clipped to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundingBox {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

fn bounding_box(fb: &Framebuffer, v0: Vec2, v1: Vec2, v2: Vec2) -> Option<BoundingBox> {
    let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0);
    let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(fb.width() as f32 - 1.0);
    let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0);
    let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(fb.height() as f32 - 1.0);

    if min_x > max_x || min_y > max_y {
        return None;
    }

    Some(BoundingBox {
        min_x: min_x as i32,
        max_x: max_x as i32,
        min_y: min_y as i32,
        max_y: max_y as i32,
    })
}

fn is_degenerate(v0: Vec2, v1: Vec2, v2: Vec2) -> bool {
    let degenerate = determinant(v1 - v0, v2 - v0).abs() < DEGENERATE_EPSILON;
    if degenerate {
        tracing::trace!(?v0, ?v1, ?v2, "skipping zero-area triangle");
    }
    degenerate
}

/// Barycentric scan: color every pixel with s >= 0, t >= 0, s + t <= 1
fn fill_inclusive(fb: &mut Framebuffer, v0: Vec2, v1: Vec2, v2: Vec2, color: Color) {
    if is_degenerate(v0, v1, v2) {
        return;
    }
    let Some(bb) = bounding_box(fb, v0, v1, v2) else {
        return;
    };

    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            let p = Vec2::new(x as f32, y as f32);
            if let Some((s, t)) = barycentric(p, v0, v1, v2) {
                if s >= 0.0 && t >= 0.0 && s + t <= 1.0 {
                    fb.set_pixel(x, y, color);
                }
            }
        }
    }
}

/// Edge `a -> b` of a positively wound triangle owns its boundary pixels
/// if it is a top edge (horizontal, interior below) or a left edge.
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    (a.y == b.y && b.x > a.x) || b.y < a.y
}

/// Edge-function scan with the top-left tie-break on boundaries
fn fill_top_left(fb: &mut Framebuffer, v0: Vec2, v1: Vec2, v2: Vec2, color: Color) {
    if is_degenerate(v0, v1, v2) {
        return;
    }
    let Some(bb) = bounding_box(fb, v0, v1, v2) else {
        return;
    };

    // Wind so that interior points are positive for every edge
    let (v1, v2) = if determinant(v1 - v0, v2 - v0) < 0.0 {
        (v2, v1)
    } else {
        (v1, v2)
    };

    let edges = [(v0, v1), (v1, v2), (v2, v0)];
    let owns = edges.map(|(a, b)| is_top_left(a, b));

    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            let p = Vec2::new(x as f32, y as f32);
            let inside = edges.iter().zip(owns).all(|(&(a, b), owned)| {
                let w = edge_function(a, b, p);
                w > 0.0 || (w == 0.0 && owned)
            });
            if inside {
                fb.set_pixel(x, y, color);
            }
        }
    }
}
