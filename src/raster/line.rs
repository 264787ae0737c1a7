//! Midpoint (Bresenham) line rasterizer
//!
//! The segment is normalized into the first octant, walked with the classic
//! integer error term, and every emitted point is mapped back through the
//! inverse zone transform. Integer-only throughout; the degenerate
//! single-point segment takes the same path with no division anywhere.

use glam::IVec2;

use crate::raster::zone::Zone;

/// Rasterize the segment from `a` to `b`, endpoints included.
///
/// Emits exactly `max(|dx|, |dy|) + 1` points, one per unit step along the
/// dominant axis, first `a` and last `b`, with no duplicates. The error
/// term starts at `2*dy - dx`; a non-positive term takes the E step, a
/// positive one the NE step.
pub fn line_points(a: IVec2, b: IVec2) -> Vec<IVec2> {
    let zone = Zone::of(a, b);
    let a0 = zone.to_zone0(a);
    let b0 = zone.to_zone0(b);
    // In zone 0: dx >= dy >= 0
    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;

    let mut d = 2 * dy - dx;
    let d_e = 2 * dy;
    let d_ne = 2 * (dy - dx);

    let mut points = Vec::with_capacity((dx + 1) as usize);
    let mut x = a0.x;
    let mut y = a0.y;
    while x <= b0.x {
        points.push(zone.from_zone0(IVec2::new(x, y)));
        if d <= 0 {
            d += d_e;
        } else {
            y += 1;
            d += d_ne;
        }
        x += 1;
    }
    points
}
