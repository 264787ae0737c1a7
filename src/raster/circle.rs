//! Midpoint circle rasterizer
//!
//! Walks one octant with the integer decision term and emits the 8-way
//! reflection of every step. Duplicates at the octant seams (x == y, or a
//! zero coordinate) are left in place: the output feeds plotting, not set
//! membership.

use glam::IVec2;

/// Rasterize the circle of radius `r` around `center`.
///
/// Points come out in octant-walk order, eight reflections per step.
/// Radius 0 degenerates to eight copies of the center.
pub fn circle_points(center: IVec2, r: i32) -> Vec<IVec2> {
    let mut points = Vec::new();
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;
    push_octet(&mut points, center, x, y);
    while x < y {
        if d < 0 {
            d += 2 * x + 3;
        } else {
            y -= 1;
            d += 2 * (x - y) + 5;
        }
        x += 1;
        push_octet(&mut points, center, x, y);
    }
    points
}

/// Emit the eight symmetric reflections of one octant step.
fn push_octet(points: &mut Vec<IVec2>, c: IVec2, x: i32, y: i32) {
    points.push(IVec2::new(c.x + x, c.y + y));
    points.push(IVec2::new(c.x - x, c.y + y));
    points.push(IVec2::new(c.x + x, c.y - y));
    points.push(IVec2::new(c.x - x, c.y - y));
    points.push(IVec2::new(c.x + y, c.y + x));
    points.push(IVec2::new(c.x - y, c.y + x));
    points.push(IVec2::new(c.x + y, c.y - x));
    points.push(IVec2::new(c.x - y, c.y - x));
}
