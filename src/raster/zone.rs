//! Octant (zone) classification for line normalization
//!
//! A line heading in any direction maps to an equivalent first-octant line
//! (dx >= dy >= 0) through one of eight fixed coordinate permutations and
//! sign flips. The rasterizer runs entirely in zone 0 and maps emitted
//! points back out, so one error-term loop covers every direction.

use glam::IVec2;

/// One of the eight 45-degree sectors around the origin, numbered
/// counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Z0,
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
    Z7,
}

impl Zone {
    /// All zones in index order
    pub const ALL: [Zone; 8] = [
        Zone::Z0,
        Zone::Z1,
        Zone::Z2,
        Zone::Z3,
        Zone::Z4,
        Zone::Z5,
        Zone::Z6,
        Zone::Z7,
    ];

    /// Octant of the direction vector from `a` to `b`.
    ///
    /// Boundary directions (axes and exact diagonals) resolve to the
    /// dominant-x member of each quadrant pair, so a degenerate a == b
    /// classifies as zone 0.
    pub fn of(a: IVec2, b: IVec2) -> Zone {
        let d = b - a;
        match (d.x >= 0, d.y >= 0, d.x.abs() >= d.y.abs()) {
            (true, true, true) => Zone::Z0,
            (true, true, false) => Zone::Z1,
            (false, true, false) => Zone::Z2,
            (false, true, true) => Zone::Z3,
            (false, false, true) => Zone::Z4,
            (false, false, false) => Zone::Z5,
            (true, false, false) => Zone::Z6,
            (true, false, true) => Zone::Z7,
        }
    }

    /// Map a point into the zone-0 frame.
    #[inline]
    pub fn to_zone0(self, p: IVec2) -> IVec2 {
        match self {
            Zone::Z0 => IVec2::new(p.x, p.y),
            Zone::Z1 => IVec2::new(p.y, p.x),
            Zone::Z2 => IVec2::new(p.y, -p.x),
            Zone::Z3 => IVec2::new(-p.x, p.y),
            Zone::Z4 => IVec2::new(-p.x, -p.y),
            Zone::Z5 => IVec2::new(-p.y, -p.x),
            Zone::Z6 => IVec2::new(-p.y, p.x),
            Zone::Z7 => IVec2::new(p.x, -p.y),
        }
    }

    /// Inverse of [`Zone::to_zone0`]: map a zone-0 point back out to
    /// this zone's frame.
    #[inline]
    pub fn from_zone0(self, p: IVec2) -> IVec2 {
        match self {
            Zone::Z0 => IVec2::new(p.x, p.y),
            Zone::Z1 => IVec2::new(p.y, p.x),
            Zone::Z2 => IVec2::new(-p.y, p.x),
            Zone::Z3 => IVec2::new(-p.x, p.y),
            Zone::Z4 => IVec2::new(-p.x, -p.y),
            Zone::Z5 => IVec2::new(-p.y, -p.x),
            Zone::Z6 => IVec2::new(p.y, -p.x),
            Zone::Z7 => IVec2::new(p.x, -p.y),
        }
    }

    /// Zone number in 0..=7
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}
