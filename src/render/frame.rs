//! CPU framebuffer for scene composition.
//!
//! Pixels live in the same bottom-left coordinate space as the game field,
//! so rasterizer output plots directly without flipping. Out-of-bounds
//! writes clip silently.

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::in_bounds;

/// Opaque RGBA8 color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// WIDTH x HEIGHT RGBA8 pixel surface, row 0 at the bottom
#[derive(Clone)]
pub struct Frame {
    pixels: Vec<Rgba>,
}

impl Frame {
    /// New frame filled with `color`
    pub fn new(color: Rgba) -> Self {
        Self {
            pixels: vec![color; (WIDTH * HEIGHT) as usize],
        }
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Write one pixel. Positions outside the field are dropped.
    #[inline]
    pub fn set(&mut self, p: IVec2, color: Rgba) {
        if in_bounds(p) {
            self.pixels[(p.y * WIDTH + p.x) as usize] = color;
        }
    }

    /// Read one pixel, `None` outside the field
    pub fn get(&self, p: IVec2) -> Option<Rgba> {
        in_bounds(p).then(|| self.pixels[(p.y * WIDTH + p.x) as usize])
    }

    /// Plot a batch of rasterized points in one color
    pub fn plot(&mut self, points: &[IVec2], color: Rgba) {
        for &p in points {
            self.set(p, color);
        }
    }

    /// Raw RGBA bytes for texture upload, bottom row first
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Rgba::new(0, 0, 0))
    }
}
