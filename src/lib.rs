//! Raster Snake - two-player Snake on a rasterized pixel canvas
//!
//! Core modules:
//! - `raster`: Integer geometry kernel (octant-normalized midpoint line, midpoint circle)
//! - `sim`: Deterministic simulation (movement, food timers, collisions, scoring)
//! - `render`: CPU framebuffer and scene composition over the same raster primitives
//!
//! Collision testing and drawing share the `raster` pixel sets, so what the
//! player sees is exactly what the simulation collides against.

pub mod raster;
pub mod render;
pub mod sim;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Logical canvas size in pixel units, origin bottom-left
    pub const WIDTH: i32 = 800;
    pub const HEIGHT: i32 = 600;
    /// Movement quantum: every snake/food coordinate is a multiple of this
    pub const CELL_SIZE: i32 = 10;

    /// Tick interval at zero score (milliseconds)
    pub const BASE_SPEED_MS: u64 = 100;
    /// Tick interval floor
    pub const MIN_SPEED_MS: u64 = 30;
    /// Interval reduction per speed step
    pub const SPEEDUP_STEP_MS: u64 = 10;
    /// Points one player needs to contribute a speed step
    pub const POINTS_PER_STEP: u32 = 6;

    /// Simulated milliseconds between special food spawns
    pub const SPECIAL_FOOD_INTERVAL_MS: u64 = 15_000;
    /// How long an uneaten special food stays on the board
    pub const SPECIAL_FOOD_DURATION_MS: u64 = 7_000;
    /// Blink half-period while a special food is up
    pub const SPECIAL_FOOD_BLINK_MS: u64 = 500;

    /// Draw/collision radii in pixel units
    pub const SNAKE_RADIUS: i32 = 5;
    pub const NORMAL_FOOD_RADIUS: i32 = 5;
    pub const SPECIAL_FOOD_RADIUS: i32 = 10;

    /// Score awarded per food kind
    pub const FOOD_POINTS: u32 = 1;
    pub const SPECIAL_FOOD_POINTS: u32 = 3;

    /// Spawn cells - player 0 starts bottom-left heading right,
    /// player 1 starts top-right heading left
    pub const PLAYER1_START: IVec2 = IVec2::new(40, 40);
    pub const PLAYER2_START: IVec2 = IVec2::new(760, 560);

    /// UI button edge length and corner margin
    pub const BUTTON_SIZE: i32 = 40;
    pub const BUTTON_MARGIN: i32 = 10;
}

/// Whether a point lies on the playable canvas
#[inline]
pub fn in_bounds(p: IVec2) -> bool {
    p.x >= 0 && p.x < consts::WIDTH && p.y >= 0 && p.y < consts::HEIGHT
}
