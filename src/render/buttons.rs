//! Control button layout and glyphs.
//!
//! Three buttons sit along the top edge of the field: restart in the
//! top-left corner, pause centered, close in the top-right corner.
//! Hit testing is inclusive on all edges; mapping clicks to `TickInput`
//! is the host's job.

use glam::IVec2;

use crate::consts::{BUTTON_MARGIN, BUTTON_SIZE, HEIGHT, WIDTH};
use crate::raster::line_points;
use crate::render::frame::{Frame, Rgba};

const CYAN: Rgba = Rgba::new(0, 255, 255);
const RED: Rgba = Rgba::new(255, 0, 0);

const ARROW_LENGTH: i32 = 20;
const ARROW_HEAD: i32 = 10;

/// Restart button, top-left corner
pub const RESTART: Button = Button {
    min: IVec2::new(BUTTON_MARGIN, HEIGHT - BUTTON_SIZE),
    max: IVec2::new(BUTTON_MARGIN + BUTTON_SIZE, HEIGHT - BUTTON_MARGIN),
};

/// Pause button, centered along the top edge
pub const PAUSE: Button = Button {
    min: IVec2::new(WIDTH / 2 - BUTTON_SIZE / 2, HEIGHT - BUTTON_SIZE),
    max: IVec2::new(WIDTH / 2 + BUTTON_SIZE / 2, HEIGHT - BUTTON_MARGIN),
};

/// Close button, top-right corner
pub const CLOSE: Button = Button {
    min: IVec2::new(WIDTH - BUTTON_MARGIN - BUTTON_SIZE, HEIGHT - BUTTON_SIZE),
    max: IVec2::new(WIDTH - BUTTON_MARGIN, HEIGHT - BUTTON_MARGIN),
};

/// Axis-aligned button rectangle, `min` bottom-left, `max` top-right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub min: IVec2,
    pub max: IVec2,
}

impl Button {
    /// Inclusive containment test for click dispatch
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Draw all three button glyphs
pub fn draw(frame: &mut Frame) {
    draw_restart(frame);
    draw_pause(frame);
    draw_close(frame);
}

/// Arrow glyph: horizontal shaft plus two head diagonals
fn draw_restart(frame: &mut Frame) {
    let tip = IVec2::new(RESTART.max.x, RESTART.min.y + BUTTON_SIZE / 2);
    frame.plot(&line_points(tip - IVec2::new(ARROW_LENGTH, 0), tip), CYAN);
    frame.plot(&line_points(tip, tip + IVec2::new(-ARROW_HEAD, ARROW_HEAD)), CYAN);
    frame.plot(&line_points(tip, tip + IVec2::new(-ARROW_HEAD, -ARROW_HEAD)), CYAN);
}

/// Two vertical bars
fn draw_pause(frame: &mut Frame) {
    let bar_width = BUTTON_SIZE / 4;
    let bar_spacing = BUTTON_SIZE / 2;
    for k in 0..2 {
        let x = PAUSE.min.x + (2 * k + 1) * bar_spacing / 2 - bar_width / 2;
        let bar = line_points(IVec2::new(x, PAUSE.max.y), IVec2::new(x, PAUSE.min.y));
        frame.plot(&bar, CYAN);
    }
}

/// Diagonal cross
fn draw_close(frame: &mut Frame) {
    let fall = line_points(
        IVec2::new(CLOSE.min.x, CLOSE.max.y),
        IVec2::new(CLOSE.max.x, CLOSE.min.y),
    );
    frame.plot(&fall, RED);
    frame.plot(&line_points(CLOSE.min, CLOSE.max), RED);
}
