//! Integer geometry kernel
//!
//! All pixel geometry lives here. Everything is a pure function from
//! integer coordinates to pixel sets:
//! - No floating point, no division
//! - No game knowledge and no state
//!
//! The same point sets drive both drawing and collision, so the two can
//! never disagree about where an obstacle actually is.

pub mod circle;
pub mod line;
pub mod zone;

pub use circle::circle_points;
pub use line::line_points;
pub use zone::Zone;
