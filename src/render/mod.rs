//! CPU scene rendering.
//!
//! A software framebuffer plus the fixed draw pass that composes the game
//! scene with the shared rasterizer. No GPU and no window; hosts take
//! `Frame::as_bytes` and present it however they like.

pub mod buttons;
pub mod frame;
pub mod scene;

pub use frame::{Frame, Rgba};
pub use scene::render;
