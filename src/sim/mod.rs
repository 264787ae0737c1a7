//! Deterministic simulation core
//!
//! All gameplay rules live here, and they stay pure and deterministic:
//! - Discrete score-scaled ticks only
//! - Seeded RNG only
//! - Fixed player and check ordering
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve;
pub use spawn::{add_obstacle, food_position, obstacle_span};
pub use state::{
    DeathCause, Direction, GameEvent, GameMode, GamePhase, GameState, Obstacle, Outcome, Snake,
    SpecialFood,
};
pub use tick::{TickInput, interval_ms, tick};
