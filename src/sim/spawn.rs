//! Random placement: food cells, special food, obstacle walls
//!
//! Every draw goes through the `GameState` RNG, so two runs with the same
//! seed place everything identically.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::*;

/// Random grid-aligned position strictly inside the canvas
pub fn food_position(rng: &mut Pcg32) -> IVec2 {
    let x = rng.random_range(1..(WIDTH / CELL_SIZE)) * CELL_SIZE;
    let y = rng.random_range(1..(HEIGHT / CELL_SIZE)) * CELL_SIZE;
    IVec2::new(x, y)
}

/// Replace the eaten normal food with a fresh one
pub fn respawn_food(state: &mut GameState) {
    state.food = food_position(&mut state.rng);
    log::debug!("food respawned at {:?}", state.food);
}

/// Put a special food on the board and restart both of its timers
pub fn spawn_special_food(state: &mut GameState) {
    let pos = food_position(&mut state.rng);
    state.special_food.pos = Some(pos);
    state.special_food.spawned_at = state.time_passed;
    state.special_food.last_spawn_at = state.time_passed;
    state.events.push(GameEvent::SpecialFoodSpawned { pos });
    log::info!("special food at {:?}, t={}ms", pos, state.time_passed);
}

/// Random wall span: horizontal or vertical, uniformly chosen, always
/// reaching past the canvas midline
pub fn obstacle_span(rng: &mut Pcg32) -> (IVec2, IVec2) {
    if rng.random_bool(0.5) {
        let y = rng.random_range(1..=HEIGHT - 2);
        let x1 = rng.random_range(1..=WIDTH / 2);
        let x2 = rng.random_range(WIDTH / 2..=WIDTH - 2);
        (IVec2::new(x1, y), IVec2::new(x2, y))
    } else {
        let x = rng.random_range(1..=WIDTH - 2);
        let y1 = rng.random_range(1..=HEIGHT / 2);
        let y2 = rng.random_range(HEIGHT / 2..=HEIGHT - 2);
        (IVec2::new(x, y1), IVec2::new(x, y2))
    }
}

/// Rasterize one fresh random wall into the world
pub fn add_obstacle(state: &mut GameState) {
    let (a, b) = obstacle_span(&mut state.rng);
    let obstacle = Obstacle::new(a, b);
    log::info!(
        "obstacle {:?} -> {:?} ({} pixels)",
        a,
        b,
        obstacle.points.len()
    );
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleAdded { a, b });
}
