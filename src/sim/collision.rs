//! Collision rules and scoring
//!
//! One pass per tick, after movement: per-snake fatal checks in a fixed
//! order (boundary, self-bite, obstacle), then eating, then the
//! inter-snake pass, then the termination decision. Players resolve in
//! index order, so player 0's side effects (respawned food, a fresh wall)
//! are already in place for player 1's checks on the same tick.

use glam::IVec2;

use super::spawn;
use super::state::{DeathCause, GameEvent, GameMode, GamePhase, GameState, Snake};
use crate::consts::*;
use crate::in_bounds;

/// Run the full post-move collision pass. Terminal ticks set the outcome
/// and flip the phase to `Over`.
pub fn resolve(state: &mut GameState, mode: GameMode) {
    for player in 0..mode.player_count() {
        resolve_player(state, player);
    }

    if mode == GameMode::Two {
        let [s1, s2] = &state.snakes;
        if s1.alive && s2.alive && snakes_crossed(s1, s2) {
            kill(state, 0, DeathCause::HitOtherSnake);
            kill(state, 1, DeathCause::HitOtherSnake);
        }
    }

    let terminal = match mode {
        GameMode::Single => !state.snakes[0].alive,
        GameMode::Two => state.snakes.iter().all(|s| !s.alive),
    };
    if terminal {
        let outcome = state.decide_outcome();
        state.outcome = Some(outcome);
        state.phase = GamePhase::Over;
        state.events.push(GameEvent::GameOver { outcome });
        log::info!("game over: {outcome:?}, scores {:?}", state.scores);
    }
}

/// Fatal checks and eating for one snake
fn resolve_player(state: &mut GameState, player: usize) {
    if !state.snakes[player].alive {
        return;
    }
    if let Some(cause) = fatal_hit(state, &state.snakes[player]) {
        kill(state, player, cause);
        return;
    }

    // Normal and special food are independent checks; a head landing on
    // both in one tick scores both.
    let head = state.snakes[player].head();
    if head == state.food {
        state.scores[player] += FOOD_POINTS;
        state.snakes[player].grow();
        let score = state.scores[player];
        state.events.push(GameEvent::AteFood { player, score });
        log::info!("player {} ate food, score {score}", player + 1);
        spawn::respawn_food(state);
    }
    if state.special_food.pos == Some(head) {
        state.scores[player] += SPECIAL_FOOD_POINTS;
        state.special_food.pos = None;
        let score = state.scores[player];
        state.events.push(GameEvent::AteSpecialFood { player, score });
        log::info!("player {} ate special food, score {score}", player + 1);
        spawn::add_obstacle(state);
    }
}

/// First fatal condition for a snake, in check order
fn fatal_hit(state: &GameState, snake: &Snake) -> Option<DeathCause> {
    let head = snake.head();
    if !in_bounds(head) {
        Some(DeathCause::HitBoundary)
    } else if snake.bites_itself() {
        Some(DeathCause::BitItself)
    } else if hits_obstacle(state, head) {
        Some(DeathCause::TouchedObstacle)
    } else {
        None
    }
}

/// Disk test of the head against every cached wall pixel
fn hits_obstacle(state: &GameState, head: IVec2) -> bool {
    state.obstacles.iter().any(|o| o.near(head, SNAKE_RADIUS))
}

/// Either head anywhere in the other's body, heads included
fn snakes_crossed(a: &Snake, b: &Snake) -> bool {
    b.body.contains(&a.head()) || a.body.contains(&b.head())
}

fn kill(state: &mut GameState, player: usize, cause: DeathCause) {
    state.snakes[player].alive = false;
    state.events.push(GameEvent::SnakeDied { player, cause });
    log::info!("player {} died: {cause}", player + 1);
}
