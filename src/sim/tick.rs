//! Discrete simulation tick
//!
//! One call per scheduled timer fire. The tick latches input, advances the
//! food timers, moves snakes, resolves collisions, and hands the host the
//! delay to schedule the next tick at.

use super::collision;
use super::spawn;
use super::state::{Direction, GameEvent, GameMode, GamePhase, GameState};
use crate::consts::*;

/// Input carried into a single tick (deterministic)
///
/// The host fills fields from its event callbacks between ticks and clears
/// the one-shot flags after each call; the direction fields keep the most
/// recent request until replaced.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest requested heading for player 0
    pub dir1: Option<Direction>,
    /// Latest requested heading for player 1
    pub dir2: Option<Direction>,
    /// One-shot: pick a mode and (re)start
    pub select_mode: Option<GameMode>,
    /// One-shot: restart keeping the current mode
    pub restart: bool,
    /// One-shot: toggle pause
    pub toggle_pause: bool,
}

/// Tick interval for the current scores, in milliseconds
///
/// Every six points either player banks removes one step; the floor keeps
/// the timer arithmetic total at any score.
pub fn interval_ms(scores: &[u32; 2]) -> u64 {
    let steps = u64::from(scores[0] / POINTS_PER_STEP + scores[1] / POINTS_PER_STEP);
    BASE_SPEED_MS
        .saturating_sub(steps * SPEEDUP_STEP_MS)
        .max(MIN_SPEED_MS)
}

/// Advance the game by one tick.
///
/// Returns the delay for the next tick, or `None` when no further tick
/// should be scheduled (paused or terminal). After a `None` the host calls
/// `tick` again when it delivers the next administrative input (mode
/// select, restart, unpause).
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<u64> {
    state.events.clear();

    // Administrative input applies from any phase
    if let Some(mode) = input.select_mode {
        state.start(mode);
        return Some(interval_ms(&state.scores));
    }
    if input.restart {
        state.reset();
        return Some(interval_ms(&state.scores));
    }
    if input.toggle_pause {
        match state.phase {
            GamePhase::Running | GamePhase::Unstarted => {
                state.phase = GamePhase::Paused;
                log::info!("paused");
                return None;
            }
            GamePhase::Paused => {
                // Resuming only reschedules; movement waits for the next fire
                state.phase = if state.mode.is_some() {
                    GamePhase::Running
                } else {
                    GamePhase::Unstarted
                };
                log::info!("resumed");
                return Some(interval_ms(&state.scores));
            }
            GamePhase::Over => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::Over => return None,
        GamePhase::Running | GamePhase::Unstarted => {}
    }

    latch_directions(state, input);

    // Timers accrue the interval this tick was scheduled with, i.e. the
    // score as of the start of the tick.
    state.time_passed += interval_ms(&state.scores);
    update_special_food(state);

    // Before a mode is chosen the clock runs but nothing moves
    if let Some(mode) = state.mode {
        for player in 0..mode.player_count() {
            if state.snakes[player].alive {
                state.snakes[player].advance();
            }
        }
        collision::resolve(state, mode);
        if state.phase == GamePhase::Over {
            return None;
        }
    }

    Some(interval_ms(&state.scores))
}

/// Take the most recent direction request for each participating, living
/// snake; everyone else's input is ignored.
fn latch_directions(state: &mut GameState, input: &TickInput) {
    let players = state.mode.map_or(0, GameMode::player_count);
    for (player, dir) in [input.dir1, input.dir2].into_iter().enumerate().take(players) {
        if let Some(dir) = dir {
            if state.snakes[player].alive {
                state.snakes[player].direction = dir;
            }
        }
    }
}

/// Spawn/expire the timed bonus food against accumulated simulated time
fn update_special_food(state: &mut GameState) {
    let t = state.time_passed;
    if !state.special_food.is_active()
        && t - state.special_food.last_spawn_at >= SPECIAL_FOOD_INTERVAL_MS
    {
        spawn::spawn_special_food(state);
    }
    if state.special_food.is_active() && t - state.special_food.spawned_at > SPECIAL_FOOD_DURATION_MS
    {
        state.special_food.pos = None;
        state.events.push(GameEvent::SpecialFoodExpired);
        log::info!("special food expired, t={t}ms");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::DeathCause;
    use glam::IVec2;
    use proptest::prelude::*;

    /// Started game with the food parked away from every scripted path
    fn started(seed: u64, mode: GameMode) -> GameState {
        let mut state = GameState::new(seed);
        state.start(mode);
        state.food = IVec2::new(700, 500);
        state
    }

    #[test]
    fn test_interval_table() {
        assert_eq!(interval_ms(&[0, 0]), 100);
        assert_eq!(interval_ms(&[5, 0]), 100);
        assert_eq!(interval_ms(&[6, 0]), 90);
        assert_eq!(interval_ms(&[12, 6]), 70);
        assert_eq!(interval_ms(&[30, 30]), 30);
        assert_eq!(interval_ms(&[1000, 1000]), 30);
    }

    proptest! {
        #[test]
        fn test_interval_monotonic_with_floor(s0 in 0u32..500, s1 in 0u32..500) {
            let here = interval_ms(&[s0, s1]);
            prop_assert!(here >= MIN_SPEED_MS);
            prop_assert!(here <= BASE_SPEED_MS);
            prop_assert!(interval_ms(&[s0 + 1, s1]) <= here);
            prop_assert!(interval_ms(&[s0, s1 + 1]) <= here);
        }
    }

    #[test]
    fn test_mode_select_starts_running() {
        let mut state = GameState::new(1);
        let delay = tick(
            &mut state,
            &TickInput {
                select_mode: Some(GameMode::Single),
                ..TickInput::default()
            },
        );
        assert_eq!(delay, Some(100));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.mode, Some(GameMode::Single));
        assert_eq!(state.scores, [0, 0]);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut state = started(2, GameMode::Single);
        let head = state.snakes[0].head();

        let pause = TickInput {
            toggle_pause: true,
            ..TickInput::default()
        };
        assert_eq!(tick(&mut state, &pause), None);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused ticks are no-ops even without the toggle
        assert_eq!(tick(&mut state, &TickInput::default()), None);

        // Unpausing reschedules without moving anything
        assert_eq!(tick(&mut state, &pause), Some(100));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snakes[0].head(), head);
        assert_eq!(state.time_passed, 0);
    }

    #[test]
    fn test_restart_resumes_unpaused() {
        let mut state = started(3, GameMode::Two);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Paused);

        let delay = tick(
            &mut state,
            &TickInput {
                restart: true,
                ..TickInput::default()
            },
        );
        assert_eq!(delay, Some(100));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.mode, Some(GameMode::Two));
        assert_eq!(state.time_passed, 0);
        assert_eq!(state.snakes[0].head(), PLAYER1_START);
        assert_eq!(state.snakes[1].head(), PLAYER2_START);
    }

    #[test]
    fn test_unstarted_runs_timers_but_nothing_moves() {
        let mut state = GameState::new(4);
        let heads = [state.snakes[0].head(), state.snakes[1].head()];
        for _ in 0..200 {
            assert_eq!(tick(&mut state, &TickInput::default()), Some(100));
        }
        assert_eq!(state.phase, GamePhase::Unstarted);
        assert_eq!(state.time_passed, 20_000);
        assert_eq!(state.snakes[0].head(), heads[0]);
        assert_eq!(state.snakes[1].head(), heads[1]);
        // The clock has been running long enough for a special food
        assert!(state.special_food.is_active());
    }

    #[test]
    fn test_direction_latch_applies_before_move() {
        let mut state = started(5, GameMode::Single);
        let delay = tick(
            &mut state,
            &TickInput {
                dir1: Some(Direction::Up),
                ..TickInput::default()
            },
        );
        assert_eq!(delay, Some(100));
        assert_eq!(state.snakes[0].direction, Direction::Up);
        assert_eq!(state.snakes[0].head(), PLAYER1_START + IVec2::new(0, CELL_SIZE));
    }

    #[test]
    fn test_dead_snake_ignores_direction() {
        let mut state = started(6, GameMode::Two);
        state.snakes[0].alive = false;
        tick(
            &mut state,
            &TickInput {
                dir1: Some(Direction::Up),
                ..TickInput::default()
            },
        );
        assert_eq!(state.snakes[0].direction, Direction::Right);
    }

    #[test]
    fn test_snake2_only_moves_in_two_player() {
        let mut single = started(7, GameMode::Single);
        tick(&mut single, &TickInput::default());
        assert_eq!(single.snakes[1].head(), PLAYER2_START);

        let mut two = started(7, GameMode::Two);
        tick(&mut two, &TickInput::default());
        assert_eq!(two.snakes[1].head(), PLAYER2_START + IVec2::new(-CELL_SIZE, 0));
    }

    #[test]
    fn test_single_player_eats_food() {
        let mut state = started(8, GameMode::Single);
        state.food = IVec2::new(50, 40);
        let delay = tick(&mut state, &TickInput::default());
        assert_eq!(state.snakes[0].head(), IVec2::new(50, 40));
        assert_eq!(state.scores[0], 1);
        assert_eq!(state.snakes[0].body.len(), 2);
        assert!(
            state
                .events
                .contains(&GameEvent::AteFood { player: 0, score: 1 })
        );
        assert_eq!(delay, Some(100));
    }

    #[test]
    fn test_faster_interval_after_six_points() {
        let mut state = started(9, GameMode::Single);
        state.scores = [6, 0];
        let delay = tick(&mut state, &TickInput::default());
        assert_eq!(delay, Some(90));
        assert_eq!(state.time_passed, 90);
    }

    #[test]
    fn test_running_into_wall_ends_the_game() {
        // Heading right from (40, 40), the wall is 76 ticks out
        let mut state = started(10, GameMode::Single);
        let mut ticks = 0;
        while tick(&mut state, &TickInput::default()).is_some() {
            ticks += 1;
            assert!(ticks < 1000, "never died");
        }
        assert_eq!(ticks, 76 - 1);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.snakes[0].head(), IVec2::new(WIDTH, 40));
        assert!(state.events.contains(&GameEvent::SnakeDied {
            player: 0,
            cause: DeathCause::HitBoundary,
        }));
    }

    #[test]
    fn test_special_food_lifecycle() {
        // Unstarted state: the clock runs with nothing on the move, so the
        // whole cycle plays out at the base interval.
        let mut state = GameState::new(11);
        let mut spawned_at = None;
        let mut expired_at = None;
        let mut respawned_at = None;
        for _ in 0..310 {
            tick(&mut state, &TickInput::default());
            for event in &state.events {
                match event {
                    GameEvent::SpecialFoodSpawned { .. } if spawned_at.is_none() => {
                        spawned_at = Some(state.time_passed);
                    }
                    GameEvent::SpecialFoodSpawned { .. } => {
                        respawned_at.get_or_insert(state.time_passed);
                    }
                    GameEvent::SpecialFoodExpired => {
                        expired_at.get_or_insert(state.time_passed);
                    }
                    _ => {}
                }
            }
        }
        assert_eq!(spawned_at, Some(15_000));
        // Expires on the first tick strictly past the 7000ms window
        assert_eq!(expired_at, Some(22_100));
        // Next spawn is an interval after the previous spawn, not the expiry
        assert_eq!(respawned_at, Some(30_000));
        // Expiry is silent: only eating a special food builds a wall
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_no_second_spawn_while_active() {
        let mut state = GameState::new(12);
        let pos = IVec2::new(100, 100);
        state.time_passed = 16_000;
        state.special_food.pos = Some(pos);
        state.special_food.spawned_at = state.time_passed;
        state.special_food.last_spawn_at = 0;
        tick(&mut state, &TickInput::default());
        // Eligible by elapsed time, blocked by the active one
        assert_eq!(state.special_food.pos, Some(pos));
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::SpecialFoodSpawned { .. }))
        );
    }

    #[test]
    fn test_determinism() {
        let script = |i: u32| {
            let mut input = TickInput::default();
            if i % 9 == 0 {
                input.dir1 = Some(match (i / 9) % 4 {
                    0 => Direction::Up,
                    1 => Direction::Right,
                    2 => Direction::Down,
                    _ => Direction::Right,
                });
            }
            if i % 13 == 0 {
                input.dir2 = Some(match (i / 13) % 4 {
                    0 => Direction::Down,
                    1 => Direction::Left,
                    2 => Direction::Up,
                    _ => Direction::Left,
                });
            }
            input
        };

        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        a.start(GameMode::Two);
        b.start(GameMode::Two);

        for i in 0..300 {
            let input = script(i);
            let da = tick(&mut a, &input);
            let db = tick(&mut b, &input);
            assert_eq!(da, db, "tick {i}");
            assert_eq!(a.events, b.events, "tick {i}");
            if da.is_none() {
                break;
            }
        }

        let ja = serde_json::to_string(&a).unwrap();
        let jb = serde_json::to_string(&b).unwrap();
        assert_eq!(ja, jb);
    }
}
