//! Headless demo entry point.
//!
//! Runs a seeded single-player game with a greedy steering policy until it
//! ends (or a tick cap), renders a final frame, and dumps the terminal
//! state as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::IVec2;

use raster_snake::render::{Frame, render};
use raster_snake::sim::{Direction, GameMode, GameState, TickInput, tick};

const TICK_CAP: u32 = 20_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);
    log::info!("starting headless demo with seed {seed}");

    let mut state = GameState::new(seed);
    let mut input = TickInput {
        select_mode: Some(GameMode::Single),
        ..TickInput::default()
    };

    let mut elapsed_ms = 0u64;
    let mut ticks = 0u32;
    while ticks < TICK_CAP {
        match tick(&mut state, &input) {
            Some(delay) => {
                elapsed_ms += delay;
                ticks += 1;
            }
            None => break,
        }
        let snake = &state.snakes[0];
        input = TickInput {
            dir1: Some(chase(snake.head(), state.food, snake.direction)),
            ..TickInput::default()
        };
    }

    let mut frame = Frame::default();
    render(&state, &mut frame);
    log::debug!("final frame: {} bytes", frame.as_bytes().len());

    log::info!(
        "finished after {ticks} ticks ({elapsed_ms} ms simulated), score {}",
        state.scores[0]
    );
    if let Some(outcome) = state.outcome {
        log::info!("outcome: {outcome:?}");
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Head toward the food along the longer axis, turning instead of
/// reversing into the neck.
fn chase(head: IVec2, food: IVec2, current: Direction) -> Direction {
    let d = food - head;
    let step = if d.x.abs() >= d.y.abs() && d.x != 0 {
        if d.x > 0 { Direction::Right } else { Direction::Left }
    } else if d.y != 0 {
        if d.y > 0 { Direction::Up } else { Direction::Down }
    } else {
        current
    };
    if step == opposite(current) { sidestep(current) } else { step }
}

fn opposite(dir: Direction) -> Direction {
    match dir {
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
    }
}

fn sidestep(dir: Direction) -> Direction {
    match dir {
        Direction::Left | Direction::Right => Direction::Up,
        Direction::Up | Direction::Down => Direction::Right,
    }
}
