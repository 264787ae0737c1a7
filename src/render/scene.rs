//! Scene composition.
//!
//! Draws one frame of the game from `GameState` alone, in the fixed pass
//! order: boundary, obstacles, buttons, snakes, food, special food.
//! Collision never reads the frame; both sides call the same rasterizer,
//! so what is drawn is exactly what is hit-tested.

use glam::IVec2;

use crate::consts::{HEIGHT, NORMAL_FOOD_RADIUS, SNAKE_RADIUS, SPECIAL_FOOD_RADIUS, WIDTH};
use crate::raster::{circle_points, line_points};
use crate::render::buttons;
use crate::render::frame::{Frame, Rgba};
use crate::sim::{GameMode, GameState, Snake};

const BACKGROUND: Rgba = Rgba::new(0, 0, 0);
const BOUNDARY: Rgba = Rgba::new(255, 0, 255);
const OBSTACLE: Rgba = Rgba::new(255, 255, 0);
const SNAKE1: Rgba = Rgba::new(0, 255, 0);
const SNAKE2: Rgba = Rgba::new(0, 0, 255);
const FOOD: Rgba = Rgba::new(255, 0, 0);

/// Render the whole scene into `frame`
pub fn render(state: &GameState, frame: &mut Frame) {
    frame.clear(BACKGROUND);
    draw_boundary(frame);

    for obstacle in &state.obstacles {
        frame.plot(&line_points(obstacle.a, obstacle.b), OBSTACLE);
    }

    buttons::draw(frame);

    if state.snakes[0].alive {
        draw_snake(frame, &state.snakes[0], SNAKE1);
    }
    if state.mode == Some(GameMode::Two) && state.snakes[1].alive {
        draw_snake(frame, &state.snakes[1], SNAKE2);
    }

    frame.plot(&circle_points(state.food, NORMAL_FOOD_RADIUS), FOOD);

    if let Some(pos) = state.special_food.pos {
        if state.special_food.is_visible(state.time_passed) {
            frame.plot(&circle_points(pos, SPECIAL_FOOD_RADIUS), FOOD);
        }
    }
}

/// Four rasterized lines on the outermost field pixels
fn draw_boundary(frame: &mut Frame) {
    let edges = [
        (IVec2::new(0, 0), IVec2::new(WIDTH - 1, 0)),
        (IVec2::new(0, HEIGHT - 1), IVec2::new(WIDTH - 1, HEIGHT - 1)),
        (IVec2::new(0, 0), IVec2::new(0, HEIGHT - 1)),
        (IVec2::new(WIDTH - 1, 0), IVec2::new(WIDTH - 1, HEIGHT - 1)),
    ];
    for (a, b) in edges {
        frame.plot(&line_points(a, b), BOUNDARY);
    }
}

/// One filled-outline circle per body segment
fn draw_snake(frame: &mut Frame, snake: &Snake, color: Rgba) {
    for &segment in &snake.body {
        frame.plot(&circle_points(segment, SNAKE_RADIUS), color);
    }
}
