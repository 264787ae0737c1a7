//! Game state and core simulation types
//!
//! Everything the simulation reads or mutates lives here. One `GameState`
//! per game, created at startup and rebuilt in place by reset; rendering
//! only ever borrows it.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;
use crate::raster;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Window is up but no mode chosen yet; timers run, nothing moves
    Unstarted,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Terminal until reset
    Over,
}

/// Player count selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// One snake; its death ends the game
    Single,
    /// Two snakes; the game ends once both are dead
    Two,
}

impl GameMode {
    /// Number of participating snakes
    #[inline]
    pub fn player_count(self) -> usize {
        match self {
            GameMode::Single => 1,
            GameMode::Two => 2,
        }
    }
}

/// Movement heading, one grid cell per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Per-tick step in pixel units (origin bottom-left, so up is +y)
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-CELL_SIZE, 0),
            Direction::Right => IVec2::new(CELL_SIZE, 0),
            Direction::Up => IVec2::new(0, CELL_SIZE),
            Direction::Down => IVec2::new(0, -CELL_SIZE),
        }
    }
}

/// Why a snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    HitBoundary,
    BitItself,
    TouchedObstacle,
    HitOtherSnake,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeathCause::HitBoundary => "hit boundary",
            DeathCause::BitItself => "bit itself",
            DeathCause::TouchedObstacle => "touched obstacle",
            DeathCause::HitOtherSnake => "collided with other snake",
        };
        f.write_str(s)
    }
}

/// Score comparison at the end of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player1Wins,
    Player2Wins,
    Tie,
}

/// Things that happened during one tick, newest last. Hosts read these for
/// sound and score UI; cleared at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AteFood { player: usize, score: u32 },
    AteSpecialFood { player: usize, score: u32 },
    SpecialFoodSpawned { pos: IVec2 },
    SpecialFoodExpired,
    ObstacleAdded { a: IVec2, b: IVec2 },
    SnakeDied { player: usize, cause: DeathCause },
    GameOver { outcome: Outcome },
}

/// A snake: ordered body cells, tail first, head last
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Body cells; once moving, consecutive entries differ by one grid step
    pub body: Vec<IVec2>,
    pub direction: Direction,
    pub alive: bool,
}

impl Snake {
    /// Single-segment snake at a spawn cell
    pub fn new(start: IVec2, direction: Direction) -> Self {
        Self {
            body: vec![start],
            direction,
            alive: true,
        }
    }

    /// Head position (the body is never empty)
    #[inline]
    pub fn head(&self) -> IVec2 {
        self.body[self.body.len() - 1]
    }

    /// Step one cell along the current direction: new head in, tail out
    pub fn advance(&mut self) {
        let head = self.head() + self.direction.delta();
        self.body.push(head);
        self.body.remove(0);
    }

    /// Lengthen by one: the current tail value is re-inserted at the
    /// front, leaving every other segment where it was
    pub fn grow(&mut self) {
        self.body.insert(0, self.body[0]);
    }

    /// Head overlaps the body (head cell itself excluded)
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body[..self.body.len() - 1].contains(&head)
    }
}

/// An axis-aligned wall segment with its cached rasterization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Segment endpoints
    pub a: IVec2,
    pub b: IVec2,
    /// Every pixel of the segment, shared by drawing and collision
    pub points: HashSet<IVec2>,
}

impl Obstacle {
    /// Rasterize a segment into a wall
    pub fn new(a: IVec2, b: IVec2) -> Self {
        let points = raster::line_points(a, b).into_iter().collect();
        Self { a, b, points }
    }

    /// Whether `p` lies within `radius` of any wall pixel (disk test,
    /// not exact equality)
    pub fn near(&self, p: IVec2, radius: i32) -> bool {
        let r2 = radius * radius;
        self.points.iter().any(|&q| (q - p).length_squared() <= r2)
    }
}

/// The timed bonus food. At most one exists at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialFood {
    /// Board position while active
    pub pos: Option<IVec2>,
    /// `time_passed` when the current one appeared
    pub spawned_at: u64,
    /// `time_passed` when spawn eligibility last reset
    pub last_spawn_at: u64,
}

impl SpecialFood {
    /// On the board right now?
    #[inline]
    pub fn is_active(&self) -> bool {
        self.pos.is_some()
    }

    /// Active and in the visible half of the blink cycle
    #[inline]
    pub fn is_visible(&self, time_passed: u64) -> bool {
        self.is_active() && (time_passed / SPECIAL_FOOD_BLINK_MS) % 2 == 0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Live RNG stream; every random draw the simulation makes goes
    /// through here
    pub(crate) rng: Pcg32,
    /// Selected mode; `None` until the player picks one
    pub mode: Option<GameMode>,
    /// Current phase
    pub phase: GamePhase,
    /// Player snakes; index 1 only participates in two-player mode
    pub snakes: [Snake; 2],
    /// Per-player scores
    pub scores: [u32; 2],
    /// Normal food position (always present, grid-aligned)
    pub food: IVec2,
    /// Timed bonus food
    pub special_food: SpecialFood,
    /// Wall segments added by eaten special food
    pub obstacles: Vec<Obstacle>,
    /// Sum of elapsed tick intervals (simulated ms, not wall clock)
    pub time_passed: u64,
    /// Final score comparison, set when the game ends
    pub outcome: Option<Outcome>,
    /// What happened this tick (render/audio hooks read this)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Startup state: snakes placed, food on the board, no mode chosen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let food = spawn::food_position(&mut rng);
        Self {
            seed,
            rng,
            mode: None,
            phase: GamePhase::Unstarted,
            snakes: Self::spawn_snakes(),
            scores: [0, 0],
            food,
            special_food: SpecialFood::default(),
            obstacles: Vec::new(),
            time_passed: 0,
            outcome: None,
            events: Vec::new(),
        }
    }

    fn spawn_snakes() -> [Snake; 2] {
        [
            Snake::new(PLAYER1_START, Direction::Right),
            Snake::new(PLAYER2_START, Direction::Left),
        ]
    }

    /// Rebuild the world in place. Keeps the selected mode and the RNG
    /// stream; always resumes unpaused.
    pub fn reset(&mut self) {
        self.snakes = Self::spawn_snakes();
        self.scores = [0, 0];
        self.food = spawn::food_position(&mut self.rng);
        self.special_food = SpecialFood::default();
        self.obstacles.clear();
        self.time_passed = 0;
        self.outcome = None;
        self.events.clear();
        self.phase = if self.mode.is_some() {
            GamePhase::Running
        } else {
            GamePhase::Unstarted
        };
        log::debug!("world reset, phase {:?}", self.phase);
    }

    /// Select a mode and begin play
    pub fn start(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.reset();
        log::info!("starting {mode:?} game, seed {}", self.seed);
    }

    /// Score comparison for the end screen
    pub fn decide_outcome(&self) -> Outcome {
        match self.scores[0].cmp(&self.scores[1]) {
            Ordering::Greater => Outcome::Player1Wins,
            Ordering::Less => Outcome::Player2Wins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}
