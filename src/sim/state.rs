//! Game state and core simulation types
//!
//! Everything a session owns lives in `GameState`; the host passes it to
//! `tick` explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::spawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Recovering from a non-fatal obstacle strike; simulation frozen
    Stunned { timer: f32 },
    /// All lives lost; only a reset is accepted
    GameOver,
}

/// One body ball of the snake; index 0 is the head
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub pos: Vec2,
    pub radius: f32,
    /// Heading in degrees (only meaningful for the head)
    pub angle: f32,
    /// False while the snake is stunned
    pub active: bool,
}

/// RGBA color for food rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

/// Palette food colors are drawn from
pub const FOOD_PALETTE: [Rgba; 23] = [
    Rgba([200, 200, 200, 255]), // light gray
    Rgba([130, 130, 130, 255]), // gray
    Rgba([80, 80, 80, 255]),    // dark gray
    Rgba([253, 249, 0, 255]),   // yellow
    Rgba([255, 203, 0, 255]),   // gold
    Rgba([255, 161, 0, 255]),   // orange
    Rgba([255, 109, 194, 255]), // pink
    Rgba([230, 41, 55, 255]),   // red
    Rgba([190, 33, 55, 255]),   // maroon
    Rgba([0, 228, 48, 255]),    // green
    Rgba([0, 158, 47, 255]),    // lime
    Rgba([0, 117, 44, 255]),    // dark green
    Rgba([102, 191, 255, 255]), // sky blue
    Rgba([0, 121, 241, 255]),   // blue
    Rgba([0, 82, 172, 255]),    // dark blue
    Rgba([200, 122, 255, 255]), // purple
    Rgba([135, 60, 190, 255]),  // violet
    Rgba([112, 31, 126, 255]),  // dark purple
    Rgba([211, 176, 131, 255]), // beige
    Rgba([127, 106, 79, 255]),  // brown
    Rgba([76, 63, 47, 255]),    // dark brown
    Rgba([255, 0, 255, 255]),   // magenta
    Rgba([245, 245, 245, 255]), // ray white
];

/// A food pellet; pooled, relocated on pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
    pub color: Rgba,
}

/// A hazard; striking one costs a life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: OBSTACLE_RADIUS,
            active: true,
        }
    }
}

/// Things that happened during a tick (for sound/FX hooks on the host)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Food at `pos` was eaten (the food itself has already moved)
    FoodEaten { pos: Vec2 },
    /// An obstacle was added to the field
    ObstacleSpawned { pos: Vec2 },
    /// An encirclement removed `count` obstacles
    ObstaclesCaptured { count: u32 },
    /// Head hit an obstacle; `lives` remaining afterwards
    ObstacleStruck { lives: u8 },
    /// Stun ended
    Recovered,
    GameOver,
    Reset,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Body segments, head first. Never empty.
    pub segments: Vec<Segment>,
    /// Food pool (fixed size)
    pub food: Vec<Food>,
    pub obstacles: Vec<Obstacle>,
    pub phase: GamePhase,
    pub lives: u8,
    /// Food eaten this session
    pub food_eaten: u32,
    /// Obstacles removed by encirclement this session
    pub captured: u32,
    /// Normalized head-to-pointer direction from the last steering tick
    pub look_dir: Vec2,
    /// Capture outline (head + waypoints) from the current tick, if any
    #[serde(skip)]
    pub capture_outline: Option<[Vec2; 4]>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh session
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self {
            segments: Vec::with_capacity(64),
            food: Vec::with_capacity(FOOD_COUNT),
            obstacles: Vec::with_capacity(INITIAL_OBSTACLES * 2),
            phase: GamePhase::Running,
            lives: START_LIVES,
            food_eaten: 0,
            captured: 0,
            look_dir: Vec2::X,
            capture_outline: None,
            events: Vec::new(),
        };
        state.rebuild(rng);
        state
    }

    /// Clear and rebuild all entity collections and zero the counters
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.rebuild(rng);
        self.phase = GamePhase::Running;
        self.lives = START_LIVES;
        self.food_eaten = 0;
        self.captured = 0;
        self.look_dir = Vec2::X;
        self.capture_outline = None;
    }

    fn rebuild<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.segments.clear();
        spawn::init_snake(&mut self.segments);
        self.food.clear();
        spawn::init_food(&mut self.food, rng);
        self.obstacles.clear();
        spawn::init_obstacles(&mut self.obstacles, rng);
    }

    #[inline]
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    #[inline]
    pub fn head_mut(&mut self) -> &mut Segment {
        &mut self.segments[0]
    }

    /// Score derived from food eaten and obstacles captured
    pub fn score(&self) -> u64 {
        self.food_eaten as u64 * FOOD_POINTS + self.captured as u64 * CAPTURE_POINTS
    }

    /// Remaining stun time (0 when not stunned)
    pub fn stun_timer(&self) -> f32 {
        match self.phase {
            GamePhase::Stunned { timer } => timer,
            _ => 0.0,
        }
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_timer() > 0.0
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
