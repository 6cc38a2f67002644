//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Session state is owned by the caller and passed in explicitly
//! - All randomness comes through an injected `RandomSource`
//! - Stable iteration order (collection order is gameplay-significant)

pub mod collision;
pub mod geom;
pub mod motion;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geom::{Rect, bounding_rect, circles_overlap, point_in_rect, rects_overlap, rotate_vector};
pub use motion::MotionParams;
pub use rng::{RandomSource, SessionRng};
pub use state::{FOOD_PALETTE, Food, GameEvent, GamePhase, GameState, Obstacle, Rgba, Segment};
pub use tick::{TickInput, tick};
