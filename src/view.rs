//! Render-ready snapshot of a session
//!
//! The host renderer draws straight from a `FrameView`; nothing here feeds
//! back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Rgba, rotate_vector};

/// Eyes sit this far from the head center
pub const EYE_OFFSET: f32 = 4.0;
/// Eye directions are the look direction rotated by ±this many degrees
pub const EYE_SPREAD_DEGREES: f32 = 40.0;
/// Every n-th body ball gets a node marker
pub const NODE_EVERY: usize = 5;

/// 2D camera: `target` in world space appears at `offset` on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
}

impl Camera {
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset + self.target
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.target + self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentView {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeView {
    pub pos: Vec2,
    pub radius: f32,
    /// Pupils are drawn only while the head is active
    pub pupil_radius: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeMarker {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodView {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// HUD values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub stunned: bool,
    pub game_over: bool,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub camera: Camera,
    pub segments: Vec<SegmentView>,
    /// Left and right eye
    pub eyes: [EyeView; 2],
    pub nodes: Vec<NodeMarker>,
    pub food: Vec<FoodView>,
    pub obstacles: Vec<ObstacleView>,
    /// Loop outline when an encirclement happened this tick
    pub capture_outline: Option<[Vec2; 4]>,
    pub hud: Hud,
}

impl FrameView {
    pub fn new(state: &GameState, camera_offset: Vec2) -> Self {
        let head = state.head();
        let eye_radius = head.radius / 3.2;
        let eye = |degrees: f32| EyeView {
            pos: head.pos + rotate_vector(state.look_dir, degrees) * EYE_OFFSET,
            radius: eye_radius,
            pupil_radius: head.active.then_some(eye_radius / 2.2),
        };

        Self {
            camera: Camera {
                target: head.pos,
                offset: camera_offset,
            },
            segments: state
                .segments
                .iter()
                .map(|s| SegmentView {
                    pos: s.pos,
                    radius: s.radius,
                    active: s.active,
                })
                .collect(),
            eyes: [eye(-EYE_SPREAD_DEGREES), eye(EYE_SPREAD_DEGREES)],
            nodes: state
                .segments
                .iter()
                .skip(NODE_EVERY - 1)
                .step_by(NODE_EVERY)
                .map(|s| NodeMarker {
                    pos: s.pos,
                    radius: s.radius / 4.8,
                })
                .collect(),
            food: state
                .food
                .iter()
                .map(|f| FoodView {
                    pos: f.pos,
                    radius: f.radius,
                    active: f.active,
                    color: f.color,
                })
                .collect(),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    pos: o.pos,
                    radius: o.radius,
                })
                .collect(),
            capture_outline: state.capture_outline,
            hud: Hud::new(state),
        }
    }
}

impl Hud {
    pub fn new(state: &GameState) -> Self {
        Self {
            score: state.score(),
            lives: state.lives,
            stunned: state.is_stunned(),
            game_over: state.is_game_over(),
        }
    }
}
