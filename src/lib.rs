//! Coil Snake - a pointer-steered snake arcade game
//!
//! Core modules:
//! - `sim`: Simulation (motion, collisions, lives, game state)
//! - `view`: Render-ready frame snapshot and camera
//! - `driver`: Host glue that owns a session and steps it per frame
//! - `settings`: Host-side configuration (viewport, seed, frame clamp)

pub mod driver;
pub mod settings;
pub mod sim;
pub mod view;

pub use driver::FrameDriver;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions (the playfield is larger than the viewport)
    pub const WORLD_WIDTH: i32 = 2000;
    pub const WORLD_HEIGHT: i32 = 2000;

    /// Default viewport dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Snake defaults
    pub const SEGMENT_RADIUS: f32 = 12.0;
    pub const START_SEGMENTS: usize = 5;
    /// Head speed in units per second
    pub const NORMAL_SPEED: f32 = 120.0;
    pub const BOOST_SPEED: f32 = 240.0;
    /// Maximum head turn rate (degrees per second)
    pub const ANGLE_INCREMENT: f32 = 360.0 / 1.25;
    /// Per-tick lerp factor for tail segments
    pub const FOLLOW_NORMAL: f32 = 0.19;
    pub const FOLLOW_BOOST: f32 = 0.38;

    /// Food pool
    pub const FOOD_COUNT: usize = 400;
    pub const FOOD_RADIUS: f32 = 3.6;

    /// Obstacles
    pub const INITIAL_OBSTACLES: usize = 50;
    pub const OBSTACLE_RADIUS: f32 = 5.0;
    /// Collision boxes for obstacle strikes are shrunk to this fraction
    pub const STRIKE_BOX_SCALE: f32 = 0.7;

    /// Lives and stun
    pub const START_LIVES: u8 = 5;
    pub const STUN_SECONDS: f32 = 1.2;

    /// Scoring
    pub const FOOD_POINTS: u64 = 10;
    pub const CAPTURE_POINTS: u64 = 50;

    /// Encirclement needs at least this many segments
    pub const ENCIRCLE_MIN_SEGMENTS: usize = 15;
    /// Body indices that can close the loop against the head (inclusive)
    pub const ENCIRCLE_CLOSE_FIRST: usize = 15;
    pub const ENCIRCLE_CLOSE_LAST: usize = 19;
    /// Body waypoints that, with the head, outline the capture region
    pub const ENCIRCLE_WAYPOINTS: [usize; 3] = [4, 9, 14];
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Heading in degrees of the vector from `from` to `to`
#[inline]
pub fn heading_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(190.0) - (-170.0)).abs() < 1e-4);
        assert!((normalize_degrees(-190.0) - 170.0).abs() < 1e-4);
        assert!((normalize_degrees(720.0 + 45.0) - 45.0).abs() < 1e-4);
        assert!((normalize_degrees(180.0) - (-180.0)).abs() < 1e-4);
    }

    #[test]
    fn test_heading_roundtrip() {
        let v = heading_vector(90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        let h = heading_between(Vec2::ZERO, Vec2::new(-1.0, 0.0));
        assert!((h.abs() - 180.0).abs() < 1e-4);
    }
}
