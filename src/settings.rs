//! Host-side settings
//!
//! Only things the host controls live here. Gameplay tuning is fixed in
//! `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in pixels (camera keeps the head at its center)
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Fixed RNG seed; `None` picks one per session
    pub seed: Option<u64>,
    /// Frame deltas above this are clamped (seconds)
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: SCREEN_WIDTH,
            viewport_height: SCREEN_HEIGHT,
            seed: None,
            max_frame_dt: 0.1,
        }
    }
}

impl Settings {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded settings: {settings:?}");
        Ok(settings)
    }

    /// Camera offset that centers the target in the viewport
    pub fn camera_offset(&self) -> Vec2 {
        Vec2::new(
            self.viewport_width as f32 / 2.0,
            self.viewport_height as f32 / 2.0,
        )
    }

    /// Clamp a host frame delta into a usable simulation step
    ///
    /// A negative or NaN `max_frame_dt` caps every step at zero.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt.max(0.0))
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.camera_offset(), Vec2::new(400.0, 300.0));
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "seed": 12345 }"#).unwrap();
        assert_eq!(s.seed, Some(12345));
        assert_eq!(s.viewport_width, SCREEN_WIDTH);
        assert!((s.max_frame_dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ seed: nope").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            viewport_width: 1280,
            viewport_height: 720,
            seed: Some(7),
            max_frame_dt: 0.05,
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_clamp_dt() {
        let s = Settings::default();
        assert_eq!(s.clamp_dt(0.5), 0.1);
        assert_eq!(s.clamp_dt(-1.0), 0.0);
        assert_eq!(s.clamp_dt(f32::NAN), 0.0);
        assert!((s.clamp_dt(0.016) - 0.016).abs() < 1e-7);
    }

    #[test]
    fn test_negative_max_frame_dt_freezes_steps() {
        let s = Settings::from_json(r#"{ "max_frame_dt": -0.5 }"#).unwrap();
        assert_eq!(s.clamp_dt(1.0 / 60.0), 0.0);
        assert_eq!(s.clamp_dt(-1.0), 0.0);

        let s = Settings {
            max_frame_dt: f32::NAN,
            ..Default::default()
        };
        assert_eq!(s.clamp_dt(0.05), 0.0);
    }
}
