//! Frame driver
//!
//! Owns one session plus its RNG and settings, and turns host frames into
//! simulation ticks and render snapshots.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SessionRng, TickInput, tick};
use crate::view::{Camera, FrameView};

pub struct FrameDriver {
    settings: Settings,
    rng: SessionRng,
    state: GameState,
}

impl FrameDriver {
    pub fn new(settings: Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_entropy(),
        };
        log::info!("New game (seed {})", rng.seed());
        let state = GameState::new(&mut rng);
        Self {
            settings,
            rng,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Camera for the current state (use it to map the host pointer to world space)
    pub fn camera(&self) -> Camera {
        Camera {
            target: self.state.head().pos,
            offset: self.settings.camera_offset(),
        }
    }

    /// Convert a screen-space pointer using the current camera
    pub fn pointer_to_world(&self, screen: Vec2) -> Vec2 {
        self.camera().screen_to_world(screen)
    }

    /// Run one tick and return what to draw
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> FrameView {
        let dt = self.settings.clamp_dt(dt);
        tick(&mut self.state, input, dt, &mut self.rng);
        FrameView::new(&self.state, self.settings.camera_offset())
    }

    /// Events raised by the last frame
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn seeded(seed: u64) -> FrameDriver {
        FrameDriver::new(Settings {
            seed: Some(seed),
            ..Default::default()
        })
    }

    #[test]
    fn test_seeded_driver_is_reproducible() {
        let mut a = seeded(5);
        let mut b = seeded(5);
        let input = TickInput {
            pointer: Vec2::new(1200.0, 1300.0),
            ..Default::default()
        };
        for _ in 0..240 {
            a.frame(&input, 1.0 / 60.0);
            b.frame(&input, 1.0 / 60.0);
        }
        assert_eq!(a.state().segments, b.state().segments);
        assert_eq!(a.seed(), 5);
    }

    #[test]
    fn test_frame_clamps_dt() {
        let mut d = seeded(1);
        d.state.obstacles.clear();
        d.state.food.iter_mut().for_each(|f| f.pos = Vec2::ZERO);
        let start = d.state().head().pos;
        let input = TickInput {
            pointer: start + Vec2::new(500.0, 0.0),
            ..Default::default()
        };
        let view = d.frame(&input, 5.0);
        // Clamped to 0.1 s at normal speed
        let moved = view.camera.target.x - start.x;
        assert!((moved - NORMAL_SPEED * 0.1).abs() < 1e-3);
        assert_eq!(view.camera.offset, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_negative_max_frame_dt_does_not_panic() {
        let mut d = FrameDriver::new(Settings {
            seed: Some(1),
            max_frame_dt: -0.5,
            ..Default::default()
        });
        let start = d.state().head().pos;
        let view = d.frame(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(view.camera.target, start);
    }

    #[test]
    fn test_pointer_to_world_centers_on_head() {
        let d = seeded(3);
        let world = d.pointer_to_world(Vec2::new(400.0, 300.0));
        assert_eq!(world, d.state().head().pos);
    }
}
