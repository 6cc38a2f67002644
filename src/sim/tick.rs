//! Per-frame simulation tick
//!
//! Advances the session by a variable timestep supplied by the host.

use glam::Vec2;

use super::collision;
use super::motion::{self, MotionParams};
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Boost button held
    pub boost: bool,
    /// Restart requested (only honored after game over)
    pub reset: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) {
    state.events.clear();
    state.capture_outline = None;

    match state.phase {
        GamePhase::GameOver => {
            if input.reset {
                state.reset(rng);
                state.events.push(GameEvent::Reset);
                log::info!("session reset");
            }
        }

        GamePhase::Stunned { timer } => {
            let timer = timer - dt;
            if timer <= 0.0 {
                state.phase = GamePhase::Running;
                state.head_mut().active = true;
                state.events.push(GameEvent::Recovered);
            } else {
                state.phase = GamePhase::Stunned { timer };
            }
        }

        GamePhase::Running => {
            state.look_dir = motion::steer_head(state.head_mut(), input.pointer, dt);
            motion::advance_chain(&mut state.segments, MotionParams::new(input.boost), dt);

            let eaten = collision::eat_food(state, rng);
            let captured = collision::encircle(state);
            if eaten + captured > 0 {
                log::trace!("tick: ate {eaten}, captured {captured}");
            }
            collision::strike_obstacles(state, rng);
        }
    }
}
