//! Coil Snake headless runner
//!
//! Drives a session with a simple autopilot at 60 Hz and prints the final
//! HUD as JSON. A real host swaps the autopilot for pointer input and draws
//! each `FrameView`.
//!
//! Usage: `coil-snake [settings.json] [ticks]`

use coil_snake::sim::{GameEvent, GameState, TickInput};
use coil_snake::{FrameDriver, Settings, heading_vector};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coil Snake (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load settings from {path}: {e}; using defaults");
            Settings::default()
        }),
        None => Settings::default(),
    };
    let ticks = args
        .next()
        .and_then(|t| t.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let mut driver = FrameDriver::new(settings);
    let mut best_score = 0;
    let mut games = 1;

    for n in 0..ticks {
        let input = autopilot(driver.state(), n);
        let view = driver.frame(&input, FRAME_DT);
        best_score = best_score.max(view.hud.score);

        for event in driver.events() {
            match event {
                GameEvent::ObstaclesCaptured { count } => {
                    log::info!("tick {n}: captured {count} obstacles");
                }
                GameEvent::ObstacleStruck { lives } => {
                    log::info!("tick {n}: struck an obstacle, {lives} lives left");
                }
                GameEvent::Reset => games += 1,
                _ => {}
            }
        }
    }

    let hud = coil_snake::view::Hud::new(driver.state());
    log::info!("Finished {ticks} ticks over {games} games, best score {best_score}");
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode HUD: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts embed the library directly
}

/// Alternate between cruising and tight coils, boosting while cruising
///
/// Restarts immediately after a game over.
fn autopilot(state: &GameState, tick: u64) -> TickInput {
    let head = state.head();
    let phase = (tick / 180) % 3;
    let (turn, boost) = match phase {
        0 => (0.0, true),
        1 => (90.0, false),
        _ => (-15.0, false),
    };
    TickInput {
        pointer: head.pos + heading_vector(head.angle + turn) * 200.0,
        boost,
        reset: state.is_game_over(),
    }
}
