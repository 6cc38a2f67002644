//! Collision checks and their side effects
//!
//! Three independent passes run each simulated tick, in this order:
//! food pickup, self-encirclement, obstacle strike. All rectangle tests go
//! through `geom::rects_overlap`.

use glam::Vec2;

use super::geom::{Rect, bounding_rect, circles_overlap, point_in_rect, rects_overlap};
use super::rng::RandomSource;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Eat every active food the head box overlaps
///
/// Each pickup relocates the food, grows the snake by one ball at the head
/// and, on every second pickup, adds an obstacle. Returns pickups this pass.
pub fn eat_food<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) -> u32 {
    let mut eaten = 0;

    for i in 0..state.food.len() {
        let head = *state.head();
        let head_box = Rect::around_circle(head.pos, head.radius, 1.0);
        let food = &mut state.food[i];
        let food_box = Rect::around_circle(food.pos, food.radius, 1.0);
        if !food.active || !rects_overlap(&head_box, &food_box) {
            continue;
        }

        let eaten_at = food.pos;
        food.active = false;
        food.pos = spawn::random_world_pos(rng);
        food.active = true;

        state.food_eaten += 1;
        eaten += 1;
        state.events.push(GameEvent::FoodEaten { pos: eaten_at });
        log::debug!("food eaten at {eaten_at} (total {})", state.food_eaten);

        if state.food_eaten % 2 == 0 {
            let pos = spawn::add_obstacle(&mut state.obstacles, rng);
            state.events.push(GameEvent::ObstacleSpawned { pos });
        }

        state.segments.insert(0, spawn::grown_segment(&head));
    }

    eaten
}

/// Index of the first body ball in the closing range touching the head
pub fn loop_closure(state: &GameState) -> Option<usize> {
    if state.segments.len() < ENCIRCLE_MIN_SEGMENTS {
        return None;
    }
    let head = state.head();
    let last = ENCIRCLE_CLOSE_LAST.min(state.segments.len() - 1);
    (ENCIRCLE_CLOSE_FIRST..=last).find(|&i| {
        let seg = &state.segments[i];
        circles_overlap(head.pos, head.radius, seg.pos, seg.radius)
    })
}

/// Head plus the fixed body waypoints
///
/// Caller guarantees the body is long enough (see `loop_closure`).
pub fn capture_outline(state: &GameState) -> [Vec2; 4] {
    let [a, b, c] = ENCIRCLE_WAYPOINTS;
    [
        state.head().pos,
        state.segments[a].pos,
        state.segments[b].pos,
        state.segments[c].pos,
    ]
}

/// Remove obstacles inside the loop when the head closes on its own body
///
/// The capture region is the bounding box of the outline, a coarse stand-in
/// for the loop's interior. Returns obstacles removed.
pub fn encircle(state: &mut GameState) -> u32 {
    if loop_closure(state).is_none() {
        return 0;
    }
    let outline = capture_outline(state);
    state.capture_outline = Some(outline);
    let Some(region) = bounding_rect(&outline) else {
        return 0;
    };

    let before = state.obstacles.len();
    state.obstacles.retain(|o| !point_in_rect(o.pos, &region));
    let removed = (before - state.obstacles.len()) as u32;

    if removed > 0 {
        state.captured += removed;
        state.events.push(GameEvent::ObstaclesCaptured { count: removed });
        log::debug!("encircled {removed} obstacles");
    }
    removed
}

/// Resolve head-vs-obstacle strikes and respawn struck obstacles
///
/// A strike costs one life. With lives left the snake is stunned; on the
/// last life the game ends and the pass stops. Inactive obstacles that are
/// not being hit move to a new random spot and come back.
pub fn strike_obstacles<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    for i in 0..state.obstacles.len() {
        let head = state.head();
        let head_box = Rect::around_circle(head.pos, head.radius, STRIKE_BOX_SCALE);
        let obstacle = &mut state.obstacles[i];

        if !obstacle.active {
            obstacle.pos = spawn::random_world_pos(rng);
            obstacle.active = true;
            continue;
        }

        let obstacle_box = Rect::around_circle(obstacle.pos, obstacle.radius, STRIKE_BOX_SCALE);
        if !rects_overlap(&head_box, &obstacle_box) {
            continue;
        }

        obstacle.active = false;
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::ObstacleStruck { lives: state.lives });

        if state.lives > 0 {
            state.head_mut().active = false;
            state.phase = GamePhase::Stunned {
                timer: STUN_SECONDS,
            };
            log::debug!("obstacle strike, {} lives left", state.lives);
        } else {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
            log::info!("game over, final score {}", state.score());
            break;
        }
    }
}
