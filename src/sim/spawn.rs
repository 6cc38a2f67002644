//! Entity factories
//!
//! Placement draws integer world coordinates in `0..=WORLD_*` from the
//! session's random source.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{FOOD_PALETTE, Food, Obstacle, Rgba, Segment};
use crate::consts::*;

/// Uniform random position inside the world
pub fn random_world_pos<R: RandomSource + ?Sized>(rng: &mut R) -> Vec2 {
    let x = rng.random_int(0, WORLD_WIDTH);
    let y = rng.random_int(0, WORLD_HEIGHT);
    Vec2::new(x as f32, y as f32)
}

/// Center of the world (head spawn point)
pub fn world_center() -> Vec2 {
    Vec2::new(WORLD_WIDTH as f32 / 2.0, WORLD_HEIGHT as f32 / 2.0)
}

pub fn random_food_color<R: RandomSource + ?Sized>(rng: &mut R) -> Rgba {
    let idx = rng.random_int(0, FOOD_PALETTE.len() as i32 - 1);
    FOOD_PALETTE[idx as usize]
}

/// Lay out the starting snake: head at world center, body trailing left
pub fn init_snake(segments: &mut Vec<Segment>) {
    let mut pos = world_center();
    for _ in 0..START_SEGMENTS {
        segments.push(Segment {
            pos,
            radius: SEGMENT_RADIUS,
            angle: 0.0,
            active: true,
        });
        pos.x -= SEGMENT_RADIUS * 2.0;
    }
}

/// Fill the food pool
pub fn init_food<R: RandomSource + ?Sized>(food: &mut Vec<Food>, rng: &mut R) {
    for _ in 0..FOOD_COUNT {
        let pos = random_world_pos(rng);
        let color = random_food_color(rng);
        food.push(Food {
            pos,
            radius: FOOD_RADIUS,
            active: true,
            color,
        });
    }
}

pub fn init_obstacles<R: RandomSource + ?Sized>(obstacles: &mut Vec<Obstacle>, rng: &mut R) {
    for _ in 0..INITIAL_OBSTACLES {
        add_obstacle(obstacles, rng);
    }
}

/// Append one obstacle at a random position; returns where it landed
pub fn add_obstacle<R: RandomSource + ?Sized>(obstacles: &mut Vec<Obstacle>, rng: &mut R) -> Vec2 {
    let pos = random_world_pos(rng);
    obstacles.push(Obstacle::new(pos));
    pos
}

/// New head ball cloned from the current head's position and heading
pub fn grown_segment(head: &Segment) -> Segment {
    Segment {
        pos: head.pos,
        radius: SEGMENT_RADIUS,
        angle: head.angle,
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionRng;

    #[test]
    fn test_init_snake_layout() {
        let mut segs = Vec::new();
        init_snake(&mut segs);
        assert_eq!(segs.len(), START_SEGMENTS);
        assert_eq!(segs[0].pos, Vec2::new(1000.0, 1000.0));
        for pair in segs.windows(2) {
            assert!((pair[0].pos.x - pair[1].pos.x - 24.0).abs() < 1e-4);
            assert_eq!(pair[0].pos.y, pair[1].pos.y);
        }
        assert!(segs.iter().all(|s| s.active && s.angle == 0.0));
    }

    #[test]
    fn test_food_within_world_and_palette() {
        let mut rng = SessionRng::new(9);
        let mut food = Vec::new();
        init_food(&mut food, &mut rng);
        assert_eq!(food.len(), FOOD_COUNT);
        for f in &food {
            assert!(f.pos.x >= 0.0 && f.pos.x <= WORLD_WIDTH as f32);
            assert!(f.pos.y >= 0.0 && f.pos.y <= WORLD_HEIGHT as f32);
            assert_eq!(f.pos, f.pos.round());
            assert!(FOOD_PALETTE.contains(&f.color));
            assert!(f.active);
        }
    }

    #[test]
    fn test_add_obstacle_appends() {
        let mut rng = SessionRng::new(5);
        let mut obstacles = Vec::new();
        init_obstacles(&mut obstacles, &mut rng);
        let pos = add_obstacle(&mut obstacles, &mut rng);
        assert_eq!(obstacles.len(), INITIAL_OBSTACLES + 1);
        assert_eq!(obstacles.last().unwrap().pos, pos);
        assert_eq!(obstacles.last().unwrap().radius, OBSTACLE_RADIUS);
    }

    #[test]
    fn test_grown_segment_copies_head() {
        let head = Segment {
            pos: Vec2::new(10.0, 20.0),
            radius: SEGMENT_RADIUS,
            angle: 33.0,
            active: false,
        };
        let seg = grown_segment(&head);
        assert_eq!(seg.pos, head.pos);
        assert_eq!(seg.angle, 33.0);
        assert!(seg.active);
    }
}
