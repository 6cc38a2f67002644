//! Follow-chain motion
//!
//! The head turns toward the pointer at a capped rate and moves along its
//! heading. Every other segment eases toward where its leader was *before*
//! this tick's motion, which gives the body its elastic lag.

use glam::Vec2;

use super::state::Segment;
use crate::consts::*;
use crate::{heading_between, heading_vector, normalize_degrees};

/// Speed and tail responsiveness for the current input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Head speed (units per second)
    pub speed: f32,
    /// Per-tick lerp factor for tail segments
    pub follow: f32,
}

impl MotionParams {
    pub fn new(boost: bool) -> Self {
        if boost {
            Self {
                speed: BOOST_SPEED,
                follow: FOLLOW_BOOST,
            }
        } else {
            Self {
                speed: NORMAL_SPEED,
                follow: FOLLOW_NORMAL,
            }
        }
    }
}

/// Turn `angle` toward `target` by at most `max_turn` degrees along the
/// shorter arc; snaps onto the target once within reach
pub fn turn_toward(angle: f32, target: f32, max_turn: f32) -> f32 {
    let target = normalize_degrees(target);
    let delta = normalize_degrees(target - angle);
    if delta.abs() > max_turn {
        normalize_degrees(angle + max_turn.copysign(delta))
    } else {
        target
    }
}

/// Steer the head toward `pointer`; returns the normalized look direction
pub fn steer_head(head: &mut Segment, pointer: Vec2, dt: f32) -> Vec2 {
    let target = heading_between(head.pos, pointer);
    head.angle = turn_toward(head.angle, target, ANGLE_INCREMENT * dt);
    (pointer - head.pos).normalize_or_zero()
}

/// Move the head along its heading and drag the body behind it
///
/// Single pass: each segment's pre-move position is carried forward as the
/// target of the next one, so no segment chases an already-moved leader.
pub fn advance_chain(segments: &mut [Segment], params: MotionParams, dt: f32) {
    let Some((head, body)) = segments.split_first_mut() else {
        return;
    };
    let mut leader_prev = head.pos;
    head.pos += heading_vector(head.angle) * params.speed * dt;

    for seg in body {
        let own_prev = seg.pos;
        seg.pos = own_prev.lerp(leader_prev, params.follow);
        leader_prev = own_prev;
    }
}
