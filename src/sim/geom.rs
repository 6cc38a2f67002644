//! Flat geometry for collision checks
//!
//! Every overlap test in the simulation goes through these routines so the
//! touching-edge behavior is identical everywhere:
//! - rectangles overlap only on strict interior intersection
//! - point containment is half-open (`min <= p < max`)
//! - circles overlap when centers are within the sum of radii (inclusive)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (origin at min corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square box around a circle, scaled about its center
    ///
    /// `scale` of 1.0 gives the full bounding box of the circle.
    pub fn around_circle(center: Vec2, radius: f32, scale: f32) -> Self {
        let r = radius * scale;
        Self::new(center.x - r, center.y - r, r * 2.0, r * 2.0)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }
}

/// Strict AABB intersection; rectangles sharing only an edge do not overlap
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Half-open containment test
#[inline]
pub fn point_in_rect(p: Vec2, rect: &Rect) -> bool {
    p.x >= rect.x && p.x < rect.x + rect.width && p.y >= rect.y && p.y < rect.y + rect.height
}

/// Circle overlap (touching counts)
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    c1.distance_squared(c2) <= reach * reach
}

/// Smallest rectangle containing every point
///
/// Returns `None` for an empty slice.
pub fn bounding_rect(points: &[Vec2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}

/// Rotate a vector by degrees (positive turns +X toward +Y)
#[inline]
pub fn rotate_vector(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_overlap_interior() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_rects_touching_edge_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_point_in_rect_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(Vec2::new(0.0, 0.0), &r));
        assert!(point_in_rect(Vec2::new(9.99, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(10.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(5.0, 10.0), &r));
        assert!(!point_in_rect(Vec2::new(-0.01, 5.0), &r));
    }

    #[test]
    fn test_circles_overlap_touching() {
        assert!(circles_overlap(Vec2::ZERO, 12.0, Vec2::new(24.0, 0.0), 12.0));
        assert!(!circles_overlap(Vec2::ZERO, 12.0, Vec2::new(24.1, 0.0), 12.0));
    }

    #[test]
    fn test_bounding_rect() {
        let pts = [
            Vec2::new(3.0, 7.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(5.0, -1.0),
            Vec2::new(0.0, 0.0),
        ];
        let r = bounding_rect(&pts).unwrap();
        assert_eq!(r, Rect::new(-2.0, -1.0, 7.0, 8.0));
        assert!(bounding_rect(&[]).is_none());
    }

    #[test]
    fn test_around_circle_scaled() {
        let r = Rect::around_circle(Vec2::new(100.0, 50.0), 10.0, 0.7);
        assert!((r.x - 93.0).abs() < 1e-4);
        assert!((r.width - 14.0).abs() < 1e-4);
        assert!((r.max().y - 57.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_vector() {
        let v = rotate_vector(Vec2::X, 90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        let w = rotate_vector(Vec2::X, -40.0);
        assert!((w.length() - 1.0).abs() < 1e-6);
        assert!(w.y < 0.0);
    }
}
