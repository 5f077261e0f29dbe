//! Axis-aligned bounding boxes
//!
//! Both entities use a top-left origin, so a box is `pos .. pos + size`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box for an entity drawn from its top-left corner
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict intersection: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Clamp a left edge so an entity of `width` stays inside `[0, bound]`
#[inline]
pub fn clamp_x(x: f32, width: f32, bound: f32) -> f32 {
    x.clamp(0.0, (bound - width).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
        let right = Aabb::from_pos_size(Vec2::new(50.0, 0.0), Vec2::new(20.0, 20.0));
        let below = Aabb::from_pos_size(Vec2::new(0.0, 50.0), Vec2::new(20.0, 20.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_disjoint() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        assert_eq!(a.width(), 10.0);
        assert_eq!(b.height(), 10.0);
    }

    #[test]
    fn test_clamp_x() {
        assert_eq!(clamp_x(-5.0, 50.0, 500.0), 0.0);
        assert_eq!(clamp_x(480.0, 50.0, 500.0), 450.0);
        assert_eq!(clamp_x(200.0, 50.0, 500.0), 200.0);
    }
}
