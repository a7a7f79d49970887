//! Axis-aligned hitbox tests
//!
//! Collision is binary: the engine reports overlaps but never pushes
//! entities apart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box with its top-left corner at `min`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Anything with a hitbox that can be tested against the player
pub trait Hitbox {
    fn hitbox(&self) -> Aabb;

    /// Entities that no longer take part in collisions (e.g. already collected)
    fn is_live(&self) -> bool {
        true
    }
}

/// Player-vs-field overlap queries
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionDetector;

impl CollisionDetector {
    #[inline]
    pub fn collides(a: &Aabb, b: &Aabb) -> bool {
        a.overlaps(b)
    }

    /// True if the player overlaps any live entity
    pub fn any_hit<T: Hitbox>(player: &Aabb, entities: &[T]) -> bool {
        entities
            .iter()
            .any(|e| e.is_live() && Self::collides(player, &e.hitbox()))
    }

    /// Indices of every live entity the player overlaps, in field order
    pub fn hits<T: Hitbox>(player: &Aabb, entities: &[T]) -> Vec<usize> {
        entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_live() && Self::collides(player, &e.hitbox()))
            .map(|(i, _)| i)
            .collect()
    }
}
