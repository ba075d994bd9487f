//! Axis-aligned bounding boxes and overlap tests
//!
//! Every sprite collides as a fixed-size AABB anchored at its top-left
//! corner: bullets 6x12, enemies 50x50, player 64x64.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict-overlap test; boxes that merely touch edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Collision box for a bullet at the given position
pub fn bullet_box(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
}

/// Collision box for an enemy at the given position
pub fn enemy_box(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
}

/// Collision box for the player at the given position
pub fn player_box(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
}
