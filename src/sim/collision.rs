//! Collision and proximity tests
//!
//! Everything in this game is either an axis-aligned rectangle (player,
//! obstacles) or a circle (coins), so two pure predicates cover it.

use glam::Vec2;

/// An axis-aligned rectangle, origin at top-left (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Center of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Strict AABB overlap test. Uses strict inequalities on both axes, so
/// rectangles that merely touch edges do not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// True iff the Euclidean distance between two centers is strictly below
/// `threshold`. Coin pickup uses this with a generous threshold rather than
/// a true circle-rectangle intersection.
#[inline]
pub fn circle_proximity(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}
