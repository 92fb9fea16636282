//! Collision System
//!
//! Axis-aligned boxes for every entity in the level. Hitboxes are never
//! stored: each entity derives its box from its current position on demand,
//! so a box can't go stale between the horizontal and vertical resolve.
//!
//! Two overlap tests exist:
//! - `intersects`: closed intervals, touching edges count. Used for triggers
//!   (enemy contact, coin pickup, finish flag).
//! - `penetrates`: open intervals, positive-area overlap only. Used when
//!   resolving against solid platforms, so standing exactly on a platform top
//!   isn't treated as being inside it.

use macroquad::prelude::Vec2;

/// An axis-aligned rectangle defined by its top-left corner and size.
/// Screen space: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size whose top-left corner sits at `anchor + offset`.
    pub fn from_anchor(anchor: Vec2, offset: Vec2, size: Vec2) -> Self {
        Self::new(anchor.x + offset.x, anchor.y + offset.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Closed-interval overlap: true when the boxes share any point,
    /// including a shared edge or corner.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Open-interval overlap: true only when the boxes share a region of
    /// positive area.
    pub fn penetrates(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Per-entity-type hitbox geometry, relative to the entity's anchor point.
pub mod hitbox {
    use macroquad::prelude::Vec2;

    /// Player and enemies: 40x50, reaching 45 above and 5 below the anchor.
    pub const CHARACTER_OFFSET: Vec2 = Vec2::new(-20.0, -45.0);
    pub const CHARACTER_SIZE: Vec2 = Vec2::new(40.0, 50.0);

    /// Coins: 30x30 centred on the anchor.
    pub const COIN_OFFSET: Vec2 = Vec2::new(-15.0, -15.0);
    pub const COIN_SIZE: Vec2 = Vec2::new(30.0, 30.0);

    /// Finish flag: 40x50, reaching 40 above and 10 below the anchor.
    pub const FINISH_OFFSET: Vec2 = Vec2::new(-20.0, -40.0);
    pub const FINISH_SIZE: Vec2 = Vec2::new(40.0, 50.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.penetrates(&b));
    }

    #[test]
    fn test_touching_edges_intersect_but_do_not_penetrate() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        let corner = Aabb::new(10.0, 10.0, 5.0, 5.0);

        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
        assert!(a.intersects(&corner));

        assert!(!a.penetrates(&right));
        assert!(!a.penetrates(&below));
        assert!(!a.penetrates(&corner));
    }

    #[test]
    fn test_separated_on_one_axis_does_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x, separated on y
        let b = Aabb::new(5.0, 10.5, 10.0, 10.0);
        assert!(!a.intersects(&b));
        // Overlaps on y, separated on x
        let c = Aabb::new(-10.5, 5.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_character_hitbox_from_anchor() {
        let hb = Aabb::from_anchor(
            Vec2::new(100.0, 480.0),
            hitbox::CHARACTER_OFFSET,
            hitbox::CHARACTER_SIZE,
        );
        assert_eq!(hb.left(), 80.0);
        assert_eq!(hb.right(), 120.0);
        assert_eq!(hb.top(), 435.0);
        assert_eq!(hb.bottom(), 485.0);
    }
}
