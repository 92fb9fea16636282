//! Static world entities: platforms, coins and the finish flag.
//!
//! None of these move. Platforms are pure geometry; coins and the flag are
//! trigger volumes checked against the player's hitbox once per step.

use macroquad::prelude::Vec2;
use super::animation::SpriteKey;
use super::collision::{hitbox, Aabb};
use super::player::Player;
use super::state::GameState;

/// What the renderer needs to draw one sprite: the image and where its
/// centre goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawIntent {
    pub sprite: SpriteKey,
    pub center: Vec2,
}

/// Solid rectangle. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Aabb,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Aabb::new(x, y, w, h) }
    }

    pub fn rect(&self) -> Aabb {
        self.rect
    }
}

/// A pickup worth one point. `collected` only ever goes false -> true.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    position: Vec2,
    collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            collected: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_anchor(self.position, hitbox::COIN_OFFSET, hitbox::COIN_SIZE)
    }

    /// Collect the coin if the player touches it. Returns true on the step
    /// the coin is picked up, false otherwise (including every later step).
    pub fn update(&mut self, player: &mut Player) -> bool {
        if self.collected || !player.hitbox().intersects(&self.hitbox()) {
            return false;
        }
        self.collected = true;
        player.score += 1;
        true
    }

    /// Collected coins are not drawn.
    pub fn draw_intent(&self) -> Option<DrawIntent> {
        (!self.collected).then_some(DrawIntent {
            sprite: SpriteKey::Coin,
            center: self.position,
        })
    }
}

/// The level's goal flag. Stateless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    position: Vec2,
}

impl Finish {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: Vec2::new(x, y) }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_anchor(self.position, hitbox::FINISH_OFFSET, hitbox::FINISH_SIZE)
    }

    /// Proposes `Win` whenever the player overlaps the flag.
    pub fn update(&self, player: &Player) -> Option<GameState> {
        player
            .hitbox()
            .intersects(&self.hitbox())
            .then_some(GameState::Win)
    }

    pub fn draw_intent(&self) -> DrawIntent {
        DrawIntent {
            sprite: SpriteKey::Flag,
            center: self.position,
        }
    }
}
