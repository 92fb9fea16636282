//! Patrolling enemies
//!
//! An enemy walks back and forth between two x limits and hurts the player
//! on contact. The speed sign flips only after the enemy has crossed a limit,
//! so it may sit up to one step (|speed| pixels) past the limit before
//! turning around.
//!
//! Precondition: `left_limit <= right_limit`. Nothing checks this.

use macroquad::prelude::Vec2;
use super::animation::{AnimationSet, AnimationState, Character, Facing, MoveState, SpriteKey};
use super::collision::{hitbox, Aabb};
use super::player::Player;
use super::state::GameState;
use super::world::DrawIntent;

pub const PATROL_SPEED: f32 = 2.0;
pub const ANIM_SPEED: f32 = 0.18;
pub const CONTACT_DAMAGE: f32 = 30.0;
/// Seconds the player is safe after a hit
pub const HIT_COOLDOWN: f64 = 0.8;

/// Damage an enemy dealt this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactHit {
    pub damage: f32,
    /// Player health right after the subtraction, before any clamping
    pub health_after: f32,
}

impl ContactHit {
    /// A hit that drops health to zero or below loses the game.
    pub fn proposed_state(&self) -> Option<GameState> {
        (self.health_after <= 0.0).then_some(GameState::Lose)
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub facing: Facing,
    /// Signed; the sign is the walking direction
    pub speed: f32,
    pub left_limit: f32,
    pub right_limit: f32,
    pub animation: AnimationState,
    run: AnimationSet,
    sprite: SpriteKey,
}

impl Enemy {
    pub fn new(x: f32, y: f32, left_limit: f32, right_limit: f32) -> Self {
        // Reuses the adventurer run cycle; there is no idle variant
        let run = AnimationSet::new(Character::Adventurer, MoveState::Run, 6);
        let sprite = run.frames(Facing::Right)[0];
        Self {
            position: Vec2::new(x, y),
            facing: Facing::Right,
            speed: PATROL_SPEED,
            left_limit,
            right_limit,
            animation: AnimationState::new(ANIM_SPEED),
            run,
            sprite,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_anchor(self.position, hitbox::CHARACTER_OFFSET, hitbox::CHARACTER_SIZE)
    }

    pub fn frames(&self) -> &AnimationSet {
        &self.run
    }

    /// Patrol one step, then hurt the player if touching and the player's
    /// hit cooldown has run out.
    pub fn update(&mut self, player: &mut Player, now: f64) -> Option<ContactHit> {
        self.patrol();
        let hit = self.check_contact(player, now);
        self.animate();
        hit
    }

    fn patrol(&mut self) {
        self.position.x += self.speed;

        if self.position.x < self.left_limit {
            self.facing = Facing::Right;
            self.speed = -self.speed;
        }
        if self.position.x > self.right_limit {
            self.facing = Facing::Left;
            self.speed = -self.speed;
        }
    }

    fn check_contact(&self, player: &mut Player, now: f64) -> Option<ContactHit> {
        if !self.hitbox().intersects(&player.hitbox()) {
            return None;
        }
        if player.seconds_since_damage(now) <= HIT_COOLDOWN {
            return None;
        }

        player.health -= CONTACT_DAMAGE;
        player.last_damage_at = Some(now);

        Some(ContactHit {
            damage: CONTACT_DAMAGE,
            health_after: player.health,
        })
    }

    fn animate(&mut self) {
        if let Some(sprite) = self.animation.step(self.run.frames(self.facing)) {
            self.sprite = sprite;
        }
    }

    pub fn draw_intent(&self) -> DrawIntent {
        DrawIntent {
            sprite: self.sprite,
            center: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::PlayerTuning;

    fn far_player() -> Player {
        Player::new(Vec2::new(-1000.0, -1000.0), PlayerTuning::default())
    }

    #[test]
    fn test_turns_around_at_left_limit() {
        let mut enemy = Enemy::new(350.0, 520.0, 350.0, 650.0);
        enemy.speed = -PATROL_SPEED;
        enemy.facing = Facing::Left;
        let mut player = far_player();

        enemy.update(&mut player, 0.0);
        // One step of overshoot, then the flip
        assert_eq!(enemy.position.x, 348.0);
        assert!(enemy.speed > 0.0);
        assert_eq!(enemy.facing, Facing::Right);

        enemy.update(&mut player, 0.0);
        assert_eq!(enemy.position.x, 350.0);
        assert_eq!(enemy.facing, Facing::Right);
    }

    #[test]
    fn test_turns_around_at_right_limit() {
        let mut enemy = Enemy::new(650.0, 520.0, 350.0, 650.0);
        let mut player = far_player();

        enemy.update(&mut player, 0.0);
        assert_eq!(enemy.position.x, 652.0);
        assert!(enemy.speed < 0.0);
        assert_eq!(enemy.facing, Facing::Left);
    }

    #[test]
    fn test_patrol_stays_within_overshoot_tolerance() {
        let mut enemy = Enemy::new(250.0, 430.0, 200.0, 380.0);
        let mut player = far_player();
        let eps = PATROL_SPEED;
        let (mut saw_left, mut saw_right) = (false, false);

        for _ in 0..10_000 {
            enemy.update(&mut player, 0.0);
            let x = enemy.position.x;
            assert!(x >= enemy.left_limit - eps && x <= enemy.right_limit + eps, "escaped to {}", x);
            saw_left |= enemy.facing == Facing::Left;
            saw_right |= enemy.facing == Facing::Right;
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_contact_damage_and_cooldown() {
        let mut enemy = Enemy::new(100.0, 480.0, 0.0, 1000.0);
        enemy.speed = 0.0;
        let mut player = Player::new(Vec2::new(100.0, 480.0), PlayerTuning::default());
        player.health = 40.0;

        let hit = enemy.update(&mut player, 5.0).expect("contact should hit");
        assert_eq!(player.health, 10.0);
        assert_eq!(player.last_damage_at, Some(5.0));
        assert_eq!(hit.health_after, 10.0);
        assert_eq!(hit.proposed_state(), None);

        // Within 0.8s: nothing changes
        assert!(enemy.update(&mut player, 5.5).is_none());
        assert!(enemy.update(&mut player, 5.8).is_none());
        assert_eq!(player.health, 10.0);
        assert_eq!(player.last_damage_at, Some(5.0));

        // Cooldown elapsed: lethal hit
        let hit = enemy.update(&mut player, 5.81).expect("cooldown elapsed");
        assert_eq!(player.health, -20.0);
        assert_eq!(hit.proposed_state(), Some(GameState::Lose));
    }

    #[test]
    fn test_first_contact_hits_without_prior_damage() {
        let mut enemy = Enemy::new(100.0, 480.0, 0.0, 1000.0);
        enemy.speed = 0.0;
        let mut player = Player::new(Vec2::new(110.0, 480.0), PlayerTuning::default());

        // Clock near zero; a never-hit player is always vulnerable
        assert!(enemy.update(&mut player, 0.0).is_some());
        assert_eq!(player.health, 70.0);
    }

    #[test]
    fn test_always_plays_run_cycle() {
        let mut enemy = Enemy::new(400.0, 520.0, 350.0, 650.0);
        let mut player = far_player();
        for _ in 0..50 {
            enemy.update(&mut player, 0.0);
            match enemy.draw_intent().sprite {
                SpriteKey::Frame { action, flipped, .. } => {
                    assert_eq!(action, MoveState::Run);
                    assert_eq!(flipped, enemy.facing == Facing::Left);
                }
                other => panic!("unexpected sprite {:?}", other),
            }
        }
    }
}
