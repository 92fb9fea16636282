//! Player Controller
//!
//! Side-view platformer movement with axis-separated collision:
//! 1. Read held left/right/up and set horizontal velocity, facing and state
//! 2. Jump if grounded, then integrate gravity (always, even when grounded)
//! 3. Move on x, push out of any platform on x
//! 4. Move on y, push out of any platform on y, then clamp to the floor plane
//!
//! Resting contact is restored every step by the vertical pass rather than
//! by skipping gravity, so `on_ground` is never carried over stale.
//!
//! Health regenerates by a fixed amount per step once enough wall-clock time
//! has passed since the last hit. Damage itself comes from enemies.

use macroquad::prelude::Vec2;
use serde::{Deserialize, Serialize};
use super::animation::{AnimationSet, AnimationState, Character, Facing, MoveState, SpriteKey};
use super::collision::{hitbox, Aabb};
use super::world::{DrawIntent, Platform};

/// Pushback from a platform side, measured from the player's anchor.
pub const HORIZONTAL_INSET: f32 = 25.0;
/// Anchor offset from a platform top when landing on it.
pub const LANDING_OFFSET: f32 = 5.0;
/// Anchor offset from a platform bottom when bumping a head into it.
pub const HEAD_BUMP_OFFSET: f32 = 50.0;

pub const MAX_HEALTH: f32 = 100.0;

/// Held directional input, sampled once per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Physics and regen constants for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal speed in pixels per step
    pub speed: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_force: f32,
    /// Added to vertical velocity every step
    pub gravity: f32,
    /// Frames advanced per step
    pub anim_speed: f32,
    /// Health gained per step while regenerating
    pub regen_per_step: f32,
    /// Seconds without damage before regen kicks in
    pub regen_delay: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            jump_force: -12.0,
            gravity: 0.5,
            anim_speed: 0.20,
            regen_per_step: 0.05,
            regen_delay: 1.0,
        }
    }
}

/// The player's frame tables, one per movement state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAnimations {
    pub idle: AnimationSet,
    pub run: AnimationSet,
    pub jump: AnimationSet,
}

impl PlayerAnimations {
    pub fn adventurer() -> Self {
        Self {
            idle: AnimationSet::new(Character::Adventurer, MoveState::Idle, 4),
            run: AnimationSet::new(Character::Adventurer, MoveState::Run, 6),
            jump: AnimationSet::new(Character::Adventurer, MoveState::Jump, 4),
        }
    }

    pub fn for_state(&self, state: MoveState) -> &AnimationSet {
        match state {
            MoveState::Idle => &self.idle,
            MoveState::Run => &self.run,
            MoveState::Jump => &self.jump,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite centre; the hitbox hangs off this point
    pub position: Vec2,
    pub velocity: Vec2,
    pub state: MoveState,
    pub facing: Facing,
    pub on_ground: bool,
    /// May dip below 0 for the instant between a hit and the lose check
    pub health: f32,
    pub score: u32,
    /// Wall-clock time of the last hit (None = never hit)
    pub last_damage_at: Option<f64>,
    pub tuning: PlayerTuning,
    pub animation: AnimationState,
    animations: PlayerAnimations,
    sprite: SpriteKey,
}

impl Player {
    pub fn new(position: Vec2, tuning: PlayerTuning) -> Self {
        let animations = PlayerAnimations::adventurer();
        let sprite = animations.idle.frames(Facing::Right)[0];
        Self {
            position,
            velocity: Vec2::ZERO,
            state: MoveState::Idle,
            facing: Facing::Right,
            on_ground: false,
            health: MAX_HEALTH,
            score: 0,
            last_damage_at: None,
            tuning,
            animation: AnimationState::new(tuning.anim_speed),
            animations,
            sprite,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_anchor(self.position, hitbox::CHARACTER_OFFSET, hitbox::CHARACTER_SIZE)
    }

    pub fn animations(&self) -> &PlayerAnimations {
        &self.animations
    }

    /// Seconds since the last hit; infinite if never hit.
    pub fn seconds_since_damage(&self, now: f64) -> f64 {
        match self.last_damage_at {
            Some(at) => now - at,
            None => f64::INFINITY,
        }
    }

    /// Health for the HUD, never negative.
    pub fn display_health(&self) -> f32 {
        self.health.max(0.0)
    }

    /// Run one simulation step.
    pub fn update(&mut self, input: PlayerInput, platforms: &[Platform], floor_y: f32, now: f64) {
        self.apply_input(input);

        self.velocity.y += self.tuning.gravity;

        self.position.x += self.velocity.x;
        self.resolve_horizontal(platforms);

        self.position.y += self.velocity.y;
        self.resolve_vertical(platforms, floor_y);

        self.animate();
        self.regenerate(now);
    }

    fn apply_input(&mut self, input: PlayerInput) {
        self.velocity.x = 0.0;

        if input.left {
            self.velocity.x = -self.tuning.speed;
            self.facing = Facing::Left;
            if self.on_ground {
                self.state = MoveState::Run;
            }
        } else if input.right {
            self.velocity.x = self.tuning.speed;
            self.facing = Facing::Right;
            if self.on_ground {
                self.state = MoveState::Run;
            }
        } else if self.on_ground {
            self.state = MoveState::Idle;
        }

        if input.up && self.on_ground {
            self.velocity.y = self.tuning.jump_force;
            self.state = MoveState::Jump;
        }
    }

    /// Push out of platforms on x. With several overlaps the last platform in
    /// iteration order wins.
    fn resolve_horizontal(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            let rect = platform.rect();
            if !self.hitbox().penetrates(&rect) {
                continue;
            }
            if self.velocity.x > 0.0 {
                self.position.x = rect.left() - HORIZONTAL_INSET;
            } else if self.velocity.x < 0.0 {
                self.position.x = rect.right() + HORIZONTAL_INSET;
            }
        }
    }

    /// Push out of platforms on y, then clamp to the floor plane. The floor
    /// check runs last and can override a platform snap.
    fn resolve_vertical(&mut self, platforms: &[Platform], floor_y: f32) {
        self.on_ground = false;

        for platform in platforms {
            let rect = platform.rect();
            if !self.hitbox().penetrates(&rect) {
                continue;
            }
            if self.velocity.y > 0.0 {
                self.position.y = rect.top() - LANDING_OFFSET;
                self.velocity.y = 0.0;
                self.on_ground = true;
            } else if self.velocity.y < 0.0 {
                self.position.y = rect.bottom() + HEAD_BUMP_OFFSET;
                self.velocity.y = 0.0;
            }
        }

        if self.hitbox().bottom() >= floor_y {
            self.position.y = floor_y - LANDING_OFFSET;
            self.velocity.y = 0.0;
            self.on_ground = true;
        }
    }

    fn animate(&mut self) {
        let frames = self.animations.for_state(self.state).frames(self.facing);
        if let Some(sprite) = self.animation.step(frames) {
            self.sprite = sprite;
        }
    }

    fn regenerate(&mut self, now: f64) {
        if self.seconds_since_damage(now) > self.tuning.regen_delay {
            self.health = (self.health + self.tuning.regen_per_step).min(MAX_HEALTH);
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

    const FLOOR_Y: f32 = 580.0;

    fn grounded_player(x: f32) -> Player {
        let mut player = Player::new(Vec2::new(x, FLOOR_Y - LANDING_OFFSET), PlayerTuning::default());
        player.on_ground = true;
        player
    }

    fn hold(left: bool, right: bool, up: bool) -> PlayerInput {
        PlayerInput { left, right, up }
    }

    #[test]
    fn test_jump_from_rest() {
        let mut player = grounded_player(100.0);
        player.update(hold(false, false, true), &[], FLOOR_Y, 0.0);

        // jump_force then one step of gravity
        assert_eq!(player.velocity.y, -12.0 + 0.5);
        assert!(!player.on_ground);
        assert_eq!(player.state, MoveState::Jump);
        assert_eq!(player.position.y, FLOOR_Y - LANDING_OFFSET - 11.5);
    }

    #[test]
    fn test_resting_contact_is_stable() {
        let platforms = [Platform::new(0.0, FLOOR_Y, 1000.0, 20.0)];
        let mut player = grounded_player(100.0);
        for _ in 0..120 {
            player.update(PlayerInput::default(), &platforms, FLOOR_Y, 0.0);
            assert_eq!(player.velocity.y, 0.0);
            assert!(player.on_ground);
            assert_eq!(player.position.y, FLOOR_Y - LANDING_OFFSET);
            assert_eq!(player.state, MoveState::Idle);
        }
    }

    #[test]
    fn test_resting_on_raised_platform_is_stable() {
        let platforms = [Platform::new(200.0, 480.0, 200.0, 20.0)];
        let mut player = Player::new(Vec2::new(300.0, 475.0), PlayerTuning::default());
        player.on_ground = true;
        for _ in 0..30 {
            player.update(PlayerInput::default(), &platforms, FLOOR_Y, 0.0);
            assert!(player.on_ground);
            assert_eq!(player.velocity.y, 0.0);
            assert_eq!(player.position.y, 475.0);
        }
    }

    #[test]
    fn test_walking_along_platform_top_is_not_blocked() {
        let platforms = [Platform::new(200.0, 480.0, 200.0, 20.0)];
        let mut player = Player::new(Vec2::new(250.0, 475.0), PlayerTuning::default());
        player.on_ground = true;
        for _ in 0..10 {
            player.update(hold(false, true, false), &platforms, FLOOR_Y, 0.0);
        }
        assert_eq!(player.position.x, 290.0);
        assert_eq!(player.position.y, 475.0);
        assert_eq!(player.state, MoveState::Run);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_no_rightward_tunnelling() {
        // A wall standing on the floor, directly in the player's path
        let wall = Platform::new(200.0, 400.0, 20.0, 180.0);
        let platforms = [wall];
        let mut player = grounded_player(150.0);
        for _ in 0..50 {
            player.update(hold(false, true, false), &platforms, FLOOR_Y, 0.0);
            assert!(player.hitbox().right() <= wall.rect().left());
        }
        assert_eq!(player.position.x, 200.0 - HORIZONTAL_INSET);
    }

    #[test]
    fn test_no_leftward_tunnelling() {
        let wall = Platform::new(200.0, 400.0, 20.0, 180.0);
        let platforms = [wall];
        let mut player = grounded_player(270.0);
        for _ in 0..50 {
            player.update(hold(true, false, false), &platforms, FLOOR_Y, 0.0);
            assert!(player.hitbox().left() >= wall.rect().right());
        }
        assert_eq!(player.position.x, 220.0 + HORIZONTAL_INSET);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_overlaps_resolved_in_iteration_order() {
        // Both walls overlap after the move. The first snap still leaves the
        // hitbox inside the second wall, so the second one listed decides.
        let first = Platform::new(120.0, 400.0, 20.0, 180.0);
        let second = Platform::new(110.0, 400.0, 30.0, 180.0);
        let mut player = grounded_player(100.0);
        player.update(hold(false, true, false), &[first, second], FLOOR_Y, 0.0);
        assert_eq!(player.position.x, 110.0 - HORIZONTAL_INSET);
        assert!(player.hitbox().right() <= second.rect().left());
    }

    #[test]
    fn test_head_bump_snaps_below_platform() {
        let ceiling = Platform::new(50.0, 400.0, 200.0, 20.0);
        let mut player = Player::new(Vec2::new(100.0, 470.0), PlayerTuning::default());
        player.velocity.y = -12.0;
        player.update(PlayerInput::default(), &[ceiling], FLOOR_Y, 0.0);

        assert_eq!(player.position.y, 420.0 + HEAD_BUMP_OFFSET);
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_floor_plane_catches_fall() {
        let mut player = Player::new(Vec2::new(100.0, 560.0), PlayerTuning::default());
        player.velocity.y = 30.0;
        player.update(PlayerInput::default(), &[], FLOOR_Y, 0.0);
        assert_eq!(player.position.y, FLOOR_Y - LANDING_OFFSET);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_floor_overrides_platform_snap() {
        // Platform top sits below the floor: the platform snap lands the
        // hitbox at 590, then the floor check pulls it back up to 580
        let sunken = Platform::new(0.0, 590.0, 100.0, 20.0);
        let mut player = Player::new(Vec2::new(50.0, 570.0), PlayerTuning::default());
        player.velocity.y = 20.0;
        player.update(PlayerInput::default(), &[sunken], FLOOR_Y, 0.0);

        assert_eq!(player.position.y, FLOOR_Y - LANDING_OFFSET);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_holding_up_rejumps_on_landing() {
        let jump = hold(false, false, true);
        let mut player = grounded_player(100.0);
        player.update(jump, &[], FLOOR_Y, 0.0);
        assert!(!player.on_ground);

        let mut steps = 0;
        while !player.on_ground {
            player.update(jump, &[], FLOOR_Y, 0.0);
            steps += 1;
            assert!(steps < 200, "player never landed");
        }
        assert_eq!(player.position.y, FLOOR_Y - LANDING_OFFSET);

        // Still holding up: the first grounded step launches again
        player.update(jump, &[], FLOOR_Y, 0.0);
        assert_eq!(player.velocity.y, -12.0 + 0.5);
        assert!(!player.on_ground);
        assert_eq!(player.state, MoveState::Jump);
    }

    #[test]
    fn test_airborne_keeps_jump_state_while_moving() {
        let mut player = grounded_player(100.0);
        player.update(hold(false, false, true), &[], FLOOR_Y, 0.0);
        assert_eq!(player.state, MoveState::Jump);

        player.update(hold(true, false, false), &[], FLOOR_Y, 0.0);
        assert_eq!(player.state, MoveState::Jump);
        assert_eq!(player.facing, Facing::Left);
        assert_eq!(player.velocity.x, -4.0);

        player.update(PlayerInput::default(), &[], FLOOR_Y, 0.0);
        assert_eq!(player.state, MoveState::Jump);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_regen_waits_for_cooldown() {
        let mut player = grounded_player(100.0);
        player.health = 50.0;
        player.last_damage_at = Some(10.0);

        player.update(PlayerInput::default(), &[], FLOOR_Y, 10.5);
        assert_eq!(player.health, 50.0);
        player.update(PlayerInput::default(), &[], FLOOR_Y, 11.0);
        assert_eq!(player.health, 50.0);
        player.update(PlayerInput::default(), &[], FLOOR_Y, 11.01);
        assert!((player.health - 50.05).abs() < 1e-4);
    }

    #[test]
    fn test_regen_caps_at_max() {
        let mut player = grounded_player(100.0);
        player.health = 99.98;
        player.update(PlayerInput::default(), &[], FLOOR_Y, 0.0);
        assert_eq!(player.health, MAX_HEALTH);
        player.update(PlayerInput::default(), &[], FLOOR_Y, 0.0);
        assert_eq!(player.health, MAX_HEALTH);
    }

    #[test]
    fn test_display_health_clamps_at_zero() {
        let mut player = grounded_player(100.0);
        player.health = -20.0;
        assert_eq!(player.display_health(), 0.0);
        player.health = 42.5;
        assert_eq!(player.display_health(), 42.5);
    }

    #[test]
    fn test_draw_intent_follows_state_and_facing() {
        let mut player = grounded_player(100.0);
        player.update(hold(true, false, false), &[], FLOOR_Y, 0.0);
        match player.draw_intent().sprite {
            SpriteKey::Frame { action, flipped, .. } => {
                assert_eq!(action, MoveState::Run);
                assert!(flipped);
            }
            other => panic!("unexpected sprite {:?}", other),
        }
        assert_eq!(player.draw_intent().center, player.position);
    }
}
