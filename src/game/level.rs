//! The forest level
//!
//! Level geometry is fixed construction data, not a loaded format. Platform
//! order matters: horizontal and vertical resolution walk this list front to
//! back.

use macroquad::prelude::Vec2;
use super::enemy::Enemy;
use super::world::{Coin, Finish, Platform};

pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// World floor plane (top of the ground strip)
pub const FLOOR_Y: f32 = SCREEN_HEIGHT - 20.0;

/// Everything a level places in the world.
#[derive(Debug, Clone)]
pub struct Level {
    pub player_start: Vec2,
    pub floor_y: f32,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub finish: Finish,
}

impl Level {
    pub fn forest() -> Self {
        Self {
            player_start: Vec2::new(100.0, 480.0),
            floor_y: FLOOR_Y,
            platforms: vec![
                Platform::new(0.0, SCREEN_HEIGHT - 20.0, SCREEN_WIDTH, 20.0),
                Platform::new(200.0, 480.0, 200.0, 20.0),
                Platform::new(450.0, 380.0, 180.0, 20.0),
                Platform::new(300.0, 290.0, 200.0, 20.0),
                Platform::new(550.0, 210.0, 180.0, 20.0),
            ],
            enemies: vec![
                Enemy::new(400.0, 520.0, 350.0, 650.0),
                Enemy::new(250.0, 430.0, 200.0, 380.0),
            ],
            coins: vec![
                Coin::new(220.0, 450.0),
                Coin::new(520.0, 350.0),
                Coin::new(330.0, 260.0),
                Coin::new(750.0, 180.0),
            ],
            finish: Finish::new(900.0, 160.0),
        }
    }

    /// An open floor with nothing on it but the flag, out of reach.
    /// Handy for isolating one entity in tests.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            player_start: Vec2::new(100.0, FLOOR_Y - 5.0),
            floor_y: FLOOR_Y,
            platforms: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            finish: Finish::new(-10_000.0, -10_000.0),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::forest()
    }
}
