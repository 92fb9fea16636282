//! Screen Renderer
//!
//! Draws whatever the current `GameState` calls for: the menu, the running
//! level with its HUD, or an end screen. The simulation only hands over
//! draw intents and plain values; all macroquad calls live here.

use macroquad::prelude::*;
use crate::asset::SpriteLibrary;
use crate::settings::FpsLimit;
use super::animation::SpriteKey;
use super::collision::Aabb;
use super::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use super::player::MAX_HEALTH;
use super::simulation::Simulation;
use super::state::GameState;

const PLATFORM_COLOR: Color = Color::new(120.0 / 255.0, 70.0 / 255.0, 30.0 / 255.0, 1.0);
const HP_BACK: Color = Color::new(120.0 / 255.0, 0.0, 0.0, 1.0);
const HP_FILL: Color = Color::new(0.0, 200.0 / 255.0, 0.0, 1.0);
const SCORE_COLOR: Color = Color::new(230.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0, 1.0);

// Debug overlay
const HITBOX_PLAYER: Color = Color::new(0.2, 0.6, 1.0, 1.0);
const HITBOX_ENEMY: Color = Color::new(1.0, 0.25, 0.25, 1.0);
const HITBOX_PICKUP: Color = Color::new(1.0, 0.9, 0.2, 1.0);
const HITBOX_PLATFORM: Color = Color::new(0.6, 1.0, 0.6, 1.0);
const DEBUG_PANEL_BG: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Health bar geometry, top-left corner and size
pub const HP_BAR: Aabb = Aabb::new(20.0, 20.0, 200.0, 20.0);
const HP_BORDER: f32 = 2.0;

pub const SCORE_POS: Vec2 = Vec2::new(20.0, 60.0);
const SCORE_SHADOW: Vec2 = Vec2::new(2.0, 2.0);

/// Placeholder size for sprites whose image failed to load
const PLACEHOLDER_SIZE: f32 = 40.0;

/// Width of the green part of the health bar. Truncates like the text does.
pub fn hp_fill_width(display_health: f32) -> f32 {
    ((display_health / MAX_HEALTH) * HP_BAR.w).floor().clamp(0.0, HP_BAR.w)
}

/// Text under the health bar, e.g. "73 HP"
pub fn hp_label(display_health: f32) -> String {
    format!("{} HP", display_health as i32)
}

/// Title and colour of the end screen for a terminal state
pub fn end_banner(state: GameState) -> Option<(&'static str, Color)> {
    match state {
        GameState::Win => Some(("YOU WIN!", GREEN)),
        GameState::Lose => Some(("YOU LOSE", RED)),
        GameState::Menu | GameState::Playing => None,
    }
}

/// Draw one full frame. `debug` carries the FPS cap when the overlay is on.
pub fn draw_frame(sim: &Simulation, sprites: &SpriteLibrary, debug: Option<FpsLimit>) {
    clear_background(BLACK);

    match sim.state() {
        GameState::Menu => draw_menu(),
        GameState::Playing => {
            draw_world(sim, sprites);
            draw_hud(sim);
            if let Some(fps_limit) = debug {
                draw_debug_overlay(sim, sprites, fps_limit);
            }
        }
        state @ (GameState::Win | GameState::Lose) => draw_end_screen(state, sim.player.score),
    }
}

fn draw_menu() {
    let cx = SCREEN_WIDTH / 2.0;
    draw_text_centered("PLATFORMER GAME", cx, 100.0, 48.0, WHITE);
    draw_text_centered("Click to Start", cx, 200.0, 36.0, WHITE);
}

fn draw_end_screen(state: GameState, score: u32) {
    let Some((title, color)) = end_banner(state) else { return };
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    draw_text_centered(title, cx, cy, 64.0, color);
    draw_text_centered(&format!("Final Score: {}", score), cx, cy + 80.0, 40.0, WHITE);
}

fn draw_world(sim: &Simulation, sprites: &SpriteLibrary) {
    match sprites.get(SpriteKey::Background) {
        Some(bg) => draw_texture(bg, 0.0, 0.0, WHITE),
        None => clear_background(Color::new(0.12, 0.22, 0.14, 1.0)),
    }

    for platform in &sim.platforms {
        let r = platform.rect();
        draw_rectangle(r.x, r.y, r.w, r.h, PLATFORM_COLOR);
    }

    for intent in sim.draw_intents() {
        draw_sprite(sprites, intent.sprite, intent.center);
    }
}

/// Blit a sprite centred on `center`, or a flat placeholder if it never loaded
fn draw_sprite(sprites: &SpriteLibrary, key: SpriteKey, center: Vec2) {
    match sprites.get(key) {
        Some(texture) => {
            let x = (center.x - texture.width() / 2.0).round();
            let y = (center.y - texture.height() / 2.0).round();
            draw_texture(texture, x, y, WHITE);
        }
        None => {
            let color = match key {
                SpriteKey::Coin => GOLD,
                SpriteKey::Flag => GREEN,
                _ => MAGENTA,
            };
            let half = PLACEHOLDER_SIZE / 2.0;
            draw_rectangle(center.x - half, center.y - half, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, color);
        }
    }
}

fn draw_hud(sim: &Simulation) {
    let health = sim.player.display_health();
    let bar = HP_BAR;

    draw_rectangle(
        bar.x - HP_BORDER,
        bar.y - HP_BORDER,
        bar.w + HP_BORDER * 2.0,
        bar.h + HP_BORDER * 2.0,
        BLACK,
    );
    draw_rectangle(bar.x, bar.y, bar.w, bar.h, HP_BACK);
    draw_rectangle(bar.x, bar.y, hp_fill_width(health), bar.h, HP_FILL);
    draw_text_centered(&hp_label(health), bar.x + bar.w / 2.0, bar.y + bar.h / 2.0, 24.0, WHITE);

    let score = format!("Score: {}", sim.player.score);
    draw_text_top_left(&score, SCORE_POS + SCORE_SHADOW, 40.0, BLACK);
    draw_text_top_left(&score, SCORE_POS, 40.0, SCORE_COLOR);
}

fn draw_debug_overlay(sim: &Simulation, sprites: &SpriteLibrary, fps_limit: FpsLimit) {
    for platform in &sim.platforms {
        draw_aabb(platform.rect(), HITBOX_PLATFORM);
    }
    for coin in sim.coins.iter().filter(|c| !c.is_collected()) {
        draw_aabb(coin.hitbox(), HITBOX_PICKUP);
    }
    for enemy in &sim.enemies {
        draw_aabb(enemy.hitbox(), HITBOX_ENEMY);
        draw_line(enemy.left_limit, enemy.position.y, enemy.right_limit, enemy.position.y, 1.0, HITBOX_ENEMY);
    }
    draw_aabb(sim.finish.hitbox(), HITBOX_PICKUP);
    draw_aabb(sim.player.hitbox(), HITBOX_PLAYER);

    let p = &sim.player;
    let lines = [
        format!("pos    {:.1}, {:.1}", p.position.x, p.position.y),
        format!("vel    {:.2}, {:.2}", p.velocity.x, p.velocity.y),
        format!("state  {} {:?}", p.state.label(), p.facing),
        format!("ground {}", p.on_ground),
        format!("health {:.2}", p.health),
        format!("steps  {}", sim.steps()),
        format!("fps    {} (cap {})", get_fps(), fps_limit.label()),
        format!("missing sprites {}", sprites.missing().len()),
    ];

    let font_size = 16.0;
    let line_h = 18.0;
    let panel_w = 220.0;
    let panel_x = SCREEN_WIDTH - panel_w - 10.0;
    let panel_y = 10.0;
    draw_rectangle(panel_x, panel_y, panel_w, line_h * lines.len() as f32 + 8.0, DEBUG_PANEL_BG);
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, panel_x + 6.0, panel_y + 4.0 + line_h * (i as f32 + 1.0) - 4.0, font_size, WHITE);
    }
}

fn draw_aabb(r: Aabb, color: Color) {
    draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, color);
}

/// Draw text with its bounding box centred on (cx, cy)
fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (cx - dims.width / 2.0).round();
    let y = (cy - dims.height / 2.0 + dims.offset_y).round();
    draw_text(text, x, y, font_size, color);
}

/// Draw text with the top-left of its bounding box at `pos`
fn draw_text_top_left(text: &str, pos: Vec2, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, pos.x, (pos.y + dims.offset_y).round(), font_size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_fill_width() {
        assert_eq!(hp_fill_width(100.0), 200.0);
        assert_eq!(hp_fill_width(50.0), 100.0);
        assert_eq!(hp_fill_width(0.0), 0.0);
        // 33.3% of 200 truncates
        assert_eq!(hp_fill_width(33.3), 66.0);
    }

    #[test]
    fn test_hp_label_truncates() {
        assert_eq!(hp_label(99.95), "99 HP");
        assert_eq!(hp_label(0.0), "0 HP");
    }

    #[test]
    fn test_end_banner() {
        assert_eq!(end_banner(GameState::Win).map(|b| b.0), Some("YOU WIN!"));
        assert_eq!(end_banner(GameState::Lose).map(|b| b.0), Some("YOU LOSE"));
        assert!(end_banner(GameState::Playing).is_none());
        assert!(end_banner(GameState::Menu).is_none());
    }
}
