//! Input state management
//!
//! Polls keyboard and mouse (macroquad) and gamepad input, combining them
//! into a unified action-based API.

use macroquad::prelude::*;
use crate::game::PlayerInput;
use super::{Action, Gamepad, button};

/// Stick deflection past which the left stick counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Held movement controls for one simulation step
    pub fn controls(&self) -> PlayerInput {
        PlayerInput {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            up: self.action_down(Action::Jump),
        }
    }

    /// Left mouse click or gamepad Start, edge-triggered
    pub fn start_pressed(&self) -> bool {
        self.action_pressed(Action::Start)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Jump => {
                is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) || is_key_down(KeyCode::Space)
            }
            Action::Start => is_mouse_button_down(MouseButton::Left),
            Action::ToggleDebug => is_key_down(KeyCode::F3),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Start => is_mouse_button_pressed(MouseButton::Left),
            Action::ToggleDebug => is_key_pressed(KeyCode::F3),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        let stick_x = self.gamepad.left_stick().x;

        match action {
            Action::MoveLeft => {
                self.gamepad.is_button_down(button::DPAD_LEFT) || stick_x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.is_button_down(button::DPAD_RIGHT) || stick_x > STICK_THRESHOLD
            }
            Action::Jump => self.gamepad.is_button_down(button::A),
            Action::Start => self.gamepad.is_button_down(button::START),
            Action::ToggleDebug => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Start => self.gamepad.is_button_pressed(button::START),
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            _ => false,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
