//! Unified gamepad support for native and WASM
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses Web Gamepad API bindings provided by the JS plugin in web/index.html

use macroquad::prelude::Vec2;

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const B: u32 = 1;           // ActionRight / East
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

// ============================================================================
// WASM Implementation (Web Gamepad API)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    // FFI bindings to JavaScript functions in web/index.html
    extern "C" {
        fn forest_gamepad_has_gamepad() -> i32;
        fn forest_gamepad_get_button_mask() -> u32;
        fn forest_gamepad_get_left_stick_x() -> i32;
        fn forest_gamepad_get_left_stick_y() -> i32;
    }

    pub struct Gamepad {
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            Self { deadzone: 0.15, buttons: 0, last_buttons: 0 }
        }

        /// Snapshot button state. Call once per frame.
        pub fn poll(&mut self) {
            self.last_buttons = self.buttons;
            self.buttons = unsafe { forest_gamepad_get_button_mask() };
        }

        pub fn has_gamepad(&self) -> bool {
            unsafe { forest_gamepad_has_gamepad() != 0 }
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            super::just_pressed(self.buttons, self.last_buttons, button)
        }

        pub fn left_stick(&self) -> Vec2 {
            let x = unsafe { forest_gamepad_get_left_stick_x() } as f32 / 10000.0;
            let y = -(unsafe { forest_gamepad_get_left_stick_y() } as f32 / 10000.0); // Web API is down-positive
            super::apply_deadzone(x, y, self.deadzone)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None if the platform gamepad backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    tracing::warn!(error = %e, "gamepad support unavailable");
                    None
                }
            };
            Self { gilrs, deadzone: 0.15, buttons: 0, last_buttons: 0 }
        }

        /// Drain gilrs events and snapshot button state. Call once per frame.
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while let Some(event) = gilrs.next_event() {
                    if let gilrs::EventType::Connected = event.event {
                        tracing::info!(id = ?event.id, "gamepad connected");
                    }
                }
            }
            self.last_buttons = self.buttons;
            self.buttons = self.button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.active_gamepad().is_some()
        }

        fn active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn button_mask(&self) -> u32 {
            let Some(gp) = self.active_gamepad() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << button::B; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadDown) { mask |= 1 << button::DPAD_DOWN; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            super::just_pressed(self.buttons, self.last_buttons, button)
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = gp.value(Axis::LeftStickY); // gilrs is already up-positive
            super::apply_deadzone(x, y, self.deadzone)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Down this frame, up last frame
fn just_pressed(buttons: u32, last_buttons: u32, button: u32) -> bool {
    let bit = 1 << button;
    (buttons & bit) != 0 && (last_buttons & bit) == 0
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_swallows_drift() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_just_pressed_edge() {
        let a = 1 << button::A;
        assert!(just_pressed(a, 0, button::A));
        assert!(!just_pressed(a, a, button::A));
        assert!(!just_pressed(0, a, button::A));
    }
}
