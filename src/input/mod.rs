//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both keyboard/mouse
//! and gamepad controllers.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses custom Web Gamepad API bindings

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
