//! Game action definitions

/// Everything the player can ask the game to do.
///
/// Default bindings:
/// - MoveLeft:  Left arrow / A / D-pad left / left stick
/// - MoveRight: Right arrow / D / D-pad right / left stick
/// - Jump:      Up arrow / W / Space / A button
/// - Start:     Left mouse button / Start button (menu only)
/// - ToggleDebug: F3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Start,
    ToggleDebug,
}
