//! Game settings
//!
//! Uses RON (Rusty Object Notation) for a human-readable settings file.
//! Every section has defaults, so a file only needs the fields it changes:
//!
//! ```ron
//! (
//!     fps_limit: Fps30,
//!     music: (volume: 0.3),
//! )
//! ```
//!
//! The level layout is not configurable here; it is built into the game.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::game::PlayerTuning;

/// Default settings file, looked up in the working directory
pub const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS
    Fps30,
    /// 60 FPS (matches the default step rate)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Window options. The size is fixed by the level layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub high_dpi: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Forest Dash".to_string(),
            high_dpi: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicSettings {
    /// Track name; resolved to `assets/music/<track>.ogg`
    pub track: String,
    /// 0.0 - 1.0
    pub volume: f32,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            track: "adventure".to_string(),
            volume: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub window: WindowSettings,
    pub fps_limit: FpsLimit,
    /// Simulation steps per second. Movement is tuned per step, so changing
    /// this changes game speed.
    pub step_rate: u32,
    pub music: MusicSettings,
    pub player: PlayerTuning,
    /// Start with hitboxes and player stats drawn (F3 toggles)
    pub show_debug_overlay: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            fps_limit: FpsLimit::default(),
            step_rate: 60,
            music: MusicSettings::default(),
            player: PlayerTuning::default(),
            show_debug_overlay: false,
        }
    }
}

impl GameSettings {
    /// Parse settings from a RON string and validate them.
    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Load settings from `path` if it exists. A missing file means defaults;
    /// a broken one is logged and also falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.step_rate == 0 {
            return invalid("step_rate must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.music.volume) {
            return invalid(format!("music volume {} outside 0.0-1.0", self.music.volume));
        }
        let p = &self.player;
        if !(p.speed > 0.0) {
            return invalid(format!("player speed must be positive ({})", p.speed));
        }
        if !(p.gravity > 0.0) {
            return invalid(format!("gravity must be positive ({})", p.gravity));
        }
        if !(p.jump_force < 0.0) {
            return invalid(format!("jump_force must be negative (upward), got {}", p.jump_force));
        }
        if !(p.anim_speed > 0.0) {
            return invalid(format!("anim_speed must be positive ({})", p.anim_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.player.jump_force, -12.0);
        assert_eq!(settings.music.volume, 0.6);
        assert_eq!(settings.fps_limit.frame_time(), Some(1.0 / 60.0));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = GameSettings::from_ron("(fps_limit: Fps30, music: (volume: 0.25))").unwrap();
        assert_eq!(settings.fps_limit, FpsLimit::Fps30);
        assert_eq!(settings.music.volume, 0.25);
        assert_eq!(settings.music.track, "adventure");
        assert_eq!(settings.window, WindowSettings::default());
        assert_eq!(settings.player, PlayerTuning::default());
    }

    #[test]
    fn test_player_tuning_override() {
        let settings = GameSettings::from_ron("(player: (speed: 6.0, jump_force: -14.0))").unwrap();
        assert_eq!(settings.player.speed, 6.0);
        assert_eq!(settings.player.jump_force, -14.0);
        assert_eq!(settings.player.gravity, 0.5);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameSettings::from_ron("(step_rate: 0)"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            GameSettings::from_ron("(music: (volume: 1.5))"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            GameSettings::from_ron("(player: (jump_force: 12.0))"),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_fps_limit_labels() {
        assert_eq!(FpsLimit::Fps30.label(), "30");
        assert_eq!(FpsLimit::Fps60.label(), "60");
        assert_eq!(FpsLimit::Unlocked.label(), "Unlocked");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            GameSettings::from_ron("(fps_limit: Fps144)"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(show_debug_overlay: true, step_rate: 30)").unwrap();

        let settings = GameSettings::load(file.path()).unwrap();
        assert!(settings.show_debug_overlay);
        assert_eq!(settings.step_rate, 30);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.ron");
        assert_eq!(GameSettings::load_or_default(&missing), GameSettings::default());

        let broken = dir.path().join("broken.ron");
        fs::write(&broken, "(this is not ron").unwrap();
        assert_eq!(GameSettings::load_or_default(&broken), GameSettings::default());

        assert!(matches!(GameSettings::load(&missing), Err(SettingsError::Io(_))));
    }
}
