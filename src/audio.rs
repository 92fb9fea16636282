//! Background music
//!
//! One looping track, started when play begins. The app talks to an
//! `AudioSink` so tests can record what would have played.

use std::collections::HashMap;
use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

/// Directory where music tracks are stored
pub const MUSIC_DIR: &str = "assets/music";

pub trait AudioSink {
    /// Start `track` looping at `volume` (0.0 - 1.0), replacing whatever was playing.
    fn play_track(&mut self, track: &str, volume: f32);
}

pub fn track_path(track: &str) -> String {
    format!("{}/{}.ogg", MUSIC_DIR, track)
}

/// Plays preloaded macroquad sounds
#[derive(Default)]
pub struct MusicPlayer {
    tracks: HashMap<String, Sound>,
    current: Option<String>,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a track ahead of time. A missing file is logged and the track
    /// stays silent.
    pub async fn preload(&mut self, track: &str) {
        let path = track_path(track);
        match load_sound(&path).await {
            Ok(sound) => {
                tracing::info!(%path, "loaded music");
                self.tracks.insert(track.to_string(), sound);
            }
            Err(e) => {
                tracing::warn!(%path, error = ?e, "music missing, playing silence");
            }
        }
    }
}

impl AudioSink for MusicPlayer {
    fn play_track(&mut self, track: &str, volume: f32) {
        if let Some(playing) = self.current.take() {
            if let Some(sound) = self.tracks.get(&playing) {
                stop_sound(sound);
            }
        }
        let Some(sound) = self.tracks.get(track) else {
            tracing::debug!(track, "track not loaded, skipping");
            return;
        };
        play_sound(sound, PlaySoundParams { looped: true, volume: volume.clamp(0.0, 1.0) });
        self.current = Some(track.to_string());
    }
}
