//! Application state
//!
//! Glue between macroquad's frame loop and the fixed-step simulation:
//! polls input, runs however many steps the accumulator allows, reacts to
//! simulation events, and draws.

use crate::asset::SpriteLibrary;
use crate::audio::{AudioSink, MusicPlayer};
use crate::game::renderer::draw_frame;
use crate::game::{FixedStep, FrameClock, GameState, Level, Simulation};
use crate::input::{Action, InputState};
use crate::settings::{GameSettings, MusicSettings};

pub struct App {
    pub settings: GameSettings,
    pub sim: Simulation,
    pub input: InputState,
    pub sprites: SpriteLibrary,
    pub music: MusicPlayer,
    pub timestep: FixedStep,
    clock: FrameClock,
    pub show_debug: bool,
}

impl App {
    /// Build the level and load every sprite and the music track.
    pub async fn new(settings: GameSettings) -> Self {
        let sim = Simulation::new(Level::forest(), settings.player);
        let sprites = SpriteLibrary::load(&sim.sprite_keys()).await;

        let mut music = MusicPlayer::new();
        music.preload(&settings.music.track).await;

        Self {
            timestep: FixedStep::new(settings.step_rate),
            show_debug: settings.show_debug_overlay,
            settings,
            sim,
            input: InputState::new(),
            sprites,
            music,
            clock: FrameClock,
        }
    }

    /// Advance by one rendered frame's worth of time.
    pub fn update(&mut self, frame_time: f64) {
        self.input.poll();

        if self.input.action_pressed(Action::ToggleDebug) {
            self.show_debug = !self.show_debug;
            tracing::debug!(show = self.show_debug, "debug overlay toggled");
        }

        if self.input.start_pressed() {
            self.sim.press_start();
        }

        let steps = self.timestep.advance(frame_time);
        let controls = self.input.controls();
        for _ in 0..steps {
            self.sim.step(controls, &self.clock);
        }

        handle_events(&mut self.sim, &self.settings.music, &mut self.music);
    }

    pub fn draw(&self) {
        let debug = self.show_debug.then_some(self.settings.fps_limit);
        draw_frame(&self.sim, &self.sprites, debug);
    }
}

/// Drain this frame's simulation events: log them and start the music when
/// play begins.
pub fn handle_events(sim: &mut Simulation, music: &MusicSettings, audio: &mut dyn AudioSink) {
    for hit in sim.events.damage.drain() {
        tracing::debug!(
            enemy = hit.enemy,
            amount = hit.amount,
            health = hit.health_after,
            "player hit"
        );
    }

    for pickup in sim.events.coin_collected.drain() {
        tracing::debug!(coin = pickup.coin, score = pickup.score_after, "coin collected");
    }

    for change in sim.events.state_changed.drain() {
        tracing::info!(from = change.from.label(), to = change.to.label(), "game state changed");
        match change.to {
            GameState::Playing => audio.play_track(&music.track, music.volume),
            to if to.is_terminal() => {
                tracing::info!(score = sim.player.score, "game over");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingSink;
    use crate::game::clock::ManualClock;
    use crate::game::PlayerInput;

    #[test]
    fn test_music_starts_when_play_begins() {
        let mut sim = Simulation::new(Level::empty(), Default::default());
        let music = MusicSettings::default();
        let mut sink = RecordingSink::default();

        handle_events(&mut sim, &music, &mut sink);
        assert!(sink.played.is_empty());

        sim.press_start();
        handle_events(&mut sim, &music, &mut sink);
        assert_eq!(sink.played, vec![("adventure".to_string(), 0.6)]);
        assert!(sim.events.state_changed.is_empty());

        // Steps that change nothing don't restart the track
        let clock = ManualClock::new(0.0);
        sim.step(PlayerInput::default(), &clock);
        handle_events(&mut sim, &music, &mut sink);
        assert_eq!(sink.played.len(), 1);
    }

    #[test]
    fn test_events_are_drained() {
        let mut sim = Simulation::new(Level::forest(), Default::default());
        sim.press_start();
        let clock = ManualClock::new(0.0);
        for _ in 0..200 {
            sim.step(PlayerInput { right: true, ..Default::default() }, &clock);
        }
        handle_events(&mut sim, &MusicSettings::default(), &mut RecordingSink::default());
        assert!(sim.events.damage.is_empty());
        assert!(sim.events.coin_collected.is_empty());
        assert!(sim.events.state_changed.is_empty());
    }
}
