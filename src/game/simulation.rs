//! Simulation Step
//!
//! Owns every entity for the level's lifetime and runs one step in a fixed
//! order: player, enemies (list order), coins (list order), finish. Entities
//! only see each other through hitbox queries made inside that order.
//!
//! State changes flow back as return values; the simulation applies them
//! through [`GameState::transition`] and records them as events. Once a
//! terminal state is applied, later proposals in the same step are ignored.

use std::collections::HashSet;
use super::animation::SpriteKey;
use super::clock::Clock;
use super::enemy::Enemy;
use super::event::{CoinEvent, DamageEvent, Events, StateChangeEvent};
use super::level::Level;
use super::player::{Player, PlayerInput, PlayerTuning};
use super::state::GameState;
use super::world::{Coin, DrawIntent, Finish, Platform};

pub struct Simulation {
    state: GameState,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub finish: Finish,
    pub floor_y: f32,

    /// Event queues, filled by `step` and drained by the app
    pub events: Events,

    /// Steps run while playing
    steps: u64,
}

impl Simulation {
    pub fn new(level: Level, tuning: PlayerTuning) -> Self {
        Self {
            state: GameState::Menu,
            player: Player::new(level.player_start, tuning),
            platforms: level.platforms,
            enemies: level.enemies,
            coins: level.coins,
            finish: level.finish,
            floor_y: level.floor_y,
            events: Events::new(),
            steps: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Pointer press. Leaves the menu; ignored in every other state.
    /// Returns true if the game started.
    pub fn press_start(&mut self) -> bool {
        self.apply_transition(GameState::Playing)
    }

    /// Run one simulation step. Does nothing unless playing.
    pub fn step(&mut self, input: PlayerInput, clock: &dyn Clock) {
        if self.state != GameState::Playing {
            return;
        }
        self.steps += 1;

        self.player.update(input, &self.platforms, self.floor_y, clock.now());

        for index in 0..self.enemies.len() {
            let now = clock.now();
            let Some(hit) = self.enemies[index].update(&mut self.player, now) else {
                continue;
            };
            self.events.damage.send(DamageEvent {
                enemy: index,
                amount: hit.damage,
                health_after: hit.health_after,
                at: now,
            });
            if let Some(next) = hit.proposed_state() {
                self.apply_transition(next);
            }
        }

        for index in 0..self.coins.len() {
            if self.coins[index].update(&mut self.player) {
                self.events.coin_collected.send(CoinEvent {
                    coin: index,
                    position: self.coins[index].position(),
                    score_after: self.player.score,
                });
            }
        }

        if let Some(next) = self.finish.update(&self.player) {
            self.apply_transition(next);
        }
    }

    fn apply_transition(&mut self, next: GameState) -> bool {
        let from = self.state;
        if self.state.transition(next).is_none() {
            return false;
        }
        self.events.state_changed.send(StateChangeEvent { from, to: next });
        true
    }

    /// Sprites to draw this frame, back to front.
    pub fn draw_intents(&self) -> Vec<DrawIntent> {
        let mut intents = Vec::with_capacity(self.coins.len() + self.enemies.len() + 2);
        intents.extend(self.coins.iter().filter_map(Coin::draw_intent));
        intents.extend(self.enemies.iter().map(Enemy::draw_intent));
        intents.push(self.finish.draw_intent());
        intents.push(self.player.draw_intent());
        intents
    }

    /// Every sprite this level can ask for, deduplicated. Used to preload.
    pub fn sprite_keys(&self) -> Vec<SpriteKey> {
        let anims = self.player.animations();
        let mut keys: Vec<SpriteKey> = [&anims.idle, &anims.run, &anims.jump]
            .into_iter()
            .flat_map(|set| set.keys())
            .chain(self.enemies.iter().flat_map(|e| e.frames().keys()))
            .chain([SpriteKey::Coin, SpriteKey::Flag, SpriteKey::Background])
            .collect();

        let mut seen = HashSet::new();
        keys.retain(|key| seen.insert(*key));
        keys
    }
}
