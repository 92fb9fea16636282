//! Sprite Animation
//!
//! Frames are identified by `SpriteKey`, a small copyable id resolved to a
//! texture once at load time (see `asset::SpriteLibrary`). Left-facing frames
//! are separate pre-flipped images rather than a runtime mirror.
//!
//! Animation advances once per simulation step by a fixed fractional speed,
//! not by wall-clock time. At a fixed step rate this reproduces the same frame
//! cadence every run.

/// Which character sheet a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
    Adventurer,
}

impl Character {
    fn file_prefix(&self) -> &'static str {
        match self {
            Character::Adventurer => "adventurer",
        }
    }
}

/// Logical movement state, shared by the player and the frame tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveState {
    #[default]
    Idle,
    Run,
    Jump,
}

impl MoveState {
    fn file_part(&self) -> &'static str {
        match self {
            MoveState::Idle => "idle",
            MoveState::Run => "run",
            MoveState::Jump => "jump",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoveState::Idle => "Idle",
            MoveState::Run => "Run",
            MoveState::Jump => "Jump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Opaque identifier for every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Frame {
        character: Character,
        action: MoveState,
        index: u8,
        flipped: bool,
    },
    Coin,
    Flag,
    Background,
}

impl SpriteKey {
    /// File stem under `assets/images/`, e.g. `adventurer-run-03_flip`.
    pub fn file_stem(&self) -> String {
        match self {
            SpriteKey::Frame { character, action, index, flipped } => format!(
                "{}-{}-{:02}{}",
                character.file_prefix(),
                action.file_part(),
                index,
                if *flipped { "_flip" } else { "" }
            ),
            SpriteKey::Coin => "coin".to_string(),
            SpriteKey::Flag => "flag".to_string(),
            SpriteKey::Background => "forest_bg".to_string(),
        }
    }
}

/// Ordered frames for one (character, action), in both facings.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSet {
    right: Vec<SpriteKey>,
    left: Vec<SpriteKey>,
}

impl AnimationSet {
    pub fn new(character: Character, action: MoveState, frame_count: u8) -> Self {
        let frames = |flipped: bool| {
            (0..frame_count)
                .map(|index| SpriteKey::Frame { character, action, index, flipped })
                .collect()
        };
        Self {
            right: frames(false),
            left: frames(true),
        }
    }

    pub fn frames(&self, facing: Facing) -> &[SpriteKey] {
        match facing {
            Facing::Right => &self.right,
            Facing::Left => &self.left,
        }
    }

    /// Every key in the set, both facings. Used to preload textures.
    pub fn keys(&self) -> impl Iterator<Item = SpriteKey> + '_ {
        self.right.iter().chain(self.left.iter()).copied()
    }
}

/// Fractional frame cursor shared by every animated entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub frame_index: f32,
    pub speed: f32,
}

impl AnimationState {
    pub fn new(speed: f32) -> Self {
        Self { frame_index: 0.0, speed }
    }

    /// Advance one step through a list of `frame_count` frames.
    /// Wraps hard to 0 once the cursor reaches the end; the fractional
    /// remainder is dropped.
    pub fn advance(&mut self, frame_count: usize) {
        self.frame_index += self.speed;
        if self.frame_index >= frame_count as f32 {
            self.frame_index = 0.0;
        }
    }

    /// Frame at the current cursor. Must be called after `advance` with the
    /// same list, which keeps the cursor in range.
    pub fn frame(&self, frames: &[SpriteKey]) -> Option<SpriteKey> {
        frames.get(self.frame_index as usize).copied()
    }

    /// Advance through `frames` and return the frame to show this step.
    pub fn step(&mut self, frames: &[SpriteKey]) -> Option<SpriteKey> {
        self.advance(frames.len());
        self.frame(frames)
    }
}
