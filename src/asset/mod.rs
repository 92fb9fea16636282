//! Image and music assets
//!
//! Everything the game draws or plays lives under `assets/`:
//!
//! ```text
//! assets/
//! ├── images/    # <sprite>.png, one file per frame, pre-flipped *_flip variants
//! └── music/     # <track>.ogg
//! ```
//!
//! Missing files are never fatal. A missing sprite is drawn as a flat
//! placeholder and missing music is silence.

mod library;

pub use library::SpriteLibrary;
