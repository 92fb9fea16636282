//! Sprite Library - loading and caching of sprite textures
//!
//! Textures are loaded once, up front, keyed by `SpriteKey`. Drawing code
//! looks them up by key and falls back to a placeholder when absent.

use std::collections::HashMap;
use macroquad::prelude::*;
use crate::game::animation::SpriteKey;

/// Directory where sprite images are stored
pub const IMAGES_DIR: &str = "assets/images";

/// Loaded sprite textures
#[derive(Default)]
pub struct SpriteLibrary {
    textures: HashMap<SpriteKey, Texture2D>,
    /// Keys that failed to load, kept so the debug overlay can report them
    missing: Vec<SpriteKey>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path to the image file for a sprite
    pub fn path_for(key: SpriteKey) -> String {
        format!("{}/{}.png", IMAGES_DIR, key.file_stem())
    }

    /// Load every key. Works on both native and WASM (macroquad fetches
    /// over HTTP in the browser).
    pub async fn load(keys: &[SpriteKey]) -> Self {
        let mut library = Self::new();
        for &key in keys {
            let path = Self::path_for(key);
            match load_texture(&path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    library.insert(key, texture);
                }
                Err(e) => {
                    tracing::warn!(%path, error = %e, "sprite missing, using placeholder");
                    library.missing.push(key);
                }
            }
        }
        tracing::info!(
            loaded = library.len(),
            missing = library.missing.len(),
            "sprites loaded"
        );
        library
    }

    pub fn insert(&mut self, key: SpriteKey, texture: Texture2D) {
        self.textures.insert(key, texture);
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn missing(&self) -> &[SpriteKey] {
        &self.missing
    }
}
