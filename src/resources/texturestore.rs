//! Texture registry resource.
//!
//! Maps texture keys to texture descriptors. Components refer to textures
//! through a [`TextureHandle`] (the key) rather than owning the texture, so
//! every holder of the same handle sees the same entry, and updating the
//! entry here is observed by all of them.
//!
//! Pixel data is not kept here; [`TextureInfo`] only describes where the
//! image lives and its size.

use std::fmt;
use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key of a texture inside the [`TextureStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureHandle(String);

impl TextureHandle {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    /// An empty handle refers to no texture.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TextureHandle {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TextureHandle {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor of a registered texture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Image file location, relative to the working directory.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureInfo {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// Registry of textures by key.
#[derive(Resource, Debug, Default, Clone)]
pub struct TextureStore {
    map: FxHashMap<String, TextureInfo>,
}

impl TextureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Register (or replace) a texture and return its handle.
    pub fn insert(&mut self, key: impl Into<String>, info: TextureInfo) -> TextureHandle {
        let key = key.into();
        self.map.insert(key.clone(), info);
        TextureHandle(key)
    }

    /// Look up the texture a handle refers to.
    pub fn get(&self, handle: &TextureHandle) -> Option<&TextureInfo> {
        self.map.get(handle.key())
    }

    pub fn get_mut(&mut self, handle: &TextureHandle) -> Option<&mut TextureInfo> {
        self.map.get_mut(handle.key())
    }

    pub fn contains(&self, handle: &TextureHandle) -> bool {
        self.map.contains_key(handle.key())
    }

    /// Remove a texture. Handles still pointing at it resolve to `None` afterwards.
    pub fn remove(&mut self, handle: &TextureHandle) -> Option<TextureInfo> {
        self.map.remove(handle.key())
    }

    /// Remove all registered textures.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(key, info)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextureInfo)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}
