use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::resources::texturestore::TextureHandle;

/// Sprite is identified by a texture handle into the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement/rotation when rendering.
#[derive(Component, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprite {
    #[serde(with = "super::floatserde::vec2")]
    pub origin: Vec2,
    pub texture: TextureHandle,
}

impl Sprite {
    pub fn new(texture: impl Into<TextureHandle>) -> Self {
        Self {
            origin: Vec2::ZERO,
            texture: texture.into(),
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }
}
