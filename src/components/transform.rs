use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space placement of an entity: position, rotation in radians and
/// integer bounding size.
///
/// Sizes are stored as given; zero and negative values are valid here.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    #[serde(with = "super::floatserde::vec2")]
    pub position: Vec2,
    #[serde(with = "super::floatserde::scalar")]
    pub rotation: f32,
    pub width: i32,
    pub height: i32,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }
}
