//! Rectangle type for collision box offsets.
//!
//! [`Rect`] stores a box relative to an entity origin. [`Rect::offset_by`]
//! moves it into world space for whatever collision code consumes it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units.
///
/// Used as a collision box relative to an entity origin. Negative sizes are
/// kept as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(with = "super::floatserde::scalar")]
    pub x: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub y: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub width: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Translate this offset box by an entity position, yielding world-space bounds.
    pub fn offset_by(&self, position: Vec2) -> Rect {
        Rect {
            x: position.x + self.x,
            y: position.y + self.y,
            width: self.width,
            height: self.height,
        }
    }
}
