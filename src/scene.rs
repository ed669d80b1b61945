//! JSON scene files.
//!
//! A [`Scene`] lists the textures to register and the entities to spawn, each
//! with any combination of [`Transform`], [`Sprite`] and [`Physics`]. Physics
//! entries are partial: present fields override the tuning template from the
//! [`PhysicsConfig`] resource (or the built-in defaults when there is none).
//!
//! ```json
//! {
//!   "textures": { "player": { "path": "assets/player.png", "width": 16, "height": 16 } },
//!   "entities": [
//!     { "transform": { "position": [0, 0], "width": 16, "height": 16 },
//!       "sprite": { "origin": [8, 8], "texture": "player" },
//!       "physics": { "jump_strength": 350 } }
//!   ]
//! }
//! ```
//!
//! [`Scene::capture`] goes the other way and snapshots a world, writing every
//! physics field so the result does not depend on the loader's template.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::components::physics::Physics;
use crate::components::rect::Rect;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::resources::physicsconfig::PhysicsConfig;
use crate::resources::texturestore::{TextureInfo, TextureStore};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Failed to access scene file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-field overrides for a [`Physics`] component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsOverrides {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_vec2"
    )]
    pub velocity: Option<Vec2>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub air_drag: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub ground_friction: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub gravity: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub gravity_multiplier: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub jump_strength: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub maximum_horizontal_speed: Option<f32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::components::floatserde::option_scalar"
    )]
    pub run_acceleration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_on_ground: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_box_offset_bounds: Option<Rect>,
}

impl PhysicsOverrides {
    /// Overrides that set every field to the values in `physics`.
    pub fn from_physics(physics: &Physics) -> Self {
        Self {
            velocity: Some(physics.velocity),
            air_drag: Some(physics.air_drag),
            ground_friction: Some(physics.ground_friction),
            gravity: Some(physics.gravity),
            gravity_multiplier: Some(physics.gravity_multiplier),
            jump_strength: Some(physics.jump_strength),
            maximum_horizontal_speed: Some(physics.maximum_horizontal_speed),
            run_acceleration: Some(physics.run_acceleration),
            is_on_ground: Some(physics.is_on_ground),
            collision_box_offset_bounds: Some(physics.collision_box_offset_bounds),
        }
    }

    /// Apply the present fields on top of `template`.
    pub fn apply_to(&self, template: Physics) -> Physics {
        Physics {
            velocity: self.velocity.unwrap_or(template.velocity),
            air_drag: self.air_drag.unwrap_or(template.air_drag),
            ground_friction: self.ground_friction.unwrap_or(template.ground_friction),
            gravity: self.gravity.unwrap_or(template.gravity),
            gravity_multiplier: self
                .gravity_multiplier
                .unwrap_or(template.gravity_multiplier),
            jump_strength: self.jump_strength.unwrap_or(template.jump_strength),
            maximum_horizontal_speed: self
                .maximum_horizontal_speed
                .unwrap_or(template.maximum_horizontal_speed),
            run_acceleration: self.run_acceleration.unwrap_or(template.run_acceleration),
            is_on_ground: self.is_on_ground.unwrap_or(template.is_on_ground),
            collision_box_offset_bounds: self
                .collision_box_offset_bounds
                .unwrap_or(template.collision_box_offset_bounds),
        }
    }
}

/// One entity entry of a scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<PhysicsOverrides>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub textures: BTreeMap<String, TextureInfo>,
    pub entities: Vec<SceneEntity>,
}

impl Scene {
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json_str(&text)?;
        info!(
            "Loaded scene {:?}: {} textures, {} entities",
            path,
            scene.textures.len(),
            scene.entities.len()
        );
        Ok(scene)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let path = path.as_ref();
        let text = self.to_json_string()?;
        std::fs::write(path, text).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved scene to {:?}", path);
        Ok(())
    }

    /// Register textures and spawn entities into `world`.
    ///
    /// Returns the spawned entities in scene order.
    pub fn spawn_into(&self, world: &mut World) -> Vec<Entity> {
        {
            let mut store = world.get_resource_or_insert_with(TextureStore::new);
            for (key, info) in &self.textures {
                store.insert(key.clone(), info.clone());
            }
        }

        let template = world
            .get_resource::<PhysicsConfig>()
            .map(PhysicsConfig::template)
            .unwrap_or_default();

        let mut spawned = Vec::with_capacity(self.entities.len());
        for (index, entry) in self.entities.iter().enumerate() {
            if let Some(sprite) = &entry.sprite {
                let known = world.resource::<TextureStore>().contains(&sprite.texture);
                if !known {
                    warn!(
                        "Scene entity {} uses unregistered texture '{}'",
                        index, sprite.texture
                    );
                }
            }

            let mut entity = world.spawn_empty();
            if let Some(transform) = entry.transform {
                entity.insert(transform);
            }
            if let Some(sprite) = &entry.sprite {
                entity.insert(sprite.clone());
            }
            if let Some(overrides) = &entry.physics {
                entity.insert(overrides.apply_to(template));
            }
            let id = entity.id();
            debug!("Spawned scene entity {} as {:?}", index, id);
            spawned.push(id);
        }
        spawned
    }

    /// Snapshot every entity holding a [`Transform`], [`Sprite`] or [`Physics`],
    /// along with the registered textures.
    pub fn capture(world: &mut World) -> Self {
        let textures = world
            .get_resource::<TextureStore>()
            .map(|store| {
                store
                    .iter()
                    .map(|(key, info)| (key.to_string(), info.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let mut query = world.query_filtered::<
            (Entity, Option<&Transform>, Option<&Sprite>, Option<&Physics>),
            Or<(With<Transform>, With<Sprite>, With<Physics>)>,
        >();
        let mut rows: Vec<(Entity, SceneEntity)> = query
            .iter(world)
            .map(|(entity, transform, sprite, physics)| {
                (
                    entity,
                    SceneEntity {
                        transform: transform.copied(),
                        sprite: sprite.cloned(),
                        physics: physics.map(PhysicsOverrides::from_physics),
                    },
                )
            })
            .collect();
        // Entity's Ord does not follow allocation order; live entities have unique indices.
        rows.sort_by_key(|(entity, _)| entity.index());

        Scene {
            textures,
            entities: rows.into_iter().map(|(_, entry)| entry).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_template() {
        let mut template = Physics::new();
        template.gravity = 900.0;
        template.velocity = Vec2::new(3.0, -1.0);
        assert_eq!(PhysicsOverrides::default().apply_to(template), template);
    }

    #[test]
    fn test_overrides_replace_only_present_fields() {
        let overrides = PhysicsOverrides {
            jump_strength: Some(450.0),
            is_on_ground: Some(true),
            ..Default::default()
        };
        let p = overrides.apply_to(Physics::new());
        assert_eq!(p.jump_strength, 450.0);
        assert!(p.is_on_ground);
        assert_eq!(p.gravity, Physics::new().gravity);
    }

    #[test]
    fn test_full_overrides_ignore_template() {
        let mut original = Physics::new();
        original.air_drag = 0.2;
        original.collision_box_offset_bounds = Rect::new(1.0, 2.0, 3.0, 4.0);
        let overrides = PhysicsOverrides::from_physics(&original);

        let mut other = Physics::new();
        other.air_drag = 9.0;
        other.gravity = 1.0;
        assert_eq!(overrides.apply_to(other), original);
    }

    #[test]
    fn test_parse_partial_scene() {
        let scene = Scene::from_json_str(
            r#"{ "entities": [ { "transform": { "position": [4.0, 5.0] } }, {} ] }"#,
        )
        .unwrap();
        assert!(scene.textures.is_empty());
        assert_eq!(scene.entities.len(), 2);
        let t = scene.entities[0].transform.unwrap();
        assert_eq!(t.position, Vec2::new(4.0, 5.0));
        assert_eq!(t.width, 0);
        assert_eq!(scene.entities[1], SceneEntity::default());
    }

    #[test]
    fn test_parse_error() {
        let err = Scene::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Scene::load("./no/such/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_empty_overrides_serialize_to_empty_object() {
        let text = serde_json::to_string(&PhysicsOverrides::default()).unwrap();
        assert_eq!(text, "{}");
    }
}
