//! ECS components for entities.
//!
//! Plain data attached to entities in a `bevy_ecs` world. The components do
//! not reference each other; any combination may live on one entity.
//!
//! Submodules overview:
//! - [`floatserde`] – JSON helpers for float fields that may be non-finite
//! - [`physics`] – platformer velocity, ground state and tuning values
//! - [`rect`] – rectangle used for collision box offsets
//! - [`sprite`] – draw origin and texture handle
//! - [`transform`] – position, rotation and integer bounding size

pub mod floatserde;
pub mod physics;
pub mod rect;
pub mod sprite;
pub mod transform;
