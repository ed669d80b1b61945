//! Platformer and ECS component library.
//!
//! This module exposes the component types, resources, and scene persistence
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod resources;
pub mod scene;
