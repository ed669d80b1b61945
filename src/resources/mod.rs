//! ECS resources made available to systems.
//!
//! Overview
//! - `physicsconfig` – physics tuning defaults loaded from an INI file
//! - `texturestore` – registered textures keyed by string handles
pub mod physicsconfig;
pub mod texturestore;
