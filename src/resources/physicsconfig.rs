//! Physics tuning configuration resource.
//!
//! Holds the tuning values new [`Physics`] components start from, loaded from
//! an INI file. Defaults match [`Physics::new`] so a missing file changes
//! nothing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! air_drag = 0.75
//! ground_friction = 0.75
//! gravity = 700
//! gravity_multiplier = 1
//! jump_strength = 300
//! maximum_horizontal_speed = 120
//! run_acceleration = 0.1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::physics::{
    DEFAULT_AIR_DRAG, DEFAULT_GRAVITY, DEFAULT_GRAVITY_MULTIPLIER, DEFAULT_GROUND_FRICTION,
    DEFAULT_JUMP_STRENGTH, DEFAULT_MAXIMUM_HORIZONTAL_SPEED, DEFAULT_RUN_ACCELERATION, Physics,
};

const DEFAULT_CONFIG_PATH: &str = "./physics.ini";
const SECTION: &str = "physics";

/// Physics tuning resource.
///
/// Systems spawning entities take [`PhysicsConfig::template`] as the starting
/// point for each new [`Physics`] component.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub air_drag: f32,
    pub ground_friction: f32,
    pub gravity: f32,
    pub gravity_multiplier: f32,
    pub jump_strength: f32,
    pub maximum_horizontal_speed: f32,
    pub run_acceleration: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsConfig {
    /// Create a configuration with the built-in tuning defaults.
    pub fn new() -> Self {
        Self {
            air_drag: DEFAULT_AIR_DRAG,
            ground_friction: DEFAULT_GROUND_FRICTION,
            gravity: DEFAULT_GRAVITY,
            gravity_multiplier: DEFAULT_GRAVITY_MULTIPLIER,
            jump_strength: DEFAULT_JUMP_STRENGTH,
            maximum_horizontal_speed: DEFAULT_MAXIMUM_HORIZONTAL_SPEED,
            run_acceleration: DEFAULT_RUN_ACCELERATION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // Parse everything first so a bad value leaves self untouched.
        let read = |key: &str| -> Result<Option<f32>, String> {
            config
                .getfloat(SECTION, key)
                .map(|v| v.map(|f| f as f32))
                .map_err(|e| format!("Invalid value for [{}] {}: {}", SECTION, key, e))
        };
        let air_drag = read("air_drag")?;
        let ground_friction = read("ground_friction")?;
        let gravity = read("gravity")?;
        let gravity_multiplier = read("gravity_multiplier")?;
        let jump_strength = read("jump_strength")?;
        let maximum_horizontal_speed = read("maximum_horizontal_speed")?;
        let run_acceleration = read("run_acceleration")?;

        if let Some(v) = air_drag {
            self.air_drag = v;
        }
        if let Some(v) = ground_friction {
            self.ground_friction = v;
        }
        if let Some(v) = gravity {
            self.gravity = v;
        }
        if let Some(v) = gravity_multiplier {
            self.gravity_multiplier = v;
        }
        if let Some(v) = jump_strength {
            self.jump_strength = v;
        }
        if let Some(v) = maximum_horizontal_speed {
            self.maximum_horizontal_speed = v;
        }
        if let Some(v) = run_acceleration {
            self.run_acceleration = v;
        }

        info!(
            "Loaded physics config: air_drag={}, ground_friction={}, gravity={}x{}, jump={}, max_hspeed={}, run_accel={}",
            self.air_drag,
            self.ground_friction,
            self.gravity,
            self.gravity_multiplier,
            self.jump_strength,
            self.maximum_horizontal_speed,
            self.run_acceleration
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        config.set(SECTION, "air_drag", Some(self.air_drag.to_string()));
        config.set(SECTION, "ground_friction", Some(self.ground_friction.to_string()));
        config.set(SECTION, "gravity", Some(self.gravity.to_string()));
        config.set(
            SECTION,
            "gravity_multiplier",
            Some(self.gravity_multiplier.to_string()),
        );
        config.set(SECTION, "jump_strength", Some(self.jump_strength.to_string()));
        config.set(
            SECTION,
            "maximum_horizontal_speed",
            Some(self.maximum_horizontal_speed.to_string()),
        );
        config.set(
            SECTION,
            "run_acceleration",
            Some(self.run_acceleration.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved physics config to {:?}", self.config_path);

        Ok(())
    }

    /// A [`Physics`] at rest carrying these tuning values.
    pub fn template(&self) -> Physics {
        Physics {
            air_drag: self.air_drag,
            ground_friction: self.ground_friction,
            gravity: self.gravity,
            gravity_multiplier: self.gravity_multiplier,
            jump_strength: self.jump_strength,
            maximum_horizontal_speed: self.maximum_horizontal_speed,
            run_acceleration: self.run_acceleration,
            ..Physics::new()
        }
    }
}
