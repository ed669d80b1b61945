//! Platformer physics state and tuning for a single entity.
//!
//! The [`Physics`] component carries the current velocity and ground state of
//! an entity together with the tuning values a platformer integrator reads
//! every tick (drag, friction, gravity, jump and run parameters). The
//! integrator itself lives outside this crate; this component only stores
//! what it reads and writes.
//!
//! `is_moving_downwards` is derived from the vertical velocity on every call
//! and is never stored.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

pub const DEFAULT_AIR_DRAG: f32 = 0.75;
pub const DEFAULT_GROUND_FRICTION: f32 = 0.75;
pub const DEFAULT_GRAVITY: f32 = 700.0;
pub const DEFAULT_GRAVITY_MULTIPLIER: f32 = 1.0;
pub const DEFAULT_JUMP_STRENGTH: f32 = 300.0;
pub const DEFAULT_MAXIMUM_HORIZONTAL_SPEED: f32 = 120.0;
pub const DEFAULT_RUN_ACCELERATION: f32 = 0.1;

/// Kinematic state and tuning parameters for platformer movement.
///
/// # Fields
/// - `velocity` - Current linear velocity in world units per second
/// - `air_drag` - Damping factor applied while airborne
/// - `ground_friction` - Damping factor applied while grounded
/// - `gravity` - Base downward acceleration
/// - `gravity_multiplier` - Scalar applied on top of `gravity`
/// - `jump_strength` - Impulse applied on jump
/// - `maximum_horizontal_speed` - Horizontal speed clamp used by the integrator
/// - `run_acceleration` - Per-step horizontal acceleration scalar
/// - `is_on_ground` - Whether the entity rests on a collidable surface
/// - `collision_box_offset_bounds` - Collision box relative to the entity origin
///
/// # Example
/// ```
/// use glam::Vec2;
/// use platformkit::components::physics::Physics;
///
/// let mut body = Physics::new();
/// body.velocity = Vec2::new(0.0, 25.0);
/// assert!(body.is_moving_downwards());
/// ```
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    #[serde(with = "super::floatserde::vec2")]
    pub velocity: Vec2,
    #[serde(with = "super::floatserde::scalar")]
    pub air_drag: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub ground_friction: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub gravity: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub gravity_multiplier: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub jump_strength: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub maximum_horizontal_speed: f32,
    #[serde(with = "super::floatserde::scalar")]
    pub run_acceleration: f32,
    pub is_on_ground: bool,
    pub collision_box_offset_bounds: Rect,
}

impl Default for Physics {
    fn default() -> Self {
        Self::new()
    }
}

impl Physics {
    /// Create a Physics component at rest with the default tuning values.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            air_drag: DEFAULT_AIR_DRAG,
            ground_friction: DEFAULT_GROUND_FRICTION,
            gravity: DEFAULT_GRAVITY,
            gravity_multiplier: DEFAULT_GRAVITY_MULTIPLIER,
            jump_strength: DEFAULT_JUMP_STRENGTH,
            maximum_horizontal_speed: DEFAULT_MAXIMUM_HORIZONTAL_SPEED,
            run_acceleration: DEFAULT_RUN_ACCELERATION,
            is_on_ground: false,
            collision_box_offset_bounds: Rect::default(),
        }
    }

    /// Replace the collision box, keeping everything else.
    pub fn with_collision_box(mut self, bounds: Rect) -> Self {
        self.collision_box_offset_bounds = bounds;
        self
    }

    /// True when the vertical velocity points down (positive y).
    ///
    /// A vertical velocity of exactly zero is not moving downwards.
    pub fn is_moving_downwards(&self) -> bool {
        self.velocity.y > 0.0
    }

    /// Overwrite the current velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== DEFAULTS ====================

    #[test]
    fn test_physics_new_defaults() {
        let p = Physics::new();
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(approx_eq(p.air_drag, 0.75));
        assert!(approx_eq(p.ground_friction, 0.75));
        assert!(approx_eq(p.gravity, 700.0));
        assert!(approx_eq(p.gravity_multiplier, 1.0));
        assert!(approx_eq(p.jump_strength, 300.0));
        assert!(approx_eq(p.maximum_horizontal_speed, 120.0));
        assert!(approx_eq(p.run_acceleration, 0.1));
        assert!(!p.is_on_ground);
        assert_eq!(p.collision_box_offset_bounds, Rect::default());
    }

    #[test]
    fn test_physics_default_matches_new() {
        assert_eq!(Physics::default(), Physics::new());
    }

    // ==================== MOVING DOWNWARDS ====================

    #[test]
    fn test_moving_downwards_positive_y() {
        let mut p = Physics::new();
        p.velocity = Vec2::new(0.0, 0.001);
        assert!(p.is_moving_downwards());
    }

    #[test]
    fn test_moving_downwards_zero_y_is_false() {
        let mut p = Physics::new();
        p.velocity = Vec2::new(50.0, 0.0);
        assert!(!p.is_moving_downwards());
    }

    #[test]
    fn test_moving_downwards_negative_y_is_false() {
        let mut p = Physics::new();
        p.velocity = Vec2::new(0.0, -300.0);
        assert!(!p.is_moving_downwards());
    }

    #[test]
    fn test_moving_downwards_tracks_velocity_changes() {
        let mut p = Physics::new();
        for y in [-2.0_f32, -0.0, 0.0, 1e-9, 5.0, f32::NAN, f32::INFINITY] {
            p.set_velocity(Vec2::new(1.0, y));
            assert_eq!(p.is_moving_downwards(), y > 0.0, "y = {y}");
        }
    }

    // ==================== MUTATION ====================

    #[test]
    fn test_field_writes_are_visible() {
        let mut p = Physics::new();
        p.gravity_multiplier = 2.5;
        p.is_on_ground = true;
        p.collision_box_offset_bounds.width = 14.0;
        assert!(approx_eq(p.gravity_multiplier, 2.5));
        assert!(p.is_on_ground);
        assert!(approx_eq(p.collision_box_offset_bounds.width, 14.0));
    }

    #[test]
    fn test_with_collision_box() {
        let bounds = Rect::new(2.0, 1.0, 12.0, 15.0);
        let p = Physics::new().with_collision_box(bounds);
        assert_eq!(p.collision_box_offset_bounds, bounds);
        assert!(approx_eq(p.jump_strength, DEFAULT_JUMP_STRENGTH));
    }

    // ==================== SERDE ====================

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let p: Physics = serde_json::from_str(r#"{ "jump_strength": 420.0 }"#).unwrap();
        assert!(approx_eq(p.jump_strength, 420.0));
        assert!(approx_eq(p.gravity, DEFAULT_GRAVITY));
        assert!(!p.is_on_ground);
    }

    #[test]
    fn test_json_round_trip_default() {
        let p = Physics::default();
        let text = serde_json::to_string(&p).unwrap();
        let back: Physics = serde_json::from_str(&text).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_json_round_trip_non_finite() {
        let mut p = Physics::new();
        p.velocity = Vec2::new(0.0, f32::INFINITY);
        p.gravity = f32::NEG_INFINITY;
        p.air_drag = f32::NAN;
        let text = serde_json::to_string(&p).unwrap();
        let back: Physics = serde_json::from_str(&text).unwrap();
        assert_eq!(back.velocity, p.velocity);
        assert_eq!(back.gravity, f32::NEG_INFINITY);
        assert!(back.air_drag.is_nan());
        assert!(back.is_moving_downwards());
    }
}
