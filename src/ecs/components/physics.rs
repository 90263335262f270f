//! Physics components for ECS entities.

use glam::Vec2;

use crate::physics::polygon::Polygon;

/// Collision shape and per-tick contact state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: Polygon,
    /// Fraction of reflected velocity kept after a bounce. Not clamped.
    pub restitution: f32,
    /// If true, contacts are detected and flagged but never reflected.
    pub is_sensor: bool,
    /// Set by the collision scan, cleared by a grid-transit abort.
    pub is_colliding: bool,
    /// Outward normal of the body this entity most recently hit, pointing
    /// toward this entity.
    pub last_normal: Vec2,
    /// Number of colliding pairs this entity took part in during the last scan.
    pub contact_count: u32,
}

impl Collider {
    pub fn new(shape: Polygon, restitution: f32) -> Self {
        Self {
            shape,
            restitution,
            is_sensor: false,
            is_colliding: false,
            last_normal: Vec2::ZERO,
            contact_count: 0,
        }
    }

    /// A collider that reports contacts without taking part in the response.
    pub fn sensor(shape: Polygon) -> Self {
        Self {
            is_sensor: true,
            ..Self::new(shape, 0.0)
        }
    }
}

/// Continuously moving body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicBody {
    /// World units per millisecond.
    pub velocity: Vec2,
    /// Reserved; not integrated.
    pub acceleration: Vec2,
    /// Speed cap in world units per millisecond. Zero means unlimited.
    pub max_speed: f32,
}

impl KinematicBody {
    pub fn new(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }
}
