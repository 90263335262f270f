//! Contact data structures produced by the narrowphase and the pairwise scan.

use glam::Vec2;

use super::narrowphase::EPA_TOLERANCE;

/// Penetration between two overlapping shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit collision normal (from shape A toward shape B).
    pub normal: Vec2,
    /// Penetration depth along `normal`.
    pub depth: f32,
}

impl Penetration {
    /// Translation that moves shape A just out of shape B.
    ///
    /// Includes the EPA tolerance so the shapes end a hair apart instead of
    /// exactly touching.
    #[inline]
    pub fn separation(&self) -> Vec2 {
        -self.normal * (self.depth + EPA_TOLERANCE)
    }
}

/// A colliding entity pair recorded during one collision scan.
#[cfg(feature = "ecs")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub entity_a: hecs::Entity,
    pub entity_b: hecs::Entity,
    /// Contact normal (from A to B).
    pub normal: Vec2,
    pub depth: f32,
}
