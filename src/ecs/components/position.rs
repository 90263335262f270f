//! World-space position component.

use glam::Vec2;

/// World-space anchor of an entity. Collider vertices are relative to it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl From<Vec2> for Position {
    fn from(value: Vec2) -> Self {
        Self(value)
    }
}
