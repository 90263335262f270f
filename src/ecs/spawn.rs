//! Entity factories for the stock player and box shapes.

use glam::Vec2;

use crate::ecs::components::{Collider, GridMovement, KinematicBody, Position};
use crate::physics::polygon::Polygon;

/// Half extent of the player square. Slightly under half a 64 unit cell so
/// neighbours on adjacent cells do not touch.
pub const PLAYER_HALF_EXTENT: f32 = 30.0;
pub const PLAYER_RESTITUTION: f32 = 0.4;
pub const BOX_RESTITUTION: f32 = 1.0;

/// 60x60 square centered on the entity position.
pub fn player_shape() -> Polygon {
    Polygon::rectangle(Vec2::splat(PLAYER_HALF_EXTENT))
}

/// Square with a wedge sticking out to the left.
pub fn box_shape() -> Polygon {
    Polygon::from_array([
        Vec2::new(-30.0, -30.0),
        Vec2::new(30.0, -30.0),
        Vec2::new(30.0, 30.0),
        Vec2::new(-30.0, 30.0),
        Vec2::new(-60.0, 0.0),
    ])
}

/// Spawn a player driven by velocity.
pub fn spawn_kinematic_player(world: &mut hecs::World, position: Vec2) -> hecs::Entity {
    world.spawn((
        Position(position),
        KinematicBody::default(),
        Collider::new(player_shape(), PLAYER_RESTITUTION),
    ))
}

/// Spawn a player that moves one grid cell at a time at `speed` cells per second.
pub fn spawn_grid_player(world: &mut hecs::World, position: Vec2, speed: f32) -> hecs::Entity {
    world.spawn((
        Position(position),
        GridMovement::idle(speed),
        Collider::new(player_shape(), PLAYER_RESTITUTION),
    ))
}

/// Spawn a static box.
pub fn spawn_box(world: &mut hecs::World, position: Vec2) -> hecs::Entity {
    world.spawn((Position(position), Collider::new(box_shape(), BOX_RESTITUTION)))
}
