//! Mapping directional input onto grid and kinematic movement.
//!
//! Polling the keyboard is left to the caller; these functions only consume
//! a snapshot of which directions are held.

use glam::Vec2;

use crate::ecs::components::{GridDirection, GridMovement, KinematicBody};

/// Default kinematic speed in world units per millisecond.
pub const BASE_MOVEMENT_SPEED: f32 = 0.2;

/// Snapshot of held direction keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionalInput {
    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Single cardinal direction for grid movement.
///
/// The first held key wins in the order left, right, up, down.
pub fn grid_direction_from_input(input: DirectionalInput) -> GridDirection {
    [
        (input.left, GridDirection::LEFT),
        (input.right, GridDirection::RIGHT),
        (input.up, GridDirection::UP),
        (input.down, GridDirection::DOWN),
    ]
    .into_iter()
    .find_map(|(held, direction)| held.then_some(direction))
    .unwrap_or(GridDirection::NONE)
}

/// Velocity of length `speed` along the held axes, or `None` if they cancel
/// out or nothing is held.
pub fn velocity_from_input(input: DirectionalInput, speed: f32) -> Option<Vec2> {
    let mut axis = Vec2::ZERO;
    if input.left {
        axis.x -= 1.0;
    }
    if input.right {
        axis.x += 1.0;
    }
    if input.up {
        axis.y -= 1.0;
    }
    if input.down {
        axis.y += 1.0;
    }
    axis.try_normalize().map(|dir| dir * speed)
}

/// Write the input direction onto an idle grid entity.
///
/// Entities that are mid-transit or have no [`GridMovement`] are left alone.
/// Returns whether the direction was written.
pub fn apply_grid_input(
    world: &mut hecs::World,
    entity: hecs::Entity,
    input: DirectionalInput,
) -> bool {
    let Ok(mut movement) = world.get::<&mut GridMovement>(entity) else {
        return false;
    };
    match &mut *movement {
        GridMovement::Idle(idle) => {
            idle.direction = grid_direction_from_input(input);
            true
        }
        GridMovement::Transiting(_) => false,
    }
}

/// Set a kinematic body's velocity from input.
///
/// Without input the velocity is kept, so the body coasts. Returns whether
/// the velocity was written.
pub fn apply_kinematic_input(
    world: &mut hecs::World,
    entity: hecs::Entity,
    input: DirectionalInput,
    speed: f32,
) -> bool {
    let Some(velocity) = velocity_from_input(input, speed) else {
        return false;
    };
    match world.get::<&mut KinematicBody>(entity) {
        Ok(mut body) => {
            body.velocity = velocity;
            true
        }
        Err(_) => false,
    }
}
