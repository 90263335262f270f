//! Reflection-based collision response.

use glam::Vec2;

use crate::ecs::components::{Collider, KinematicBody};

/// Reflect `velocity` off a surface with unit `normal` and scale by `restitution`.
///
/// Returns `None` if the body is not moving into the surface.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Option<Vec2> {
    let dot = velocity.dot(normal);
    if dot < 0.0 {
        Some((velocity - 2.0 * dot * normal) * restitution)
    } else {
        None
    }
}

/// Reflect the velocity of every colliding kinematic body off its stored normal.
///
/// Each body bounces independently, as if off a static surface. Sensors are
/// skipped. Returns the number of bodies whose velocity changed.
pub fn collision_response(world: &mut hecs::World) -> usize {
    let mut reflected = 0;
    for (_, (collider, body)) in world.query_mut::<(&Collider, &mut KinematicBody)>() {
        if !collider.is_colliding || collider.is_sensor {
            continue;
        }
        if let Some(velocity) =
            reflect_velocity(body.velocity, collider.last_normal, collider.restitution)
        {
            body.velocity = velocity;
            reflected += 1;
        }
    }
    reflected
}
