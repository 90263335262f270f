//! Velocity integration for kinematic bodies.

use glam::Vec2;

use crate::ecs::components::{KinematicBody, Position};

/// Rescale `velocity` to `max_speed` if it is faster. A `max_speed` of zero
/// or less means unlimited.
#[inline]
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    if max_speed > 0.0 {
        velocity.clamp_length_max(max_speed)
    } else {
        velocity
    }
}

/// Integrate positions: p += v * dt, then enforce each body's speed cap.
///
/// `dt_ms` is in milliseconds, matching the velocity units.
pub fn kinematic_movement_system(world: &mut hecs::World, dt_ms: f32) {
    for (_, (position, body)) in world.query_mut::<(&mut Position, &mut KinematicBody)>() {
        position.0 += body.velocity * dt_ms;
        body.velocity = clamp_speed(body.velocity, body.max_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_speed() {
        let eps = 1e-6;
        let v = clamp_speed(Vec2::new(3.0, 4.0), 1.0);
        assert!((v - Vec2::new(0.6, 0.8)).length() < eps);
        assert_eq!(clamp_speed(Vec2::new(3.0, 4.0), 0.0), Vec2::new(3.0, 4.0));
        assert_eq!(clamp_speed(Vec2::new(0.1, 0.0), 1.0), Vec2::new(0.1, 0.0));
    }

    #[test]
    fn test_kinematic_movement() {
        let mut world = hecs::World::new();
        let entity = world.spawn((
            Position::new(10.0, 0.0),
            KinematicBody::new(Vec2::new(0.2, -0.1)),
        ));

        kinematic_movement_system(&mut world, 10.0);

        let eps = 1e-5;
        let position = world.get::<&Position>(entity).unwrap();
        assert!((position.0 - Vec2::new(12.0, -1.0)).length() < eps);
    }

    #[test]
    fn test_speed_cap_applies_after_move() {
        let mut world = hecs::World::new();
        let entity = world.spawn((
            Position::default(),
            KinematicBody::new(Vec2::new(1.0, 0.0)).with_max_speed(0.5),
        ));

        kinematic_movement_system(&mut world, 10.0);

        let eps = 1e-5;
        assert!((world.get::<&Position>(entity).unwrap().0 - Vec2::new(10.0, 0.0)).length() < eps);
        let body = world.get::<&KinematicBody>(entity).unwrap();
        assert!((body.velocity - Vec2::new(0.5, 0.0)).length() < eps);
    }
}
