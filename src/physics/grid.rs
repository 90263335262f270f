//! Grid-transit state machine.
//!
//! `Idle` entities with a pending direction start a one-cell transit. Each
//! tick a transit either aborts on collision, rolling back to its start cell,
//! advances along its eased path, or lands on its target and goes idle.

use tracing::{debug, warn};

use crate::ecs::components::{Collider, GridDirection, GridMovement, GridTransit, Position};

use super::easing::Easing;

/// What the transit step does after aborting a colliding entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitAbortPolicy {
    /// Keep processing the remaining transiting entities.
    #[default]
    ProcessAll,
    /// Leave the remaining entities untouched for this tick.
    StopAtFirstCollision,
}

/// Outcome counts of one transit step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitReport {
    pub advanced: usize,
    pub completed: usize,
    pub aborted: usize,
}

/// Start a transit for every idle entity with a pending direction.
///
/// Directions that do not resolve to a vector (e.g. `UP | DOWN`) are dropped.
/// Returns the number of transits started.
pub fn grid_transit_init(world: &mut hecs::World, cell_size: f32) -> usize {
    let mut started = 0;
    for (entity, (position, movement)) in world.query_mut::<(&Position, &mut GridMovement)>() {
        let GridMovement::Idle(idle) = movement else {
            continue;
        };
        if idle.direction.is_none() {
            continue;
        }

        match GridTransit::from_direction(position.0, idle.direction, cell_size, idle.speed) {
            Some(transit) => {
                debug!(?entity, start = ?transit.start, target = ?transit.target, "transit started");
                *movement = GridMovement::Transiting(transit);
                started += 1;
            }
            None => {
                warn!(
                    ?entity,
                    direction = idle.direction.bits(),
                    "grid direction does not resolve to a movement, ignoring"
                );
                idle.direction = GridDirection::NONE;
            }
        }
    }
    started
}

/// Advance every transit by `dt_ms` milliseconds with linear easing,
/// processing every entity.
pub fn grid_transit_step(world: &mut hecs::World, dt_ms: f32) -> TransitReport {
    grid_transit_step_with(world, dt_ms, Easing::LINEAR, TransitAbortPolicy::ProcessAll)
}

/// Advance every transit by `dt_ms` milliseconds.
///
/// A transiting entity whose collider is flagged snaps back to its start,
/// goes idle and has the flag cleared. Otherwise progress grows by
/// `speed * dt`; the entity lands exactly on its target once progress
/// reaches 1.
pub fn grid_transit_step_with(
    world: &mut hecs::World,
    dt_ms: f32,
    easing: Easing,
    policy: TransitAbortPolicy,
) -> TransitReport {
    let dt = dt_ms / 1000.0;
    let mut report = TransitReport::default();

    for (entity, (position, movement, collider)) in
        world.query_mut::<(&mut Position, &mut GridMovement, Option<&mut Collider>)>()
    {
        let GridMovement::Transiting(transit) = movement else {
            continue;
        };

        if let Some(collider) = collider.filter(|c| c.is_colliding) {
            position.0 = transit.start;
            collider.is_colliding = false;
            debug!(?entity, start = ?transit.start, progress = transit.progress, "transit aborted");
            *movement = GridMovement::idle(transit.speed);
            report.aborted += 1;
            if policy == TransitAbortPolicy::StopAtFirstCollision {
                break;
            }
            continue;
        }

        transit.progress += transit.speed * dt;
        if transit.is_complete() {
            position.0 = transit.target;
            debug!(?entity, target = ?transit.target, "transit completed");
            *movement = GridMovement::idle(transit.speed);
            report.completed += 1;
        } else {
            position.0 = transit.interpolate(easing);
            report.advanced += 1;
        }
    }

    report
}
