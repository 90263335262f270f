//! 2D convex polygon collision and grid movement.
//!
//! # Architecture
//!
//! One [`Simulation::step`] runs the systems in this order:
//!
//! 1. Pairwise collision scan (GJK, then EPA for overlapping pairs)
//! 2. Grid transit init (idle entities with a pending direction)
//! 3. Grid transit step (abort on collision, advance or land)
//! 4. Kinematic movement (integrate velocity, clamp speed)
//! 5. Collision response (reflect velocity off the stored normal)
//!
//! The systems are plain functions over a `hecs::World`, so callers may run
//! them in a different order instead.

pub mod contact;
pub mod easing;
pub mod narrowphase;
pub mod polygon;

#[cfg(feature = "physics")]
pub mod grid;
#[cfg(feature = "physics")]
pub mod kinematic;
#[cfg(feature = "physics")]
pub mod response;
#[cfg(feature = "physics")]
pub mod scan;

#[cfg(feature = "physics")]
pub use self::simulation::*;

#[cfg(feature = "physics")]
mod simulation {
    use super::contact::Contact;
    use super::easing::Easing;
    use super::grid::{self, TransitAbortPolicy, TransitReport};
    use super::kinematic;
    use super::response;
    use super::scan::{CollisionScan, ContactFlagPolicy, ScanReport};

    /// Configuration for the simulation.
    #[derive(Debug, Clone, Copy)]
    pub struct SimulationConfig {
        /// Size of one grid cell in world units. Default: 64.
        pub grid_cell_size: f32,
        /// Behavior after a transit aborts on collision. Default: `ProcessAll`.
        pub transit_abort: TransitAbortPolicy,
        /// How collision flags combine across pairs. Default: `Accumulate`.
        pub contact_flags: ContactFlagPolicy,
        /// Easing applied to grid transits. Default: linear.
        pub easing: Easing,
    }

    impl Default for SimulationConfig {
        fn default() -> Self {
            Self {
                grid_cell_size: 64.0,
                transit_abort: TransitAbortPolicy::ProcessAll,
                contact_flags: ContactFlagPolicy::Accumulate,
                easing: Easing::LINEAR,
            }
        }
    }

    /// Summary of one simulation tick.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct StepReport {
        pub scan: ScanReport,
        pub transits_started: usize,
        pub transit: TransitReport,
        pub reflected: usize,
    }

    /// Runs the systems in order and keeps the scan's buffers between ticks.
    #[derive(Debug, Default)]
    pub struct Simulation {
        config: SimulationConfig,
        scan: CollisionScan,
    }

    impl Simulation {
        pub fn new(config: SimulationConfig) -> Self {
            Self {
                config,
                scan: CollisionScan::new(),
            }
        }

        pub fn config(&self) -> &SimulationConfig {
            &self.config
        }

        /// Colliding pairs found during the last step.
        pub fn contacts(&self) -> &[Contact] {
            self.scan.contacts()
        }

        /// Advance the world by `dt_ms` milliseconds.
        pub fn step(&mut self, world: &mut hecs::World, dt_ms: f32) -> StepReport {
            let scan = self.scan.run(world, self.config.contact_flags);
            let transits_started = grid::grid_transit_init(world, self.config.grid_cell_size);
            let transit = grid::grid_transit_step_with(
                world,
                dt_ms,
                self.config.easing,
                self.config.transit_abort,
            );
            kinematic::kinematic_movement_system(world, dt_ms);
            let reflected = response::collision_response(world);

            StepReport {
                scan,
                transits_started,
                transit,
                reflected,
            }
        }
    }

}
