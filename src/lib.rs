//! Gridphys
//!
//! Narrowphase collision for 2D convex polygons (GJK + EPA) with a
//! reflection response and grid-cell movement, running over a hecs world.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **physics::polygon** - Shapes and the support-point kernel
//! 2. **physics::narrowphase** - GJK overlap test and EPA penetration recovery
//! 3. **ecs** - hecs components, input mapping and entity factories (feature = "ecs")
//! 4. **physics** systems - Collision scan, response, kinematic and grid movement (feature = "physics")

pub mod error;
pub mod physics;

#[cfg(feature = "ecs")]
pub mod ecs;

pub use error::ShapeError;

pub use physics::contact::Penetration;
pub use physics::easing::Easing;
pub use physics::narrowphase::{detect_collision, epa_penetration, gjk_intersection, Simplex};
pub use physics::polygon::{Polygon, SupportMap, MAX_POLYGON_VERTICES};

#[cfg(feature = "ecs")]
pub use ecs::prelude::*;

#[cfg(feature = "physics")]
pub use physics::{
    grid::{grid_transit_init, grid_transit_step, grid_transit_step_with, TransitAbortPolicy},
    kinematic::kinematic_movement_system,
    response::collision_response,
    scan::{pairwise_collision_scan, CollisionScan, ContactFlagPolicy, ScanReport},
    Simulation, SimulationConfig, StepReport,
};

// Re-export glam and hecs for convenience
pub use glam;
#[cfg(feature = "ecs")]
pub use hecs;
