//! ECS components (position, physics, grid movement).

pub mod movement;
pub mod physics;
pub mod position;

pub use movement::*;
pub use physics::*;
pub use position::*;
