//! Entity Component System integration with hecs.

pub mod components;
pub mod spawn;
pub mod systems;

pub mod prelude {
    pub use super::components::*;
    pub use super::spawn::{spawn_box, spawn_grid_player, spawn_kinematic_player};
    pub use super::systems::{
        apply_grid_input, apply_kinematic_input, DirectionalInput, BASE_MOVEMENT_SPEED,
    };
}
