//! ECS systems (input mapping).

pub mod input;

pub use input::{
    apply_grid_input, apply_kinematic_input, grid_direction_from_input, velocity_from_input,
    DirectionalInput, BASE_MOVEMENT_SPEED,
};
