//! Scene setup shared by the benchmarks.

use glam::Vec2;
use gridphys::ecs::spawn::{box_shape, player_shape, spawn_box, spawn_grid_player};
use gridphys::physics::polygon::Polygon;
use gridphys::{
    apply_grid_input, Collider, DirectionalInput, KinematicBody, Position, Simulation,
    SimulationConfig,
};

/// World vertices of two 60x60 squares `offset` apart along x.
pub fn square_pair(offset: f32) -> (Vec<Vec2>, Vec<Vec2>) {
    let shape = player_shape();
    (
        shape.world_vertices(Vec2::ZERO),
        shape.world_vertices(Vec2::new(offset, 0.0)),
    )
}

/// World vertices of a player square and a box, `offset` apart along x.
pub fn square_box_pair(offset: f32) -> (Vec<Vec2>, Vec<Vec2>) {
    (
        player_shape().world_vertices(Vec2::ZERO),
        box_shape().world_vertices(Vec2::new(offset, 0.0)),
    )
}

/// Regular polygon with `n` vertices and circumradius `radius`.
pub fn regular_polygon(n: usize, radius: f32, center: Vec2) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// `n` squares on a grid `spacing` apart. Spacing under 60 makes neighbours overlap.
pub fn setup_square_grid(n: usize, spacing: f32) -> hecs::World {
    let mut world = hecs::World::new();
    let columns = (n as f32).sqrt().ceil().max(1.0) as usize;
    let shape = Polygon::rectangle(Vec2::splat(30.0));
    for i in 0..n {
        let x = (i % columns) as f32 * spacing;
        let y = (i / columns) as f32 * spacing;
        world.spawn((
            Position(Vec2::new(x, y)),
            Collider::new(shape, 1.0),
            KinematicBody::new(Vec2::new(0.1, 0.05)),
        ));
    }
    world
}

/// Mixed scene: grid players walking right next to boxes.
pub fn setup_scene(n: usize) -> (hecs::World, Simulation) {
    let mut world = hecs::World::new();
    let right = DirectionalInput {
        right: true,
        ..Default::default()
    };
    for i in 0..n {
        let y = i as f32 * 128.0;
        let player = spawn_grid_player(&mut world, Vec2::new(0.0, y), 4.0);
        apply_grid_input(&mut world, player, right);
        spawn_box(&mut world, Vec2::new(160.0, y));
    }
    (world, Simulation::new(SimulationConfig::default()))
}
