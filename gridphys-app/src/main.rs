use anyhow::Context;
use glam::Vec2;
use gridphys::{
    apply_grid_input, apply_kinematic_input, spawn_box, spawn_grid_player,
    spawn_kinematic_player, Collider, DirectionalInput, GridMovement, Position, Simulation,
    SimulationConfig, BASE_MOVEMENT_SPEED,
};
use tracing::info;

const TICKS: u32 = 240;
const DT_MS: f32 = 1000.0 / 60.0;

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Keys held by the scripted players on a given tick.
fn scripted_input(tick: u32) -> (DirectionalInput, DirectionalInput) {
    let grid = match tick {
        0..=59 => DirectionalInput {
            right: true,
            ..Default::default()
        },
        60..=119 => DirectionalInput {
            down: true,
            ..Default::default()
        },
        _ => DirectionalInput::default(),
    };
    // The kinematic player only gets a single push and then coasts.
    let kinematic = if tick == 0 {
        DirectionalInput {
            right: true,
            ..Default::default()
        }
    } else {
        DirectionalInput::default()
    };
    (grid, kinematic)
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = SimulationConfig::default();
    let cell = config.grid_cell_size;
    let mut sim = Simulation::new(config);
    let mut world = hecs::World::new();

    let grid_player = spawn_grid_player(&mut world, Vec2::new(cell * 0.5, cell * 0.5), 4.0);
    let kinematic_player = spawn_kinematic_player(&mut world, Vec2::new(cell * 0.5, cell * 4.5));
    spawn_box(&mut world, Vec2::new(cell * 3.5, cell * 0.5));
    spawn_box(&mut world, Vec2::new(cell * 6.5, cell * 4.5));

    for tick in 0..TICKS {
        let (grid_input, kinematic_input) = scripted_input(tick);
        apply_grid_input(&mut world, grid_player, grid_input);
        apply_kinematic_input(
            &mut world,
            kinematic_player,
            kinematic_input,
            BASE_MOVEMENT_SPEED,
        );

        let report = sim.step(&mut world, DT_MS);

        if report.scan.colliding_pairs > 0 || report.transit.aborted > 0 || tick % 60 == 0 {
            let grid_position = world
                .get::<&Position>(grid_player)
                .context("grid player has no position")?
                .0;
            let grid_mode = match *world
                .get::<&GridMovement>(grid_player)
                .context("grid player has no grid movement")?
            {
                GridMovement::Idle(_) => "idle",
                GridMovement::Transiting(_) => "transiting",
            };
            let kinematic_position = world
                .get::<&Position>(kinematic_player)
                .context("kinematic player has no position")?
                .0;
            info!(
                tick,
                colliding = report.scan.colliding_pairs,
                aborted = report.transit.aborted,
                reflected = report.reflected,
                grid = ?grid_position,
                grid_mode,
                kinematic = ?kinematic_position,
                "step"
            );
        }
    }

    for contact in sim.contacts() {
        info!(
            a = ?contact.entity_a,
            b = ?contact.entity_b,
            normal = ?contact.normal,
            depth = contact.depth,
            "final contact"
        );
    }

    let collider = *world
        .get::<&Collider>(kinematic_player)
        .context("kinematic player has no collider")?;
    info!(
        colliding = collider.is_colliding,
        normal = ?collider.last_normal,
        "kinematic player final state"
    );

    Ok(())
}
