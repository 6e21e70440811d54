use crate::rigid_body_system::StepStats;

use super::{LapTimer, WorldCore};

/// Largest frame delta the host loop hands to the physics world
pub const MAX_FRAME_DT: f64 = 0.1;

pub(super) fn tick(world: &mut WorldCore, frame_dt: f64) -> f64 {
    let dt = if frame_dt > MAX_FRAME_DT { MAX_FRAME_DT } else { frame_dt };
    step(world, dt);
    dt
}

pub(super) fn step(world: &mut WorldCore, dt: f64) {
    debug_assert!(dt.is_finite(), "step called with non-finite dt");

    let stats = if world.perf_enabled {
        step_timed(world, dt)
    } else {
        world.physics.step(dt)
    };

    world.last_step = stats;
    world.elapsed += dt;
    world.frame += 1;
}

/// Same pass order as `PhysicsWorld::step`, with a lap per pass.
fn step_timed(world: &mut WorldCore, dt: f64) -> StepStats {
    world.perf_stats.reset();
    let mut timer = LapTimer::start();
    let mut stats = StepStats::default();

    stats.removals_flushed = world.physics.flush_removals();
    world.perf_stats.removals_ms = timer.lap();

    world.physics.apply_gravity(dt);
    world.perf_stats.forces_ms = timer.lap();

    world.physics.integrate(dt);
    world.perf_stats.integrate_ms = timer.lap();

    world.physics.contain_bodies(&mut stats);
    world.perf_stats.boundary_ms = timer.lap();

    world.physics.resolve_collisions(&mut stats);
    world.perf_stats.collisions_ms = timer.lap();

    world.perf_stats.step_ms = timer.total();
    world.perf_stats.body_count = world.physics.body_count() as u32;
    world.perf_stats.record_counts(&stats);
    stats
}
