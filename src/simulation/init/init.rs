use crate::domain::error::PhysicsError;
use crate::domain::scene::SceneBundle;
use crate::rigid_body_system::{PhysicsWorld, StepStats, DEFAULT_GRAVITY};

use super::perf_stats::PerfStats;
use super::WorldCore;

fn core_from_physics(physics: PhysicsWorld) -> WorldCore {
    let capacity = physics.body_count().max(16);
    WorldCore {
        physics,
        frame: 0,
        elapsed: 0.0,
        last_step: StepStats::default(),
        transform_buffer: Vec::with_capacity(capacity * super::TRANSFORM_STRIDE),
        body_id_buffer: Vec::with_capacity(capacity),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn create_world_core(width: f64, height: f64) -> Result<WorldCore, PhysicsError> {
    let physics = PhysicsWorld::new(width, height, DEFAULT_GRAVITY)?;
    Ok(core_from_physics(physics))
}

pub(super) fn create_world_core_from_scene(scene: &SceneBundle) -> Result<WorldCore, PhysicsError> {
    let physics = scene.build()?;
    log::info!(
        "scene loaded: {}x{} gravity {} with {} bodies",
        scene.world.width,
        scene.world.height,
        scene.world.gravity,
        physics.body_count()
    );
    Ok(core_from_physics(physics))
}

/// Swap in a freshly built world, keeping the perf toggle.
pub(super) fn load_scene_json(world: &mut WorldCore, json: &str) -> Result<(), PhysicsError> {
    let scene = SceneBundle::from_json(json)?;
    replace_with_scene(world, &scene)
}

pub(super) fn load_demo_scene(world: &mut WorldCore) {
    if let Err(e) = replace_with_scene(world, &SceneBundle::demo()) {
        // The built-in scene is always valid.
        log::error!("demo scene rejected: {}", e);
    }
}

fn replace_with_scene(world: &mut WorldCore, scene: &SceneBundle) -> Result<(), PhysicsError> {
    let mut fresh = create_world_core_from_scene(scene)?;
    fresh.perf_enabled = world.perf_enabled;
    *world = fresh;
    Ok(())
}
