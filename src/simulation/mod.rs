//! World - host-facing simulation around one `PhysicsWorld`
//!
//! The physics world only knows bodies, bounds and gravity. This layer adds
//! what the host frame loop needs on top:
//! - frame counter and frame-delta clamping (`tick`)
//! - deferred removals and drag-to-spawn
//! - flat transform buffers for rendering
//! - optional per-step perf metrics

use crate::domain::error::PhysicsError;
use crate::domain::scene::SceneBundle;
use crate::rigid_body::{BodyId, RigidBody};
use crate::rigid_body_system::{PhysicsWorld, StepStats};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::MIN_DRAG_SIZE;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::TRANSFORM_STRIDE;
pub use step::MAX_FRAME_DT;

use perf_timer::LapTimer;

/// The simulation world
pub struct WorldCore {
    physics: PhysicsWorld,

    // State
    frame: u64,
    elapsed: f64,
    last_step: StepStats,

    // Render read-back
    transform_buffer: Vec<f32>,
    body_id_buffer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with default gravity
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        init::create_world_core(width, height)
    }

    /// Create a world from a scene bundle
    pub fn from_scene(scene: &SceneBundle) -> Result<Self, PhysicsError> {
        init::create_world_core_from_scene(scene)
    }

    /// Replace the whole world with the scene in `json`.
    ///
    /// On error the current world is left as it was.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), PhysicsError> {
        init::load_scene_json(self, json)
    }

    pub fn load_demo_scene(&mut self) {
        init::load_demo_scene(self)
    }

    pub fn width(&self) -> f64 { self.physics.bounds().x }

    pub fn height(&self) -> f64 { self.physics.bounds().y }

    pub fn frame(&self) -> u64 { self.frame }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f64 { self.elapsed }

    pub fn body_count(&self) -> usize { self.physics.body_count() }

    pub fn physics(&self) -> &PhysicsWorld { &self.physics }

    pub fn bodies(&self) -> &[RigidBody] { self.physics.bodies() }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> { self.physics.body(id) }

    /// Counters from the most recent step
    pub fn last_step_stats(&self) -> StepStats { self.last_step }

    pub fn gravity(&self) -> f64 {
        settings::get_gravity(self)
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY API ===

    /// Add a box with the given top-left corner, size and mass
    pub fn add_box(&mut self, x: f64, y: f64, w: f64, h: f64, mass: f64) -> Result<BodyId, PhysicsError> {
        commands::add_box(self, x, y, w, h, mass)
    }

    pub fn add_body(&mut self, body: RigidBody) -> BodyId {
        commands::add_body(self, body)
    }

    /// Create a box from a mouse drag between two corners.
    /// Returns `None` when the drag is too small on either side.
    pub fn spawn_box_from_drag(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<BodyId> {
        commands::spawn_box_from_drag(self, x0, y0, x1, y1)
    }

    /// Remove a body now. Returns false for unknown IDs.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        commands::remove_body(self, id)
    }

    /// Remove a body at the start of the next step
    pub fn schedule_removal(&mut self, id: BodyId) {
        commands::schedule_removal(self, id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn set_body_angle(&mut self, id: BodyId, angle: f64) -> Result<(), PhysicsError> {
        rigid::set_body_angle(self, id, angle)
    }

    pub fn set_body_velocity(&mut self, id: BodyId, vx: f64, vy: f64) -> Result<(), PhysicsError> {
        rigid::set_body_velocity(self, id, vx, vy)
    }

    pub fn set_body_material(&mut self, id: BodyId, restitution: f64, damping: f64) -> Result<(), PhysicsError> {
        rigid::set_body_material(self, id, restitution, damping)
    }

    /// See `RigidBody::apply_force`: the force is not scaled by time.
    pub fn apply_force_to_body(&mut self, id: BodyId, fx: f64, fy: f64) -> Result<(), PhysicsError> {
        rigid::apply_force_to_body(self, id, fx, fy)
    }

    // === STEPPING ===

    /// Step the simulation forward by exactly `dt` seconds (no clamping)
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    /// Step with a raw frame delta, clamped to `MAX_FRAME_DT`.
    /// Returns the dt actually simulated.
    pub fn tick(&mut self, frame_dt: f64) -> f64 {
        step::tick(self, frame_dt)
    }

    // === RENDER READ-BACK ===

    /// Refresh the transform buffers; returns the body count written
    pub fn extract_transforms(&mut self) -> usize {
        render_extract::extract_transforms(self)
    }

    pub fn transforms(&self) -> &[f32] {
        &self.transform_buffer
    }

    pub fn body_ids(&self) -> &[u32] {
        &self.body_id_buffer
    }

    /// Get pointer to transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transform_buffer.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transform_buffer.len()
    }

    pub fn body_ids_ptr(&self) -> *const u32 {
        self.body_id_buffer.as_ptr()
    }

    pub fn body_ids_len(&self) -> usize {
        self.body_id_buffer.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
