use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with given bounds and default gravity
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(js_error)?;
        Ok(Self { core })
    }

    /// Create a world from a scene bundle (JSON)
    #[wasm_bindgen(js_name = fromScene)]
    pub fn from_scene(json: String) -> Result<World, JsValue> {
        let scene = crate::domain::scene::SceneBundle::from_json(&json).map_err(js_error)?;
        let core = WorldCore::from_scene(&scene).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f64 { self.core.elapsed() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f64 { self.core.gravity() }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_scene_json(&json).map_err(js_error)?;
        Ok(())
    }

    pub fn load_demo_scene(&mut self) {
        self.core.load_demo_scene();
    }

    // === BODY API ===

    /// Add a box at (x, y) (top-left) with size (w, h)
    /// Returns the body ID, or 0 if the box was rejected
    pub fn add_box(&mut self, x: f64, y: f64, w: f64, h: f64, mass: f64) -> u32 {
        self.core.add_box(x, y, w, h, mass).unwrap_or(0)
    }

    /// Spawn a box from a drag gesture between two corners
    /// Returns the body ID, or 0 if the drag was too small
    pub fn spawn_box_from_drag(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> u32 {
        self.core.spawn_box_from_drag(x0, y0, x1, y1).unwrap_or(0)
    }

    /// Remove a body by ID right away
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    /// Remove a body by ID before the next step
    pub fn schedule_removal(&mut self, id: u32) {
        self.core.schedule_removal(id);
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn set_body_angle(&mut self, id: u32, angle: f64) -> Result<(), JsValue> {
        self.core.set_body_angle(id, angle).map_err(js_error)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f64, vy: f64) -> Result<(), JsValue> {
        self.core.set_body_velocity(id, vx, vy).map_err(js_error)
    }

    pub fn set_body_material(&mut self, id: u32, restitution: f64, damping: f64) -> Result<(), JsValue> {
        self.core.set_body_material(id, restitution, damping).map_err(js_error)
    }

    /// Velocity change of (fx, fy) / mass; multiply by dt for continuous forces
    pub fn apply_force(&mut self, id: u32, fx: f64, fy: f64) -> Result<(), JsValue> {
        self.core.apply_force_to_body(id, fx, fy).map_err(js_error)
    }

    // === STEPPING ===

    /// Step the simulation forward by exactly `dt` seconds
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    /// Step with a raw frame delta (clamped); returns the dt used
    pub fn tick(&mut self, frame_dt: f64) -> f64 {
        self.core.tick(frame_dt)
    }

    // === RENDER API ===

    /// Refresh transform buffers; returns number of bodies written
    pub fn extract_transforms(&mut self) -> usize {
        self.core.extract_transforms()
    }

    /// Get pointer to transforms ([cx, cy, w, h, angle] per body)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    /// Get pointer to body IDs, same order as transforms
    pub fn body_ids_ptr(&self) -> *const u32 {
        self.core.body_ids_ptr()
    }

    pub fn body_ids_len(&self) -> usize {
        self.core.body_ids_len()
    }
}
