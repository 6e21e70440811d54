use wasm_bindgen::prelude::*;

use crate::rigid_body_system::StepStats;

/// Timings and counters for the last step (zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) removals_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) body_count: u32,
    pub(super) removals_flushed: u32,
    pub(super) boundary_contacts: u32,
    pub(super) resting_contacts: u32,
    pub(super) pairs_tested: u32,
    pub(super) collisions_resolved: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counts(&mut self, stats: &StepStats) {
        self.removals_flushed = stats.removals_flushed;
        self.boundary_contacts = stats.boundary_contacts;
        self.resting_contacts = stats.resting_contacts;
        self.pairs_tested = stats.pairs_tested;
        self.collisions_resolved = stats.collisions_resolved;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn removals_ms(&self) -> f64 { self.removals_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn removals_flushed(&self) -> u32 { self.removals_flushed }
    #[wasm_bindgen(getter)]
    pub fn boundary_contacts(&self) -> u32 { self.boundary_contacts }
    #[wasm_bindgen(getter)]
    pub fn resting_contacts(&self) -> u32 { self.resting_contacts }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
}
