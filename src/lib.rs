//! Boxworld Engine - rigid box physics for the browser playground
//!
//! Architecture:
//! - core/        - Logging plumbing
//! - domain/      - Errors and scene bundles
//! - systems/     - Bodies and the physics world
//! - simulation/  - Host-facing world, perf, render read-back
//!
//! The host frame loop calls `World::tick` (or `step`) once per frame and
//! reads body transforms back for drawing.

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("Boxworld engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Set the log level at runtime ("error", "warn", "info", "debug", "trace", "off")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}

// Re-export main types
pub use domain::error::PhysicsError;
pub use domain::scene::{BodyDesc, SceneBundle, WorldSettings};
pub use rigid_body::{BodyId, RigidBody, Vec2};
pub use rigid_body_system::{PhysicsWorld, StepStats};
pub use simulation::{World, WorldCore};
