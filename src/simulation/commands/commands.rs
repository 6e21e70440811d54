use crate::domain::error::PhysicsError;
use crate::rigid_body::{BodyId, RigidBody};

use super::WorldCore;

/// A drag must exceed this on both sides to spawn a box
pub const MIN_DRAG_SIZE: f64 = 10.0;

pub(super) fn add_box(world: &mut WorldCore, x: f64, y: f64, w: f64, h: f64, mass: f64) -> Result<BodyId, PhysicsError> {
    let body = RigidBody::new(x, y, w, h, mass).map_err(|e| {
        log::warn!("add_box rejected: {}", e);
        e
    })?;
    Ok(add_body(world, body))
}

pub(super) fn add_body(world: &mut WorldCore, body: RigidBody) -> BodyId {
    world.physics.add_body(body)
}

pub(super) fn spawn_box_from_drag(world: &mut WorldCore, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<BodyId> {
    // Drags can go in any direction; normalize to top-left + size.
    let x = x0.min(x1);
    let y = y0.min(y1);
    let w = (x1 - x0).abs();
    let h = (y1 - y0).abs();

    if !(w > MIN_DRAG_SIZE && h > MIN_DRAG_SIZE) {
        return None;
    }

    let body = RigidBody::new(x, y, w, h, 1.0).ok()?;
    Some(add_body(world, body))
}

pub(super) fn remove_body(world: &mut WorldCore, id: BodyId) -> bool {
    world.physics.remove_body(id).is_some()
}

pub(super) fn schedule_removal(world: &mut WorldCore, id: BodyId) {
    world.physics.queue_removal(id);
}

pub(super) fn clear(world: &mut WorldCore) {
    world.physics.clear();
    world.transform_buffer.clear();
    world.body_id_buffer.clear();
}
