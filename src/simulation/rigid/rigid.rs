use crate::domain::error::PhysicsError;
use crate::rigid_body::{BodyId, Vec2};

use super::WorldCore;

pub(super) fn set_body_angle(world: &mut WorldCore, id: BodyId, angle: f64) -> Result<(), PhysicsError> {
    world.physics.try_body_mut(id)?.angle = angle;
    Ok(())
}

pub(super) fn set_body_velocity(world: &mut WorldCore, id: BodyId, vx: f64, vy: f64) -> Result<(), PhysicsError> {
    world.physics.try_body_mut(id)?.velocity = Vec2::new(vx, vy);
    Ok(())
}

pub(super) fn set_body_material(
    world: &mut WorldCore,
    id: BodyId,
    restitution: f64,
    damping: f64,
) -> Result<(), PhysicsError> {
    let body = world.physics.try_body_mut(id)?;
    body.set_restitution(restitution);
    body.set_damping(damping);
    Ok(())
}

pub(super) fn apply_force_to_body(world: &mut WorldCore, id: BodyId, fx: f64, fy: f64) -> Result<(), PhysicsError> {
    world.physics.try_body_mut(id)?.apply_force(fx, fy);
    Ok(())
}
