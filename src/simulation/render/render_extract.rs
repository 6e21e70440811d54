use super::WorldCore;

/// Floats per body in the transform buffer:
/// `[center_x, center_y, width, height, angle]`
pub const TRANSFORM_STRIDE: usize = 5;

/// Fill the transform and ID buffers in collection order.
pub(super) fn extract_transforms(world: &mut WorldCore) -> usize {
    let bodies = world.physics.bodies();

    world.transform_buffer.clear();
    world.body_id_buffer.clear();
    world.transform_buffer.reserve(bodies.len() * TRANSFORM_STRIDE);
    world.body_id_buffer.reserve(bodies.len());

    for body in bodies {
        let center = body.center();
        world.transform_buffer.extend_from_slice(&[
            center.x as f32,
            center.y as f32,
            body.width() as f32,
            body.height() as f32,
            body.angle as f32,
        ]);
        world.body_id_buffer.push(body.id);
    }

    bodies.len()
}
