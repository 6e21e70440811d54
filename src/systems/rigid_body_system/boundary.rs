use crate::rigid_body::{RigidBody, Vec2};

/// Rebound speed below which a body hitting the floor is considered resting
pub const RESTING_SPEED: f64 = 10.0;
/// Horizontal velocity kept on each resting contact (floor friction)
pub const RESTING_FRICTION: f64 = 0.95;

/// What happened to one body during containment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryContact {
    /// Number of walls the body was clamped against
    pub walls: u32,
    /// Floor contact settled the body (vy zeroed)
    pub resting: bool,
}

/// Clamp a body back inside `[0, bounds]` and reflect the velocity on each
/// crossed edge. Order is left, right, top, bottom.
///
/// Only the floor applies the resting rule.
pub(super) fn contain(body: &mut RigidBody, bounds: Vec2) -> BoundaryContact {
    let mut contact = BoundaryContact::default();
    let size = body.size();
    let restitution = body.restitution();

    // Left
    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
        body.velocity.x = -body.velocity.x * restitution;
        contact.walls += 1;
    }

    // Right
    if body.pos.x + size.x > bounds.x {
        body.pos.x = bounds.x - size.x;
        body.velocity.x = -body.velocity.x * restitution;
        contact.walls += 1;
    }

    // Top
    if body.pos.y < 0.0 {
        body.pos.y = 0.0;
        body.velocity.y = -body.velocity.y * restitution;
        contact.walls += 1;
    }

    // Bottom
    if body.pos.y + size.y > bounds.y {
        body.pos.y = bounds.y - size.y;
        body.velocity.y = -body.velocity.y * restitution;
        contact.walls += 1;

        if body.velocity.y.abs() < RESTING_SPEED {
            body.velocity.y = 0.0;
            body.velocity.x *= RESTING_FRICTION;
            contact.resting = true;
        }
    }

    contact
}
