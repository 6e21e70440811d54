//! RigidBody - A solid axis-aligned box that moves as a unit
//!
//! Position is the top-left corner of the box. Size and mass are fixed at
//! creation; velocity, position and material response change every step.

mod vec2;
mod body;

pub use vec2::{Axis, Vec2};
pub use body::{BodyId, RigidBody, DEFAULT_DAMPING, DEFAULT_RESTITUTION};
