//! PhysicsWorld - gravity, containment and box-vs-box collisions
//!
//! Each `step(dt)` runs four passes in a fixed order:
//! 1. gravity (as a force pre-scaled by mass and dt)
//! 2. integration (semi-implicit Euler + damping)
//! 3. boundary containment (floor has a resting rule)
//! 4. one all-pairs collision pass in `i < j` order
//!
//! There is no iterative solver. Residual overlap left by one pass is
//! corrected on later steps.

mod boundary;
mod collision;
mod system;

pub use boundary::{BoundaryContact, RESTING_FRICTION, RESTING_SPEED};
pub use system::{PhysicsWorld, StepStats, DEFAULT_GRAVITY};
