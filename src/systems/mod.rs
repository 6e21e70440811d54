//! Simulation systems: the box body itself and the world that steps it.

pub mod rigid_body;
pub mod rigid_body_system;
