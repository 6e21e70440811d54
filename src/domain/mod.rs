//! Domain types shared by the systems and the host-facing simulation layer.

pub mod error;
pub mod scene;
