use thiserror::Error;

use crate::rigid_body::BodyId;

/// Everything the engine can reject.
///
/// Stepping never fails; these only surface from construction, lookups and
/// scene loading.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("body mass must be finite and positive, got {0}")]
    InvalidMass(f64),

    #[error("body size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("world bounds must be finite and positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    #[error("malformed scene bundle: {0}")]
    Scene(#[from] serde_json::Error),
}
