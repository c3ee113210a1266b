//! Error type shared by the engine
//!
//! Every variant except `InvalidTimestep` and `Config` is recovered inside a
//! tick by dropping the offending pair or body; they surface through the API
//! only at the boundary (`spawn`) or in logs.

use crate::body::BodyId;
use std::fmt;

/// Errors produced by the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two distinct bodies share a center but were not treated as colliding,
    /// so the inverse-square force is undefined.
    DegenerateGeometry { target: BodyId, source: BodyId },
    /// Mass or radius was not a positive finite number, or the initial
    /// position or velocity was not finite
    InvalidSpawnParameters { mass: f64, radius: f64 },
    /// A body's position or velocity became NaN or infinite
    NonFiniteState { id: BodyId },
    /// Frame time or time multiplier was non-positive or not finite
    InvalidTimestep { dt: f64, time_multiplier: f64 },
    /// Configuration could not be loaded or failed validation
    Config(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateGeometry { target, source } => write!(
                f,
                "bodies {} and {} share a center outside collision range",
                target.0, source.0
            ),
            SimError::InvalidSpawnParameters { mass, radius } => write!(
                f,
                "invalid spawn parameters (mass {mass} kg, radius {radius} m): mass and radius must be positive, position and velocity finite"
            ),
            SimError::NonFiniteState { id } => {
                write!(f, "body {} has a non-finite position or velocity", id.0)
            }
            SimError::InvalidTimestep { dt, time_multiplier } => write!(
                f,
                "invalid timestep: dt {dt} s, time multiplier {time_multiplier} (both must be positive and finite)"
            ),
            SimError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_yaml::Error> for SimError {
    fn from(err: serde_yaml::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
