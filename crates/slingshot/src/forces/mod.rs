//! Force models for the simulation
//!
//! A force model turns one (target, source) pair into the velocity change
//! the source imparts on the target over a span of simulated time. The step
//! controller sums these per target and never asks a model to mutate the
//! source.

use crate::body::Body;
use crate::error::Result;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::{accumulate, NewtonianGravity};

/// Gravitational constant in m³ kg⁻¹ s⁻² (the rounded value the simulator is tuned for)
pub const G: f64 = 6.67e-11;

/// A source of velocity change between pairs of bodies
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::forces::{ForceModel, NewtonianGravity};
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let earth = spawn(&mut ids, SpawnParams::new(Point2::new(1.5e11, 0.0), Vector2::zeros(), 6.0e24)).unwrap();
/// let sun = spawn(&mut ids, SpawnParams::new(Point2::origin(), Vector2::zeros(), 2.0e30)).unwrap();
///
/// let gravity = NewtonianGravity::new();
/// let dv = gravity.velocity_delta(&earth, &sun, 3600.0).unwrap();
///
/// // Pulled toward the sun (negative x)
/// assert!(dv.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Velocity change `source` imparts on `target` over `dt` seconds of
    /// simulated time
    ///
    /// # Arguments
    ///
    /// * `target` - Body being accelerated
    /// * `source` - Body exerting the force (never mutated)
    /// * `dt` - Simulated seconds (frame time already scaled by the time multiplier)
    ///
    /// # Returns
    ///
    /// Velocity delta in m/s, or `DegenerateGeometry` when the pair shares a center
    fn velocity_delta(&self, target: &Body, source: &Body, dt: f64) -> Result<Vector2<f64>>;

    /// Potential energy of the pair (optional)
    ///
    /// Default implementation returns 0.0. Override for conservative forces.
    fn pair_potential(&self, _a: &Body, _b: &Body) -> f64 {
        0.0
    }
}
