//! Position update for one body per tick
//!
//! The engine uses a single explicit scheme: all gravitational kicks for a
//! body are summed into its velocity first, then the position moves once
//! with that net velocity. This is semi-implicit Euler with one velocity
//! update per tick. It is not symplectic and loses accuracy at low frame
//! rates; the trade-off is accepted for an interactive sandbox.

use crate::body::Body;
use crate::error::{Result, SimError};
use crate::timestep::Timestep;

/// Advances a body's position once its velocity for the tick is final
pub trait Integrator: Send + Sync {
    /// Move `body` by one tick
    ///
    /// # Arguments
    ///
    /// * `body` - Body whose velocity already includes this tick's kicks
    /// * `step` - Validated timestep
    ///
    /// # Returns
    ///
    /// `NonFiniteState` if the resulting position or velocity is NaN or infinite
    fn advance(&self, body: &mut Body, step: &Timestep) -> Result<()>;
}

/// Net-velocity Euler drift: `x += v * dt * time_multiplier`
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::integrator::{Euler, Integrator};
/// use slingshot::timestep::Timestep;
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let mut body = spawn(&mut ids, SpawnParams::new(Point2::origin(), Vector2::new(3.0e4, 0.0), 6.0e24)).unwrap();
///
/// Euler.advance(&mut body, &Timestep::new(0.5, 100.0).unwrap()).unwrap();
/// assert_eq!(body.position.x, 1.5e6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn advance(&self, body: &mut Body, step: &Timestep) -> Result<()> {
        body.position += body.velocity * step.simulated_seconds();

        if body.has_finite_state() {
            Ok(())
        } else {
            Err(SimError::NonFiniteState { id: body.id })
        }
    }
}
