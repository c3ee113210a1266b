//! Pairwise Newtonian gravity

use crate::body::Body;
use crate::error::{Result, SimError};
use crate::forces::{ForceModel, G};
use nalgebra::Vector2;

/// Inverse-square attraction between point masses
///
/// No softening: coincident centers are reported as `DegenerateGeometry`
/// rather than producing an infinite kick. In a normal tick the collision
/// test runs first and such pairs merge before gravity is asked about them.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    /// Gravitational constant (m³ kg⁻¹ s⁻²)
    pub g: f64,
}

impl NewtonianGravity {
    /// Creates gravity with the standard constant
    pub fn new() -> Self {
        Self { g: G }
    }

    /// Creates gravity with a custom constant
    ///
    /// # Examples
    ///
    /// ```
    /// use slingshot::forces::NewtonianGravity;
    ///
    /// // Ten times stronger than nature, for a livelier sandbox
    /// let gravity = NewtonianGravity::with_constant(6.67e-10);
    /// assert_eq!(gravity.g, 6.67e-10);
    /// ```
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for NewtonianGravity {
    fn velocity_delta(&self, target: &Body, source: &Body, dt: f64) -> Result<Vector2<f64>> {
        let dr = source.position - target.position;
        let r2 = dr.magnitude_squared();

        if r2 == 0.0 {
            return Err(SimError::DegenerateGeometry {
                target: target.id,
                source: source.id,
            });
        }

        // atan2 keeps the quadrant when either displacement component is negative
        let angle = dr.y.atan2(dr.x);
        let dv = self.g * source.mass * dt / r2;

        Ok(Vector2::new(dv * angle.cos(), dv * angle.sin()))
    }

    fn pair_potential(&self, a: &Body, b: &Body) -> f64 {
        let r = a.distance_to(b);
        if r == 0.0 {
            return 0.0;
        }
        -self.g * a.mass * b.mass / r
    }
}

/// Gravitational velocity change on `target` from `source` over one frame
///
/// `dt` is wall-clock frame time; it is scaled by `time_multiplier` before
/// use, so the kick is `G m_source dt k / r²` directed at the source.
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::forces::{accumulate, G};
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let a = spawn(&mut ids, SpawnParams::new(Point2::new(0.0, 0.0), Vector2::zeros(), 1.0)).unwrap();
/// let b = spawn(&mut ids, SpawnParams::new(Point2::new(0.0, 2.0), Vector2::zeros(), 4.0)).unwrap();
///
/// let dv = accumulate(&a, &b, 1.0, 10.0, G).unwrap();
/// assert!(dv.x.abs() < 1e-25);
/// assert!((dv.y - G * 4.0 * 10.0 / 4.0).abs() < 1e-20);
/// ```
pub fn accumulate(
    target: &Body,
    source: &Body,
    dt: f64,
    time_multiplier: f64,
    g: f64,
) -> Result<Vector2<f64>> {
    NewtonianGravity::with_constant(g).velocity_delta(target, source, dt * time_multiplier)
}
