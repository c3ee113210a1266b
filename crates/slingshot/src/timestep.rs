//! Validated per-tick timestep
//!
//! Frame time comes from the host's wall clock and varies frame to frame;
//! the time multiplier is a user control. Both are checked once here so the
//! physics never sees a zero, negative or NaN step.

use units::Time;

use crate::error::{Result, SimError};

/// Wall-clock frame time paired with the time multiplier
///
/// # Examples
///
/// ```
/// use slingshot::timestep::Timestep;
///
/// let step = Timestep::new(1.0 / 60.0, 1.0e6).unwrap();
/// assert!((step.simulated_seconds() - 16_666.666).abs() < 1e-2);
///
/// assert!(Timestep::new(0.0, 1.0e6).is_err());
/// assert!(Timestep::new(f64::NAN, 1.0).is_err());
/// assert!(Timestep::new(1.0e200, 1.0e200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestep {
    dt: f64,
    time_multiplier: f64,
}

impl Timestep {
    /// Checks both values and their product are positive and finite
    pub fn new(dt: f64, time_multiplier: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(dt) && valid(time_multiplier) && valid(dt * time_multiplier) {
            Ok(Self { dt, time_multiplier })
        } else {
            Err(SimError::InvalidTimestep { dt, time_multiplier })
        }
    }

    /// Frame time in wall-clock seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time_multiplier(&self) -> f64 {
        self.time_multiplier
    }

    /// Seconds of simulated time covered by the tick
    pub fn simulated_seconds(&self) -> f64 {
        self.dt * self.time_multiplier
    }

    pub fn simulated(&self) -> Time {
        Time::from_seconds(self.simulated_seconds())
    }
}
