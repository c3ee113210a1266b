use crate::length::{Length, KM_TO_M};
use crate::time::Time;
use std::ops::{Add, Div, Mul, Sub};

/// Speed of a circular orbit of the given radius around a central mass
///
/// `v = sqrt(G M / r)` with G supplied by the caller, since the simulator
/// treats the gravitational constant as configuration.
///
/// # Examples
/// ```
/// use units::velocity::circular_orbital_velocity;
/// use units::{Length, Mass};
///
/// let v = circular_orbital_velocity(6.67e-11, Mass::from_solar_masses(1.0), Length::from_au(1.0));
/// assert!((v.to_km_per_sec() - 29.7).abs() < 0.1);
/// ```
pub fn circular_orbital_velocity(
    gravitational_constant: f64,
    central_mass: crate::Mass,
    radius: Length,
) -> Velocity {
    Velocity::from_meters_per_sec(
        (gravitational_constant * central_mass.to_kg() / radius.to_meters()).sqrt(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Distance covered at this speed over `time`
    pub fn distance_over(&self, time: Time) -> Length {
        Length::from_meters(self.0 * time.to_seconds())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
