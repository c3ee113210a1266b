use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * DAYS_PER_YEAR; // 365-day calendar year
const MONTHS_PER_YEAR: f64 = 12.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with seconds as the base unit. Simulated
/// time runs much faster than wall time (frame time scaled by the time
/// multiplier), so the readable conversions are days and years.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let frame = Time::from_seconds(1.0 / 60.0);
/// let simulated = frame * 1.0e6;
///
/// assert!(simulated.to_days() > 0.19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }

    /// Splits the time into whole years and the remaining whole months.
    ///
    /// Months are rounded to the nearest month; a remainder that rounds up
    /// to twelve carries into the year count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Time;
    ///
    /// assert_eq!(Time::from_years(2.5).calendar(), (2, 6));
    /// assert_eq!(Time::from_years(0.99).calendar(), (1, 0));
    /// ```
    pub fn calendar(&self) -> (u64, u32) {
        let years = self.to_years().max(0.0);
        let mut whole_years = years.trunc() as u64;
        let mut months = (years.fract() * MONTHS_PER_YEAR).round() as u32;
        if months >= MONTHS_PER_YEAR as u32 {
            whole_years += 1;
            months = 0;
        }
        (whole_years, months)
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        self.0 += rhs.0;
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        Time(self * rhs.0)
    }
}
