//! Tunable parameters consumed by the engine
//!
//! The host owns the configuration and hands it to the `Simulation`. Every
//! field has a default, so a YAML document only needs the keys it changes:
//!
//! ```yaml
//! gravitational_constant: 6.67e-11
//! collisions_enabled: true
//! time_multiplier: 1.0e6     # simulated seconds per wall-clock second
//! target_fps: 60
//! slingshot_power: 200.0     # m/s of launch speed per pixel dragged
//! pixels_per_au: 200.0
//! window: { width: 800, height: 800 }
//! launch_mass: 1.0e26        # kg
//! launch_radius: 7.0e9       # m
//! ```

use serde::{Deserialize, Serialize};
use units::Length;

use crate::error::{Result, SimError};
use crate::forces::G;

/// Window extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// m³ kg⁻¹ s⁻²
    pub gravitational_constant: f64,
    pub collisions_enabled: bool,
    /// Simulated seconds per wall-clock second
    pub time_multiplier: f64,
    pub target_fps: u32,
    /// Launch speed (m/s) per pixel of slingshot drag
    pub slingshot_power: f64,
    pub pixels_per_au: f64,
    pub window: WindowSize,
    /// Mass of a player-launched body (kg)
    pub launch_mass: f64,
    /// Radius of a player-launched body (m)
    pub launch_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            collisions_enabled: true,
            time_multiplier: 1.0e6,
            target_fps: 60,
            slingshot_power: 2.0e2,
            pixels_per_au: 200.0,
            window: WindowSize::default(),
            launch_mass: 1.0e26,
            launch_radius: 7.0e9,
        }
    }
}

impl SimulationConfig {
    /// Parses a YAML document and validates it
    ///
    /// # Examples
    ///
    /// ```
    /// use slingshot::config::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_yaml_str("time_multiplier: 2.0e6\ncollisions_enabled: false").unwrap();
    /// assert_eq!(config.time_multiplier, 2.0e6);
    /// assert!(!config.collisions_enabled);
    /// assert_eq!(config.target_fps, 60);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SimulationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SimError::Config(format!("{name} must be positive and finite, got {v}")))
            }
        };

        positive("gravitational_constant", self.gravitational_constant)?;
        positive("time_multiplier", self.time_multiplier)?;
        positive("slingshot_power", self.slingshot_power)?;
        positive("pixels_per_au", self.pixels_per_au)?;
        positive("launch_mass", self.launch_mass)?;
        positive("launch_radius", self.launch_radius)?;

        if self.target_fps == 0 {
            return Err(SimError::Config("target_fps must be at least 1".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SimError::Config(format!(
                "window must have a non-zero size, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    /// Nominal frame time in seconds at the target frame rate
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.target_fps as f64
    }

    /// Screen pixels per meter of world space
    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_au / Length::from_au(1.0).to_meters()
    }

    /// World extent covered by the window, in meters
    pub fn world_extent(&self) -> (Length, Length) {
        let ppm = self.pixels_per_meter();
        (
            Length::from_meters(self.window.width as f64 / ppm),
            Length::from_meters(self.window.height as f64 / ppm),
        )
    }
}
