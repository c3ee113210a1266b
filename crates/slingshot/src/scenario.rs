//! Seed scenarios and scenario files
//!
//! A scenario is the initial body list plus the configuration it runs
//! under. Scenario files are YAML:
//!
//! ```yaml
//! config:
//!   time_multiplier: 1.0e6
//! bodies:
//!   - position_au: [2.0, 2.0]
//!     mass: 2.0e30
//!     colour: [255, 0, 0]
//!     target: true
//!   - position_au: [2.0, 1.0]
//!     velocity: [30000.0, 0.0]
//!     mass: 6.0e24
//! random_field: { count: 20, seed: 7 }
//! launches:
//!   - { tick: 10, press: [400.0, 200.0], release: [380.0, 220.0] }
//! ```

use log::debug;
use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{Length, AU_TO_M};

use crate::body::{Colour, SpawnParams, DEFAULT_RADIUS};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::state::Simulation;

/// Speed bound for randomly seeded bodies, per axis (m/s)
const RANDOM_SPEED_LIMIT: f64 = 1.0e3;
const RANDOM_MASS_MIN: f64 = 1.0e10;
const RANDOM_MASS_MAX: f64 = 1.0e30;

/// A sun with one heavy and one Earth-like planet on opposite sides
///
/// The planets start 1 AU above and below the sun moving in opposite
/// directions at 30 km/s. The sun is the target.
///
/// # Examples
///
/// ```
/// use slingshot::scenario::sun_with_two_planets;
///
/// let bodies = sun_with_two_planets();
/// assert_eq!(bodies.len(), 3);
/// assert!(bodies[1].is_target);
/// ```
pub fn sun_with_two_planets() -> Vec<SpawnParams> {
    let au = AU_TO_M;
    vec![
        SpawnParams::new(
            Point2::new(2.0 * au, 3.0 * au),
            Vector2::new(-30.0e3, 0.0),
            6.0e28,
        ),
        SpawnParams::new(Point2::new(2.0 * au, 2.0 * au), Vector2::zeros(), 2.0e30)
            .with_colour(Colour::RED)
            .as_target(),
        SpawnParams::new(
            Point2::new(2.0 * au, 1.0 * au),
            Vector2::new(30.0e3, 0.0),
            6.0e24,
        ),
    ]
}

/// `count` bodies scattered uniformly over a `width` × `height` field
///
/// Each gets a velocity component uniform in ±1 km/s, a mass uniform in
/// [10¹⁰, 10³⁰] kg, a random colour and the default radius.
pub fn random_field<R: Rng>(
    rng: &mut R,
    count: usize,
    width: Length,
    height: Length,
) -> Vec<SpawnParams> {
    (0..count)
        .map(|_| {
            let position = Point2::new(
                rng.random_range(0.0..=width.to_meters()),
                rng.random_range(0.0..=height.to_meters()),
            );
            let velocity = Vector2::new(
                rng.random_range(-RANDOM_SPEED_LIMIT..=RANDOM_SPEED_LIMIT),
                rng.random_range(-RANDOM_SPEED_LIMIT..=RANDOM_SPEED_LIMIT),
            );
            let mass = rng.random_range(RANDOM_MASS_MIN..=RANDOM_MASS_MAX);
            let colour = Colour(rng.random(), rng.random(), rng.random());

            SpawnParams::new(position, velocity, mass).with_colour(colour)
        })
        .collect()
}

/// `random_field` driven by a seeded ChaCha generator, for repeatable runs
///
/// # Examples
///
/// ```
/// use slingshot::scenario::seeded_random_field;
/// use units::Length;
///
/// let a = seeded_random_field(42, 10, Length::from_au(4.0), Length::from_au(4.0));
/// let b = seeded_random_field(42, 10, Length::from_au(4.0), Length::from_au(4.0));
/// assert_eq!(a, b);
/// ```
pub fn seeded_random_field(
    seed: u64,
    count: usize,
    width: Length,
    height: Length,
) -> Vec<SpawnParams> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    random_field(&mut rng, count, width, height)
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// One body as written in a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Position in AU from the bottom-left corner of the field
    pub position_au: [f64; 2],
    /// m/s
    #[serde(default)]
    pub velocity: [f64; 2],
    /// kg
    pub mass: f64,
    /// m
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub colour: Colour,
    #[serde(default)]
    pub target: bool,
}

impl BodyConfig {
    pub fn to_spawn_params(&self) -> SpawnParams {
        let [x, y] = self.position_au;
        let position = Point2::new(
            Length::from_au(x).to_meters(),
            Length::from_au(y).to_meters(),
        );
        let params = SpawnParams::new(position, Vector2::from(self.velocity), self.mass)
            .with_radius(self.radius)
            .with_colour(self.colour);

        if self.target {
            params.as_target()
        } else {
            params
        }
    }
}

/// Randomly generated bodies added after the listed ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFieldConfig {
    pub count: usize,
    pub seed: u64,
}

/// A slingshot gesture replayed at a given tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedLaunch {
    /// Tick index before which the launch is queued
    pub tick: u64,
    /// Press point in pixels
    pub press: [f64; 2],
    /// Release point in pixels
    pub release: [f64; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub config: SimulationConfig,
    pub bodies: Vec<BodyConfig>,
    pub random_field: Option<RandomFieldConfig>,
    pub launches: Vec<ScriptedLaunch>,
}

impl ScenarioFile {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let scenario: ScenarioFile = serde_yaml::from_str(yaml)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    /// Spawn parameters for every listed and randomly generated body
    pub fn spawn_params(&self) -> Vec<SpawnParams> {
        let listed = self.bodies.iter().map(BodyConfig::to_spawn_params);

        let random = self
            .random_field
            .map(|field| {
                let (width, height) = self.config.world_extent();
                seeded_random_field(field.seed, field.count, width, height)
            })
            .unwrap_or_default();

        listed.chain(random).collect()
    }

    /// Builds a simulation holding the scenario's bodies
    ///
    /// Fails on the first body with invalid parameters.
    pub fn build(&self) -> Result<Simulation> {
        let mut simulation = Simulation::new(self.config.clone())?;
        for params in self.spawn_params() {
            simulation.add_body(params)?;
        }
        debug!("scenario loaded with {} bodies", simulation.body_count());
        Ok(simulation)
    }
}
