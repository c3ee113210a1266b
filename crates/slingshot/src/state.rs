use std::collections::VecDeque;

use log::{debug, warn};
use nalgebra::Vector2;
use units::Time;

use crate::body::{spawn, Body, BodyId, IdAllocator, SpawnParams};
use crate::collisions::MergeEvent;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::launch::LaunchCommand;
use crate::step::StepController;
use crate::timestep::Timestep;

/// Complete state of a running simulation
///
/// Owns the live body list, the id counter, launches waiting for the next
/// tick boundary and the simulated clock.
pub struct Simulation {
    config: SimulationConfig,
    bodies: Vec<Body>,
    ids: IdAllocator,
    pending_launches: VecDeque<LaunchCommand>,
    /// Simulated time elapsed since the first tick
    elapsed: Time,
    ticks: u64,
    controller: StepController,
}

impl Simulation {
    /// Creates an empty simulation
    ///
    /// # Examples
    ///
    /// ```
    /// use slingshot::config::SimulationConfig;
    /// use slingshot::state::Simulation;
    ///
    /// let sim = Simulation::new(SimulationConfig::default()).unwrap();
    ///
    /// assert_eq!(sim.body_count(), 0);
    /// assert_eq!(sim.elapsed().to_seconds(), 0.0);
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let controller = StepController::from_config(&config);
        Ok(Self {
            config,
            bodies: Vec::new(),
            ids: IdAllocator::new(),
            pending_launches: VecDeque::new(),
            elapsed: Time::zero(),
            ticks: 0,
            controller,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Creates a body with a fresh id without adding it to the live set
    pub fn spawn(&mut self, params: SpawnParams) -> Result<Body> {
        spawn(&mut self.ids, params)
    }

    /// Creates a body and adds it to the live set
    ///
    /// Meant for setup between ticks. Invalid parameters are rejected and
    /// the live set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use slingshot::body::SpawnParams;
    /// use slingshot::config::SimulationConfig;
    /// use slingshot::state::Simulation;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    ///
    /// let id = sim.add_body(SpawnParams::new(Point2::new(1.5e11, 0.0), Vector2::zeros(), 6.0e24)).unwrap();
    /// assert!(sim.get_body(id).is_some());
    ///
    /// assert!(sim.add_body(SpawnParams::new(Point2::origin(), Vector2::zeros(), -5.0)).is_err());
    /// assert_eq!(sim.body_count(), 1);
    /// ```
    pub fn add_body(&mut self, params: SpawnParams) -> Result<BodyId> {
        let body = self.spawn(params)?;
        self.bodies.push(body);
        Ok(body.id)
    }

    /// Queues a player launch for insertion at the start of the next tick
    pub fn enqueue_launch(&mut self, launch: LaunchCommand) {
        self.pending_launches.push_back(launch);
    }

    pub fn pending_launches(&self) -> usize {
        self.pending_launches.len()
    }

    /// Advances one tick using the configured time multiplier
    ///
    /// Queued launches join the live set first. An invalid `dt` rejects the
    /// tick before anything changes, launches included.
    ///
    /// # Arguments
    ///
    /// * `dt` - Wall-clock seconds since the previous frame
    ///
    /// # Returns
    ///
    /// Merge events produced by the tick
    pub fn tick(&mut self, dt: f64) -> Result<Vec<MergeEvent>> {
        let timestep = Timestep::new(dt, self.config.time_multiplier)?;

        self.insert_pending_launches();
        let events = self.controller.step(&mut self.bodies, &timestep);

        self.elapsed += timestep.simulated();
        self.ticks += 1;
        Ok(events)
    }

    fn insert_pending_launches(&mut self) {
        while let Some(launch) = self.pending_launches.pop_front() {
            match self.add_body(launch.to_spawn_params()) {
                Ok(id) => debug!("launched body {}", id.0),
                Err(err) => warn!("launch rejected: {err}"),
            }
        }
    }

    /// Changes how many simulated seconds pass per wall-clock second
    pub fn set_time_multiplier(&mut self, time_multiplier: f64) -> Result<()> {
        if !(time_multiplier.is_finite() && time_multiplier > 0.0) {
            return Err(SimError::InvalidTimestep {
                dt: self.config.frame_dt(),
                time_multiplier,
            });
        }
        self.config.time_multiplier = time_multiplier;
        Ok(())
    }

    pub fn time_multiplier(&self) -> f64 {
        self.config.time_multiplier
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.config.collisions_enabled = enabled;
        self.controller.set_collisions_enabled(enabled);
    }

    /// Live bodies in scan order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Simulated time covered by all ticks so far
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    /// Number of ticks completed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the total mass of all live bodies (kg)
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all live bodies
    ///
    /// Conserved exactly by mergers; gravity kicks are applied one-sided per
    /// tick, so it drifts between mergers.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Pairwise potential energy under the configured force model
    pub fn potential_energy(&self) -> f64 {
        let force = self.controller.force();
        self.bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| self.bodies[i + 1..].iter().map(move |b| force.pair_potential(a, b)))
            .sum()
    }
}
