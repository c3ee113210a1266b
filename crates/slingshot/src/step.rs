//! One simulation tick over the full body list
//!
//! For each live body in list order:
//! 1. Scan every other live body
//! 2. If the pair collides, merge it and stop scanning (the body is not
//!    moved this tick)
//! 3. Otherwise add the pair's gravitational kick to the body's velocity
//! 4. After a complete scan, drift the body with its net velocity
//!
//! A body takes part in at most one merge per tick: the absorbed body is
//! flagged deleted, and the survivor is left out of every later collision
//! check until the next tick. It still pulls on later bodies, and when it
//! was the partner rather than the scanner it still scans and drifts.
//! Absorbed bodies stay in the list until the purge at the very end of the
//! tick, so indices stay valid for the whole pass.
//!
//! Bodies earlier in the list have already moved when later bodies scan
//! them. Stopping a body's scan at its first merge drops the remaining
//! kicks for that tick; both approximations are accepted.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::body::{Body, BodyId};
use crate::collisions::{colliding, resolve, MergeEvent};
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::forces::{ForceModel, NewtonianGravity};
use crate::integrator::{Euler, Integrator};
use crate::timestep::Timestep;

/// How the scan of one body ended
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanOutcome {
    /// Every partner was visited; the body is ready to drift
    Completed,
    /// The scan stopped at a merge
    Merged(MergeEvent),
}

/// Drives ticks with a fixed force model, integrator and collision setting
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::step::StepController;
/// use slingshot::timestep::Timestep;
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let mut bodies = vec![
///     spawn(&mut ids, SpawnParams::new(Point2::new(0.0, 0.0), Vector2::zeros(), 2.0e30)).unwrap(),
///     spawn(&mut ids, SpawnParams::new(Point2::new(1.5e11, 0.0), Vector2::new(0.0, 3.0e4), 6.0e24)).unwrap(),
/// ];
///
/// let controller = StepController::new();
/// let events = controller.step(&mut bodies, &Timestep::new(1.0 / 60.0, 1.0e6).unwrap());
///
/// assert!(events.is_empty());
/// assert_eq!(bodies.len(), 2);
/// ```
pub struct StepController {
    force: Box<dyn ForceModel>,
    integrator: Box<dyn Integrator>,
    collisions_enabled: bool,
}

impl StepController {
    /// Newtonian gravity with the standard constant, Euler drift, collisions on
    pub fn new() -> Self {
        Self {
            force: Box::new(NewtonianGravity::new()),
            integrator: Box::new(Euler),
            collisions_enabled: true,
        }
    }

    /// Gravity constant and collision flag taken from the configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new()
            .with_force(NewtonianGravity::with_constant(config.gravitational_constant))
            .with_collisions(config.collisions_enabled)
    }

    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.force = Box::new(force);
        self
    }

    pub fn with_integrator<I: Integrator + 'static>(mut self, integrator: I) -> Self {
        self.integrator = Box::new(integrator);
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.collisions_enabled = enabled;
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }

    pub fn force(&self) -> &dyn ForceModel {
        self.force.as_ref()
    }

    /// Advance every body by one tick and purge the ones deleted on the way
    ///
    /// # Returns
    ///
    /// Merge events in the order they happened
    pub fn step(&self, bodies: &mut Vec<Body>, timestep: &Timestep) -> Vec<MergeEvent> {
        quarantine_non_finite(bodies);

        let dt = timestep.simulated_seconds();
        let mut events = Vec::new();
        let mut merged: HashSet<BodyId> = HashSet::new();

        for i in 0..bodies.len() {
            if bodies[i].is_deleted() {
                continue;
            }

            match self.scan(bodies, i, dt, &merged) {
                ScanOutcome::Merged(event) => {
                    debug!(
                        "body {} absorbed body {} (combined mass {:e} kg)",
                        event.survivor.0, event.absorbed.0, event.combined_mass
                    );
                    merged.insert(event.survivor);
                    merged.insert(event.absorbed);
                    drop_if_non_finite(bodies, event.survivor);
                    events.push(event);
                }
                ScanOutcome::Completed => {
                    let body = &mut bodies[i];
                    if let Err(err) = self.integrator.advance(body, timestep) {
                        warn!("{err}; dropping it");
                        body.mark_deleted();
                    }
                }
            }
        }

        let purged = purge_deleted(bodies);
        trace!(
            "tick of {dt:e} s: {} merges, {purged} purged, {} live",
            events.len(),
            bodies.len()
        );

        events
    }

    /// Pairwise pass for the body at `i`
    fn scan(
        &self,
        bodies: &mut [Body],
        i: usize,
        dt: f64,
        merged: &HashSet<BodyId>,
    ) -> ScanOutcome {
        let may_merge = self.collisions_enabled && !merged.contains(&bodies[i].id);

        for j in 0..bodies.len() {
            if j == i || bodies[j].is_deleted() {
                continue;
            }

            if may_merge && !merged.contains(&bodies[j].id) && colliding(&bodies[i], &bodies[j]) {
                let (a, b) = pair_mut(bodies, i, j);
                return ScanOutcome::Merged(resolve(a, b));
            }

            match self.force.velocity_delta(&bodies[i], &bodies[j], dt) {
                Ok(dv) => bodies[i].velocity += dv,
                Err(err) => warn!("{err}; skipping pair"),
            }
        }

        ScanOutcome::Completed
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance `bodies` by one tick with standard gravity and collisions enabled
///
/// # Arguments
///
/// * `bodies` - Live body list, mutated in place
/// * `dt` - Wall-clock frame time in seconds
/// * `time_multiplier` - Simulated seconds per wall-clock second
///
/// # Returns
///
/// The tick's merge events, or `InvalidTimestep` (with `bodies` untouched)
/// when either time value is non-positive or not finite
pub fn step(bodies: &mut Vec<Body>, dt: f64, time_multiplier: f64) -> Result<Vec<MergeEvent>> {
    let timestep = Timestep::new(dt, time_multiplier)?;
    Ok(StepController::new().step(bodies, &timestep))
}

/// Remove every body flagged deleted, returning how many went
pub fn purge_deleted(bodies: &mut Vec<Body>) -> usize {
    let before = bodies.len();
    bodies.retain(|b| !b.is_deleted());
    before - bodies.len()
}

/// Flag bodies that arrive at the tick with NaN or infinite state
fn quarantine_non_finite(bodies: &mut [Body]) {
    bodies
        .iter_mut()
        .filter(|b| !b.is_deleted() && !b.has_finite_state())
        .for_each(|b| {
            warn!("{}; dropping it", SimError::NonFiniteState { id: b.id });
            b.mark_deleted();
        });
}

/// Drop the survivor of a merge whose combined velocity overflowed
fn drop_if_non_finite(bodies: &mut [Body], id: BodyId) {
    if let Some(body) = bodies.iter_mut().find(|b| b.id == id) {
        if !body.has_finite_state() {
            warn!("{}; dropping it", SimError::NonFiniteState { id });
            body.mark_deleted();
        }
    }
}

/// Disjoint mutable borrows of two entries, returned in `(i, j)` order
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
