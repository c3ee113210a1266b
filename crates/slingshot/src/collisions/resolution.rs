//! Inelastic merging of two colliding bodies
//!
//! The heavier body survives in place and absorbs the other:
//! - Mass: m' = m_a + m_b
//! - Momentum: v' = (m_a v_a + m_b v_b) / (m_a + m_b)
//! - Radius: r' = r_survivor + floor(r_absorbed / 4)
//!
//! The radius grows sub-linearly so repeated mergers do not produce runaway
//! disks. Position is left where the survivor already is.

use crate::body::{Body, BodyId};

/// Outcome of one merge, for scenario logic layered above the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeEvent {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    /// Mass of the survivor after the merge (kg)
    pub combined_mass: f64,
    pub absorbed_was_target: bool,
    pub survivor_was_target: bool,
    /// Either party was launched by the player
    pub player_spawned_involved: bool,
}

impl MergeEvent {
    /// A player-launched body and a target body were the two parties
    pub fn is_target_strike(&self) -> bool {
        self.player_spawned_involved && (self.absorbed_was_target || self.survivor_was_target)
    }
}

/// Which of the pair survives: larger mass, lower id on an exact tie
fn survives(a: &Body, b: &Body) -> bool {
    a.mass > b.mass || (a.mass == b.mass && a.id < b.id)
}

/// Merge two colliding bodies in place
///
/// The survivor keeps its id and position; the absorbed body is flagged
/// deleted and must not be read for physics again.
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::collisions::resolve;
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let mut a = spawn(&mut ids, SpawnParams::new(Point2::new(0.0, 0.0), Vector2::new(0.0, 5.0), 1.0)).unwrap();
/// let mut b = spawn(&mut ids, SpawnParams::new(Point2::new(1.0, 0.0), Vector2::new(0.0, 2.0), 2.0)).unwrap();
///
/// let event = resolve(&mut a, &mut b);
///
/// assert_eq!(event.survivor, b.id);
/// assert!(a.is_deleted());
/// assert_eq!(b.mass, 3.0);
/// assert!((b.velocity.y - 3.0).abs() < 1e-12);
/// ```
pub fn resolve(a: &mut Body, b: &mut Body) -> MergeEvent {
    debug_assert_ne!(a.id, b.id, "a body cannot merge with itself");
    debug_assert!(!a.is_deleted() && !b.is_deleted());

    let (survivor, absorbed) = if survives(a, b) { (a, b) } else { (b, a) };

    let combined_mass = survivor.mass + absorbed.mass;
    survivor.velocity = (survivor.momentum() + absorbed.momentum()) / combined_mass;
    survivor.mass = combined_mass;
    survivor.radius += (absorbed.radius / 4.0).floor();

    absorbed.mark_deleted();

    MergeEvent {
        survivor: survivor.id,
        absorbed: absorbed.id,
        combined_mass,
        absorbed_was_target: absorbed.is_target,
        survivor_was_target: survivor.is_target,
        player_spawned_involved: survivor.player_spawned || absorbed.player_spawned,
    }
}
