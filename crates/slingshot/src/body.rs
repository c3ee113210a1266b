use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::error::{Result, SimError};

/// Default physical radius of a spawned body in meters (7 × 10⁹ m)
pub const DEFAULT_RADIUS: f64 = 7.0e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// RGB colour carried through for the renderer; the physics never reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    pub const WHITE: Colour = Colour(255, 255, 255);
    pub const RED: Colour = Colour(255, 0, 0);
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,              // kg
    pub radius: f64,            // m (disk radius for collisions)
    pub position: Point2<f64>,  // m
    pub velocity: Vector2<f64>, // m/s
    pub colour: Colour,
    pub is_target: bool,
    pub player_spawned: bool,
    pub(crate) is_deleted: bool,
}

impl Body {
    /// Whether the body has been absorbed or dropped and awaits purging
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Flags the body for removal at the end of the current tick. Irreversible.
    pub(crate) fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    pub fn distance_squared_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Typed view of the mass
    pub fn mass(&self) -> Mass {
        Mass::from_kg(self.mass)
    }

    /// Typed view of the radius
    pub fn radius(&self) -> Length {
        Length::from_meters(self.radius)
    }

    /// True when every position and velocity component is finite
    pub fn has_finite_state(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }
}

/// Monotonic source of body ids
///
/// Ids are never reused, even after the body they named is purged.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next id and advances the counter
    pub fn allocate(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// Everything needed to create a body except its id
///
/// # Examples
///
/// ```
/// use slingshot::body::{Colour, SpawnParams};
/// use nalgebra::{Point2, Vector2};
///
/// let sun = SpawnParams::new(Point2::new(3.0e11, 3.0e11), Vector2::zeros(), 2.0e30)
///     .with_colour(Colour::RED)
///     .as_target();
///
/// assert!(sun.is_target);
/// assert!(!sun.player_spawned);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub velocity: Vector2<f64>,
    pub position: Point2<f64>,
    pub mass: f64,
    pub radius: f64,
    pub colour: Colour,
    pub is_target: bool,
    pub player_spawned: bool,
}

impl SpawnParams {
    /// White, untagged body with the default radius
    pub fn new(position: Point2<f64>, velocity: Vector2<f64>, mass: f64) -> Self {
        Self {
            velocity,
            position,
            mass,
            radius: DEFAULT_RADIUS,
            colour: Colour::WHITE,
            is_target: false,
            player_spawned: false,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn as_target(mut self) -> Self {
        self.is_target = true;
        self
    }

    pub fn as_player_spawned(mut self) -> Self {
        self.player_spawned = true;
        self
    }

    /// Checks the parameters a live body must satisfy
    pub fn validate(&self) -> Result<()> {
        let valid_shape = self.mass.is_finite()
            && self.mass > 0.0
            && self.radius.is_finite()
            && self.radius > 0.0;
        let finite_motion = self.position.coords.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite());

        if valid_shape && finite_motion {
            Ok(())
        } else {
            Err(SimError::InvalidSpawnParameters {
                mass: self.mass,
                radius: self.radius,
            })
        }
    }
}

/// Creates a body with a fresh id
///
/// Parameters are validated before an id is drawn, so a rejected spawn
/// leaves the allocator untouched.
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::error::SimError;
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let earth = spawn(&mut ids, SpawnParams::new(Point2::origin(), Vector2::zeros(), 6.0e24)).unwrap();
/// assert_eq!(earth.id.0, 0);
///
/// let bad = spawn(&mut ids, SpawnParams::new(Point2::origin(), Vector2::zeros(), -5.0));
/// assert!(matches!(bad, Err(SimError::InvalidSpawnParameters { .. })));
/// assert_eq!(ids.issued(), 1);
/// ```
pub fn spawn(ids: &mut IdAllocator, params: SpawnParams) -> Result<Body> {
    params.validate()?;

    Ok(Body {
        id: ids.allocate(),
        mass: params.mass,
        radius: params.radius,
        position: params.position,
        velocity: params.velocity,
        colour: params.colour,
        is_target: params.is_target,
        player_spawned: params.player_spawned,
        is_deleted: false,
    })
}
