//! Slingshot launches
//!
//! The player presses on the screen, drags away from the press point and
//! releases. The new body appears at the press point and flies opposite to
//! the drag, faster the longer the drag. Nothing here touches the live body
//! list: a release produces a `LaunchCommand` that the `Simulation` queues
//! and inserts at the next tick boundary.

use log::debug;
use nalgebra::{Point2, Vector2};
use units::Velocity;

use crate::body::{Colour, SpawnParams};
use crate::config::SimulationConfig;

/// Conversion between screen pixels and world meters
///
/// Screen y grows downward from the top edge; world y grows upward from the
/// bottom edge.
///
/// # Examples
///
/// ```
/// use slingshot::launch::ViewScale;
/// use nalgebra::Point2;
///
/// // 200 px per AU in an 800 px tall window
/// let scale = ViewScale::new(200.0 / 1.5e11, 800.0);
/// let world = scale.to_world(Point2::new(200.0, 600.0));
///
/// assert!((world.x - 1.5e11).abs() < 1.0);
/// assert!((world.y - 1.5e11).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale {
    pixels_per_meter: f64,
    window_height: f64,
}

impl ViewScale {
    pub fn new(pixels_per_meter: f64, window_height: f64) -> Self {
        Self {
            pixels_per_meter,
            window_height,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.pixels_per_meter(), config.window.height as f64)
    }

    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }

    /// Screen pixel to world position
    pub fn to_world(&self, pixel: Point2<f64>) -> Point2<f64> {
        Point2::new(
            pixel.x / self.pixels_per_meter,
            (self.window_height - pixel.y) / self.pixels_per_meter,
        )
    }

    /// World position to screen pixel
    pub fn to_screen(&self, world: Point2<f64>) -> Point2<f64> {
        Point2::new(
            world.x * self.pixels_per_meter,
            self.window_height - world.y * self.pixels_per_meter,
        )
    }

    /// World length (e.g. a body radius) to pixels
    pub fn length_to_pixels(&self, meters: f64) -> f64 {
        meters * self.pixels_per_meter
    }
}

/// A body the player asked for, waiting for the next tick boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchCommand {
    pub velocity: Vector2<f64>,
    pub position: Point2<f64>,
    pub mass: f64,
    pub radius: f64,
    pub colour: Colour,
}

impl LaunchCommand {
    /// Spawn parameters tagged as player-launched
    pub fn to_spawn_params(&self) -> SpawnParams {
        SpawnParams::new(self.position, self.velocity, self.mass)
            .with_radius(self.radius)
            .with_colour(self.colour)
            .as_player_spawned()
    }

    pub fn speed(&self) -> Velocity {
        Velocity::from_meters_per_sec(self.velocity.magnitude())
    }
}

/// Where a launch would go if released now, for drawing the aim arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchPreview {
    /// Press point in pixels
    pub anchor: Point2<f64>,
    /// Tip of the aim arrow in pixels: the drag mirrored through the anchor
    pub arrow_tip: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub speed: Velocity,
}

/// Press-drag-release gesture state
///
/// # Examples
///
/// ```
/// use slingshot::config::SimulationConfig;
/// use slingshot::launch::Slingshot;
/// use nalgebra::Point2;
///
/// let mut sling = Slingshot::from_config(&SimulationConfig::default());
///
/// sling.press(Point2::new(400.0, 400.0));
/// let launch = sling.release(Point2::new(350.0, 400.0)).unwrap();
///
/// // Dragged 50 px left, so it flies right at 50 * 200 m/s
/// assert_eq!(launch.velocity.x, 10_000.0);
/// assert_eq!(launch.velocity.y, 0.0);
/// assert!(sling.release(Point2::new(0.0, 0.0)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Slingshot {
    anchor: Option<Point2<f64>>,
    /// m/s per pixel of drag
    power: f64,
    mass: f64,
    radius: f64,
    colour: Colour,
    scale: ViewScale,
}

impl Slingshot {
    pub fn new(power: f64, mass: f64, radius: f64, scale: ViewScale) -> Self {
        Self {
            anchor: None,
            power,
            mass,
            radius,
            colour: Colour::WHITE,
            scale,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.slingshot_power,
            config.launch_mass,
            config.launch_radius,
            ViewScale::from_config(config),
        )
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Starts a gesture at `pixel`, replacing any gesture in progress
    pub fn press(&mut self, pixel: Point2<f64>) {
        self.anchor = Some(pixel);
    }

    /// Abandons the gesture in progress; returns whether there was one
    pub fn cancel(&mut self) -> bool {
        let had_anchor = self.anchor.take().is_some();
        if had_anchor {
            debug!("launch cancelled");
        }
        had_anchor
    }

    pub fn is_aiming(&self) -> bool {
        self.anchor.is_some()
    }

    /// Aim state for the cursor at `pixel`, if a gesture is in progress
    pub fn preview(&self, pixel: Point2<f64>) -> Option<LaunchPreview> {
        let anchor = self.anchor?;
        let velocity = self.launch_velocity(anchor, pixel);

        Some(LaunchPreview {
            anchor,
            arrow_tip: Point2::from(2.0 * anchor.coords - pixel.coords),
            velocity,
            speed: Velocity::from_meters_per_sec(velocity.magnitude()),
        })
    }

    /// Ends the gesture at `pixel`
    ///
    /// Returns `None` when no press preceded the release.
    pub fn release(&mut self, pixel: Point2<f64>) -> Option<LaunchCommand> {
        let anchor = self.anchor.take()?;

        let command = LaunchCommand {
            velocity: self.launch_velocity(anchor, pixel),
            position: self.scale.to_world(anchor),
            mass: self.mass,
            radius: self.radius,
            colour: self.colour,
        };
        debug!(
            "launch from ({:.3e}, {:.3e}) m at {:.1} km/s",
            command.position.x,
            command.position.y,
            command.speed().to_km_per_sec()
        );
        Some(command)
    }

    /// Opposite to the drag; screen y is flipped into world y
    fn launch_velocity(&self, anchor: Point2<f64>, cursor: Point2<f64>) -> Vector2<f64> {
        let drag = anchor - cursor;
        Vector2::new(drag.x * self.power, -drag.y * self.power)
    }
}
