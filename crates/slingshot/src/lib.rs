//! Real-time N-body gravity with inelastic mergers
//!
//! Bodies attract each other pairwise, merge when their disks touch and can
//! be added mid-run through slingshot launches. Rendering, windowing and
//! input polling belong to the host; it feeds frame times and launch
//! commands in and reads body state and merge events out.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod launch;
pub mod scenario;
pub mod state;
pub mod step;
pub mod timestep;

#[cfg(test)]
mod scenario_test;

pub use body::{Body, BodyId, Colour, SpawnParams};
pub use collisions::MergeEvent;
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use state::Simulation;
pub use step::{step, StepController};
pub use timestep::Timestep;
