//! Collision detection and resolution
//!
//! Detection is a pure disk-overlap test; resolution merges the pair in
//! place, conserving mass and momentum, and flags the absorbed body for the
//! end-of-tick purge.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{colliding, overlapping_pairs};
pub use resolution::{resolve, MergeEvent};
