//! Centralized event definitions
//!
//! Events are how the driver and anything layered on top of it (a UI, a
//! recorder) talk to each other without sharing systems.

use crate::physics::{CollisionPair, MergeOutcome};
use bevy::prelude::*;

/// Requests sent to the simulation driver
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    /// Discard the current bodies and generate a new random set
    Restart,
    TogglePause,
    /// Advance exactly one second, whether running or paused
    Step,
    ToggleCollisionDetection,
    Quit,
}

/// A step stopped short because two bodies came within the collision distance
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionDetected {
    pub pair: CollisionPair,
    /// Simulated seconds when the collision was found
    pub time: u64,
}

/// The driver merged a colliding pair
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BodiesMerged {
    pub outcome: MergeOutcome,
    pub remaining: usize,
}
