//! Gravwell library
//!
//! A point-mass Newtonian gravity engine with optional collision merging,
//! plus a headless Bevy driver that steps it on a fixed timestep.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
