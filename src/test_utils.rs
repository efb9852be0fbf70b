//! Test utilities for plugin testing

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::config::SimulationConfig;

/// Creates a minimal test app with core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app
}

/// A small seeded configuration whose fixed timestep never elapses during a test,
/// so steps only happen when a test runs the systems itself
pub fn test_config(seed: Option<u64>) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.physics.body_count = 5;
    config.physics.initial_seed = seed;
    config.driver.frame_interval = 3600.0;
    config
}
