//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the engine and drives it from `FixedUpdate`, one step per tick. The
//! fixed timestep is the configured frame interval, so the wall-clock cadence
//! is set here while each step is always one simulated second.

use crate::prelude::*;

mod actions;
mod physics;

pub use actions::handle_simulation_commands;
pub use physics::{advance_simulation, log_simulation_state, spawn_simulation_bodies};

use bevy::state::app::StatesPlugin;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Advance,
    Report,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let mut config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        if let Err(e) = config.driver.validate() {
            warn!("{}. Falling back to the default driver settings", e);
            config.driver = DriverConfig::default();
        }

        let simulation = match Simulation::from_config(&config.physics) {
            Ok(simulation) => simulation,
            Err(e) => {
                error!("Invalid physics configuration: {}. Using default ranges", e);
                // Keep the stored config in step with what the engine runs
                config.physics = PhysicsConfig {
                    body_count: config.physics.body_count,
                    detect_collisions: config.physics.detect_collisions,
                    initial_seed: config.physics.initial_seed,
                    ..PhysicsConfig::default()
                };
                Simulation::from_config(&config.physics).unwrap_or_default()
            }
        };

        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.insert_resource(SharedRng::from_optional_seed(config.physics.initial_seed));
        app.insert_resource(SimulationState::new(simulation));
        app.insert_resource(DriverSettings::from(&config.driver));
        app.insert_resource(Time::<Fixed>::from_seconds(config.driver.frame_interval));
        app.insert_resource(config);

        app.init_state::<AppState>();

        app.add_event::<SimulationCommand>();
        app.add_event::<CollisionDetected>();
        app.add_event::<BodiesMerged>();

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Advance, PhysicsSet::Report).chain(),
        );

        app.add_systems(Startup, spawn_simulation_bodies);
        app.add_systems(
            FixedUpdate,
            (
                advance_simulation.in_set(PhysicsSet::Advance),
                log_simulation_state.in_set(PhysicsSet::Report),
            )
                .run_if(in_state(AppState::Running)),
        );
        app.add_systems(Update, handle_simulation_commands);
    }
}
