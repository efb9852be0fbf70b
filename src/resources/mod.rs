use crate::config::DriverConfig;
use crate::physics::Simulation;
use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Seedable random source used to generate bodies
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// The engine, owned by the app world
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default)]
pub struct SimulationState(pub Simulation);

impl SimulationState {
    pub fn new(simulation: Simulation) -> Self {
        Self(simulation)
    }
}

/// How the driver schedules and reacts to steps
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DriverSettings {
    pub auto_merge: bool,
    pub max_steps: Option<u64>,
    pub log_state: bool,
    /// Steps that advanced the clock since the bodies were last created
    pub steps_taken: u64,
    /// Set once `AppExit` has been written for the step limit
    pub exit_requested: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self::from(&DriverConfig::default())
    }
}

impl From<&DriverConfig> for DriverSettings {
    fn from(config: &DriverConfig) -> Self {
        Self {
            auto_merge: config.auto_merge,
            max_steps: config.max_steps,
            log_state: config.log_state,
            steps_taken: 0,
            exit_requested: false,
        }
    }
}

impl DriverSettings {
    pub fn limit_reached(&self) -> bool {
        self.max_steps
            .is_some_and(|max_steps| self.steps_taken >= max_steps)
    }
}
