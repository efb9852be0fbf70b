use crate::physics::error::ConfigError;
use crate::physics::math::Scalar;
use crate::physics::ranges::{
    ConfigRanges, DEFAULT_COLLISION_DISTANCE, DEFAULT_GRAVITATIONAL_CONSTANT, ValueRange,
};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "GRAVWELL";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub driver: DriverConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub body_count: usize,
    pub gravitational_constant: Scalar,
    pub mass_range: ValueRange,
    pub position_range: ValueRange,
    pub velocity_range: ValueRange,
    pub collision_distance: Scalar,
    pub detect_collisions: bool,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            body_count: 3,
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            mass_range: ValueRange::new(4500.0, 5000.0),
            position_range: ValueRange::new(-200.0, 200.0),
            velocity_range: ValueRange::new(-0.2, 0.2),
            collision_distance: DEFAULT_COLLISION_DISTANCE,
            detect_collisions: false,
            initial_seed: None,
        }
    }
}

impl PhysicsConfig {
    /// Validates the numeric settings and converts them for the engine
    pub fn ranges(&self) -> Result<ConfigRanges, ConfigError> {
        ConfigRanges::new(
            self.mass_range,
            self.position_range,
            self.velocity_range,
            self.gravitational_constant,
            self.collision_distance,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// Wall-clock seconds between simulation steps
    pub frame_interval: Scalar,
    /// Merge a reported collision before the next step
    pub auto_merge: bool,
    /// Stop after this many steps; run forever when unset
    pub max_steps: Option<u64>,
    /// Log the aggregate state after every step
    pub log_state: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_interval: 0.25,
            auto_merge: true,
            max_steps: None,
            log_state: false,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval.is_finite() && self.frame_interval > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidFrameInterval(self.frame_interval))
        }
    }
}

impl SimulationConfig {
    /// Checks every section and returns the engine ranges on success
    pub fn validate(&self) -> Result<ConfigRanges, ConfigError> {
        self.driver.validate()?;
        self.physics.ranges()
    }

    /// Per-user configuration file location, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gravwell").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Layers an optional TOML file under `GRAVWELL_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `GRAVWELL_PHYSICS__BODY_COUNT=10`.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Loads the per-user configuration, falling back to defaults on any error
    pub fn load_from_user_config() -> Self {
        let path = Self::user_config_path();
        match Self::load_layered(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load user configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save configuration to the per-user location and return where it went
    pub fn save_to_user_config(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::user_config_path().ok_or("No configuration directory available")?;
        self.save(&path)?;
        Ok(path)
    }
}
