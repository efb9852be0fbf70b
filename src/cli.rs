//! Command line interface for Gravwell

use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::SimulationConfig;
use crate::physics::ConfigError;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Configuration loaded but failed validation
    InvalidConfig(ConfigError),
    /// Configuration could not be written
    ConfigSave(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
            CliError::ConfigSave(msg) => write!(f, "Failed to save configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::InvalidConfig(err)
    }
}

/// Gravwell - point-mass N-body gravity simulation
#[derive(Parser, Debug, Default)]
#[command(version, long_version = long_version(), about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of bodies to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Random seed for body generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Report close pairs and merge them
    #[arg(long)]
    pub collisions: bool,

    /// Distance below which two bodies collide
    #[arg(long, value_name = "DISTANCE")]
    pub collision_distance: Option<f64>,

    /// Wall-clock seconds between steps
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// Exit after this many steps
    #[arg(long, value_name = "N")]
    pub steps: Option<u64>,

    /// Leave reported collisions pending instead of merging them
    #[arg(long)]
    pub no_auto_merge: bool,

    /// Log total mass, momentum and energy after every step
    #[arg(long)]
    pub log_state: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn long_version() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = match &args.config {
        Some(config_path) => {
            println!("Loading configuration from: {}", config_path.display());
            SimulationConfig::load_layered(Some(config_path.as_path()))
                .map_err(|err| CliError::ConfigLoad(err.to_string()))?
        }
        None => SimulationConfig::load_from_user_config(),
    };

    apply_overrides(args, &mut config);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(args: &Args, config: &mut SimulationConfig) {
    if let Some(body_count) = args.bodies {
        println!("Overriding body count to: {body_count}");
        config.physics.body_count = body_count;
    }

    if let Some(gravity) = args.gravity {
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if args.collisions {
        config.physics.detect_collisions = true;
    }

    if let Some(distance) = args.collision_distance {
        config.physics.collision_distance = distance;
    }

    if let Some(interval) = args.interval {
        config.driver.frame_interval = interval;
    }

    if let Some(steps) = args.steps {
        config.driver.max_steps = Some(steps);
    }

    if args.no_auto_merge {
        config.driver.auto_merge = false;
    }

    if args.log_state {
        config.driver.log_state = true;
    }
}

/// Handles --print-config and --save-config. Returns true when the app should not run.
pub fn handle_config_output(args: &Args, config: &SimulationConfig) -> Result<bool, CliError> {
    if args.print_config {
        let toml_string =
            toml::to_string_pretty(config).map_err(|err| CliError::ConfigSave(err.to_string()))?;
        print!("{toml_string}");
    }

    if let Some(path) = &args.save_config {
        save_config(config, path)?;
        println!("Saved configuration to: {}", path.display());
    }

    Ok(args.print_config || args.save_config.is_some())
}

fn save_config(config: &SimulationConfig, path: &Path) -> Result<(), CliError> {
    config
        .save(path)
        .map_err(|err| CliError::ConfigSave(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gravwell-cli-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_parses_flags() {
        let args = Args::try_parse_from([
            "gravwell",
            "-n",
            "12",
            "-s",
            "7",
            "--collisions",
            "--steps",
            "100",
            "--no-auto-merge",
        ])
        .unwrap();

        assert_eq!(args.bodies, Some(12));
        assert_eq!(args.seed, Some(7));
        assert!(args.collisions);
        assert_eq!(args.steps, Some(100));
        assert!(args.no_auto_merge);
        assert!(!args.verbose);
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let path = scratch_path("base.toml");
        let mut base = SimulationConfig::default();
        base.physics.body_count = 20;
        base.driver.frame_interval = 1.0;
        base.save(&path).unwrap();

        let args = Args {
            config: Some(path.clone()),
            gravity: Some(0.5),
            collision_distance: Some(2.5),
            log_state: true,
            ..Default::default()
        };
        let config = load_and_apply_config(&args).unwrap();

        assert_eq!(config.physics.body_count, 20);
        assert_eq!(config.physics.gravitational_constant, 0.5);
        assert_eq!(config.physics.collision_distance, 2.5);
        assert_eq!(config.driver.frame_interval, 1.0);
        assert!(config.driver.log_state);
        assert!(config.driver.auto_merge);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let path = scratch_path("valid.toml");
        SimulationConfig::default().save(&path).unwrap();

        let args = Args {
            config: Some(path.clone()),
            gravity: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            load_and_apply_config(&args),
            Err(CliError::InvalidConfig(
                ConfigError::InvalidGravitationalConstant(_)
            ))
        ));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_config_flag_writes_file() {
        let path = scratch_path("saved.toml");
        let args = Args {
            save_config: Some(path.clone()),
            ..Default::default()
        };
        let config = SimulationConfig::default();

        assert!(handle_config_output(&args, &config).unwrap());
        assert_eq!(SimulationConfig::load_or_default(&path), config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_no_output_flags_runs_app() {
        let args = Args::default();
        assert!(!handle_config_output(&args, &SimulationConfig::default()).unwrap());
    }
}
