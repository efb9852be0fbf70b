use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use gravwell::cli::{Args, handle_config_output, load_and_apply_config};
use gravwell::plugins::simulation::SimulationPlugin;
use gravwell::prelude::*;
use std::time::Duration;

// Polling interval of the headless runner; steps are paced by the fixed timestep
const RUNNER_WAIT: Duration = Duration::from_millis(5);

fn main() -> AppExit {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    match handle_config_output(&args, &config) {
        Ok(true) => return AppExit::Success,
        Ok(false) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    }

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(RUNNER_WAIT)),
        LogPlugin {
            level: log_level,
            ..default()
        },
        StatesPlugin,
        SimulationPlugin::with_config(config),
    ));

    app.run()
}
