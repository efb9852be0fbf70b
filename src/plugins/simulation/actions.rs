//! Action handlers for simulation commands
//!
//! Restart, pause/resume, single steps, collision detection toggling and
//! quitting.

use super::physics::drive_step;
use crate::prelude::*;

#[allow(clippy::too_many_arguments)]
pub fn handle_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<SimulationState>,
    mut rng: ResMut<SharedRng>,
    mut settings: ResMut<DriverSettings>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut collisions: EventWriter<CollisionDetected>,
    mut merges: EventWriter<BodiesMerged>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        match command {
            SimulationCommand::Restart => {
                // The random stream continues so a seeded session stays reproducible
                simulation.create_random_bodies(&mut **rng);
                settings.steps_taken = 0;
            }
            SimulationCommand::TogglePause => match current_state.get() {
                AppState::Running => {
                    info!("Pausing simulation at t={}s", simulation.time());
                    next_state.set(AppState::Paused);
                }
                AppState::Paused => {
                    info!("Resuming simulation at t={}s", simulation.time());
                    next_state.set(AppState::Running);
                }
            },
            SimulationCommand::Step => {
                drive_step(
                    &mut simulation.0,
                    &mut settings,
                    &mut collisions,
                    &mut merges,
                    &mut next_state,
                );
            }
            SimulationCommand::ToggleCollisionDetection => {
                let enabled = !simulation.detects_collisions();
                simulation.set_detect_collisions(enabled);
                info!(
                    "Collision detection {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            SimulationCommand::Quit => {
                exit.write(AppExit::Success);
            }
        }
    }
}
