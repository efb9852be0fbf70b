use crate::physics::{CollisionPair, Simulation, SimulationError, StepOutcome};
use crate::prelude::*;

/// Draw the initial bodies from the shared random source
pub fn spawn_simulation_bodies(
    mut simulation: ResMut<SimulationState>,
    mut rng: ResMut<SharedRng>,
) {
    simulation.create_random_bodies(&mut **rng);
}

/// Advance the engine by one simulated second.
///
/// A reported collision is announced through [`CollisionDetected`] and, when
/// the driver is set to auto-merge, resolved in the same tick. Otherwise the
/// engine stays blocked until something else merges the pending pair.
pub fn advance_simulation(
    mut simulation: ResMut<SimulationState>,
    mut settings: ResMut<DriverSettings>,
    mut collisions: EventWriter<CollisionDetected>,
    mut merges: EventWriter<BodiesMerged>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    if exit_at_step_limit(&simulation, &mut settings, &mut exit) {
        return;
    }

    drive_step(
        &mut simulation.0,
        &mut settings,
        &mut collisions,
        &mut merges,
        &mut next_state,
    );

    exit_at_step_limit(&simulation, &mut settings, &mut exit);
}

/// One engine step plus the driver's reaction to it. Shared by the fixed
/// timestep and the manual single-step command.
pub(super) fn drive_step(
    simulation: &mut Simulation,
    settings: &mut DriverSettings,
    collisions: &mut EventWriter<CollisionDetected>,
    merges: &mut EventWriter<BodiesMerged>,
    next_state: &mut NextState<AppState>,
) {
    match simulation.step() {
        Ok(StepOutcome::Advanced { time }) => {
            settings.steps_taken += 1;
            debug!("t={}s bodies={}", time, simulation.body_count());
        }
        Ok(StepOutcome::CollisionPending(pair)) => {
            let time = simulation.time();
            info!(
                "Collision between bodies {} and {} at t={}s",
                pair.first, pair.second, time
            );
            collisions.write(CollisionDetected { pair, time });
            if settings.auto_merge {
                merge_pending(simulation, merges, pair);
            }
        }
        Err(SimulationError::CollisionPending(pair)) => {
            if settings.auto_merge {
                merge_pending(simulation, merges, pair);
            }
        }
        Err(e) => {
            error!("Simulation step failed: {}. Pausing", e);
            next_state.set(AppState::Paused);
        }
    }
}

/// Requests exit once the step limit is reached; returns whether it is
fn exit_at_step_limit(
    simulation: &Simulation,
    settings: &mut DriverSettings,
    exit: &mut EventWriter<AppExit>,
) -> bool {
    if !settings.limit_reached() {
        return false;
    }

    if !settings.exit_requested {
        info!(
            "Reached the step limit at t={}s with {} bodies",
            simulation.time(),
            simulation.body_count()
        );
        exit.write(AppExit::Success);
        settings.exit_requested = true;
    }
    true
}

fn merge_pending(
    simulation: &mut Simulation,
    merges: &mut EventWriter<BodiesMerged>,
    pair: CollisionPair,
) {
    match simulation.merge_bodies(pair.first, pair.second) {
        Ok(outcome) => {
            merges.write(BodiesMerged {
                outcome,
                remaining: simulation.body_count(),
            });
        }
        Err(e) => {
            error!(
                "Failed to merge bodies {} and {}: {}",
                pair.first, pair.second, e
            );
        }
    }
}

pub fn log_simulation_state(simulation: Res<SimulationState>, settings: Res<DriverSettings>) {
    if settings.log_state {
        info!("{}", simulation.report());
    }
}
