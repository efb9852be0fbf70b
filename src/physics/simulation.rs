//! Owned simulation state and the step/merge cycle
//!
//! ```text
//! Idle ── step() ──▶ forces computed ──▶ Advanced ──▶ Idle
//!                                  └───▶ CollisionPending ── merge_bodies() ──▶ Idle
//! ```
//!
//! While a collision is pending, `step()` refuses to run; nothing is merged
//! automatically.

use crate::config::PhysicsConfig;
use crate::physics::bodies::{BodyColor, BodySet};
use crate::physics::clock::SimulationClock;
use crate::physics::collisions::{CollisionPair, MergeOutcome, merge_bodies};
use crate::physics::error::{ConfigError, SimulationError};
use crate::physics::forces::{ForceOutcome, ForceSolver};
use crate::physics::generator::RandomBodyGenerator;
use crate::physics::integrators::{Integrator, KinematicEuler, STEP_SECONDS, advance};
use crate::physics::math::{Scalar, Vector};
use crate::physics::ranges::ConfigRanges;
use bevy::log::{debug, info};
use rand::Rng;
use std::fmt;

/// Result of a single call to [`Simulation::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Bodies moved forward one second; `time` is the new clock value
    Advanced { time: u64 },
    /// A close pair was found before anything moved; merge it before stepping
    CollisionPending(CollisionPair),
}

/// Snapshot of aggregate quantities, mostly for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateReport {
    pub time: u64,
    pub body_count: usize,
    pub total_mass: Scalar,
    pub momentum: Vector,
    pub barycenter: Option<Vector>,
    pub kinetic_energy: Scalar,
    pub potential_energy: Scalar,
}

impl StateReport {
    pub fn total_energy(&self) -> Scalar {
        self.kinetic_energy + self.potential_energy
    }
}

impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={}s bodies={} mass={:.3} momentum={:?} energy={:.6e} (kinetic {:.6e}, potential {:.6e})",
            self.time,
            self.body_count,
            self.total_mass,
            self.momentum,
            self.total_energy(),
            self.kinetic_energy,
            self.potential_energy,
        )
    }
}

/// The engine: bodies, ranges, clock and the pending-collision state
#[derive(Debug, Clone)]
pub struct Simulation {
    ranges: ConfigRanges,
    body_count: usize,
    detect_collisions: bool,
    bodies: BodySet,
    clock: SimulationClock,
    pending_collision: Option<CollisionPair>,
    integrator: KinematicEuler,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(ConfigRanges::default())
    }
}

impl Simulation {
    pub fn new(ranges: ConfigRanges) -> Self {
        Self {
            ranges,
            body_count: 0,
            detect_collisions: false,
            bodies: BodySet::new(),
            clock: SimulationClock::new(),
            pending_collision: None,
            integrator: KinematicEuler,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Result<Self, ConfigError> {
        let mut simulation = Self::new(config.ranges()?);
        simulation.set_body_count(config.body_count);
        simulation.set_detect_collisions(config.detect_collisions);
        Ok(simulation)
    }

    // Configuration setters. Each one validates before storing.

    pub fn set_body_count(&mut self, count: usize) {
        self.body_count = count;
    }

    pub fn set_mass_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        self.ranges.set_mass_range(min, max)
    }

    pub fn set_position_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        self.ranges.set_position_range(min, max)
    }

    pub fn set_velocity_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        self.ranges.set_velocity_range(min, max)
    }

    pub fn set_gravitational_constant(&mut self, g: Scalar) -> Result<(), ConfigError> {
        self.ranges.set_gravitational_constant(g)
    }

    pub fn set_collision_distance(&mut self, distance: Scalar) -> Result<(), ConfigError> {
        self.ranges.set_collision_distance(distance)
    }

    pub fn set_detect_collisions(&mut self, enabled: bool) {
        self.detect_collisions = enabled;
    }

    // Accessors

    pub fn ranges(&self) -> &ConfigRanges {
        &self.ranges
    }

    /// Number of bodies the next [`Self::create_random_bodies`] call will create
    pub fn configured_body_count(&self) -> usize {
        self.body_count
    }

    pub fn detects_collisions(&self) -> bool {
        self.detect_collisions
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn positions(&self) -> &[Vector] {
        self.bodies.positions()
    }

    pub fn sizes(&self) -> &[Scalar] {
        self.bodies.sizes()
    }

    pub fn colors(&self) -> &[BodyColor] {
        self.bodies.colors()
    }

    /// Simulated seconds since the current body set was created
    pub fn time(&self) -> u64 {
        self.clock.seconds()
    }

    pub fn pending_collision(&self) -> Option<CollisionPair> {
        self.pending_collision
    }

    // Lifecycle

    /// Replaces the body set with freshly drawn random bodies and resets the clock
    pub fn create_random_bodies<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let generator = RandomBodyGenerator::from_ranges(&self.ranges);
        let bodies = generator.generate(self.body_count, rng);
        info!(
            "Created {} random bodies, stepping with {} (order {})",
            bodies.len(),
            self.integrator.name(),
            self.integrator.order()
        );
        self.replace_bodies(bodies);
    }

    /// Installs an explicit body set, resetting the clock and any pending collision
    pub fn replace_bodies(&mut self, bodies: BodySet) {
        self.bodies = bodies;
        self.clock.reset();
        self.pending_collision = None;
    }

    /// Advances the simulation by one second.
    ///
    /// With collision detection on, a close pair is reported before any body
    /// moves and the clock is left alone. The pair must be passed to
    /// [`Self::merge_bodies`] before the next step.
    pub fn step(&mut self) -> Result<StepOutcome, SimulationError> {
        if let Some(pair) = self.pending_collision {
            return Err(SimulationError::CollisionPending(pair));
        }

        let solver = ForceSolver::from_ranges(&self.ranges);
        match solver.compute(&self.bodies, self.detect_collisions)? {
            ForceOutcome::Collision(pair) => {
                debug!(
                    "Collision between bodies {} and {} at t={}s",
                    pair.first,
                    pair.second,
                    self.clock.seconds()
                );
                self.pending_collision = Some(pair);
                Ok(StepOutcome::CollisionPending(pair))
            }
            ForceOutcome::Forces(forces) => {
                advance(&self.integrator, &mut self.bodies, &forces, STEP_SECONDS)?;
                let time = self.clock.tick();
                Ok(StepOutcome::Advanced { time })
            }
        }
    }

    /// Merges two bodies and clears any pending collision.
    ///
    /// Indices after the removed body shift down by one.
    pub fn merge_bodies(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<MergeOutcome, SimulationError> {
        let outcome = merge_bodies(&mut self.bodies, first, second)?;
        self.pending_collision = None;
        info!(
            "Merged body {} into body {} (mass {:.3}); {} bodies remain",
            outcome.removed,
            outcome.survivor,
            outcome.mass,
            self.bodies.len()
        );
        Ok(outcome)
    }

    pub fn report(&self) -> StateReport {
        let solver = ForceSolver::from_ranges(&self.ranges);
        StateReport {
            time: self.clock.seconds(),
            body_count: self.bodies.len(),
            total_mass: self.bodies.total_mass(),
            momentum: self.bodies.total_momentum(),
            barycenter: self.bodies.barycenter(),
            kinetic_energy: self.bodies.kinetic_energy(),
            potential_energy: solver.potential_energy(&self.bodies),
        }
    }
}
