//! Direct-summation Newtonian gravity
//!
//! Every body is compared with every other body, so a solve is O(n²). When
//! collision detection is on, the same pass scans pairwise distances and stops
//! at the first pair closer than the collision threshold.

use crate::physics::bodies::BodySet;
use crate::physics::collisions::CollisionPair;
use crate::physics::error::SimulationError;
use crate::physics::math::{Scalar, Vector};
use crate::physics::ranges::ConfigRanges;

/// Result of a force solve
#[derive(Debug, Clone, PartialEq)]
pub enum ForceOutcome {
    /// Net force on each body, index-aligned with the body set
    Forces(Vec<Vector>),
    /// First close pair found in scan order; remaining forces were not computed
    Collision(CollisionPair),
}

/// Computes net gravitational forces for a body set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSolver {
    gravitational_constant: Scalar,
    collision_distance: Scalar,
}

impl ForceSolver {
    pub fn new(gravitational_constant: Scalar, collision_distance: Scalar) -> Self {
        Self {
            gravitational_constant,
            collision_distance,
        }
    }

    pub fn from_ranges(ranges: &ConfigRanges) -> Self {
        Self::new(ranges.gravitational_constant(), ranges.collision_distance())
    }

    pub fn gravitational_constant(&self) -> Scalar {
        self.gravitational_constant
    }

    pub fn collision_distance(&self) -> Scalar {
        self.collision_distance
    }

    /// Sums the pull of every other body on each body.
    ///
    /// For body `i` the net force is `-G Σⱼ (mᵢ mⱼ / r²) n̂ᵢⱼ` where
    /// `n̂ᵢⱼ = (pᵢ - pⱼ) / r`, so the result points toward the attracting masses.
    ///
    /// With `detect_collisions`, the first `(i, j)` in iteration order with
    /// `r` below the collision distance is returned instead of forces. This is
    /// not a nearest-pair search.
    ///
    /// Two bodies at exactly the same position make the force undefined; that
    /// is reported as [`SimulationError::CoincidentBodies`].
    pub fn compute(
        &self,
        bodies: &BodySet,
        detect_collisions: bool,
    ) -> Result<ForceOutcome, SimulationError> {
        let positions = bodies.positions();
        let masses = bodies.masses();
        let mut forces = Vec::with_capacity(bodies.len());

        for (i, (&position_i, &mass_i)) in positions.iter().zip(masses).enumerate() {
            let mut sum = Vector::ZERO;

            for (j, (&position_j, &mass_j)) in positions.iter().zip(masses).enumerate() {
                if i == j {
                    continue;
                }

                let displacement = position_i - position_j;
                let distance = displacement.length();

                if detect_collisions && distance < self.collision_distance {
                    return Ok(ForceOutcome::Collision(CollisionPair::new(i, j)));
                }

                if distance == 0.0 {
                    return Err(SimulationError::CoincidentBodies {
                        first: i,
                        second: j,
                    });
                }

                let normal = displacement / distance;
                sum += normal * (mass_i * mass_j / (distance * distance));
            }

            forces.push(sum * -self.gravitational_constant);
        }

        Ok(ForceOutcome::Forces(forces))
    }

    /// Total gravitational potential energy, `-G Σ_{i<j} mᵢ mⱼ / r`
    pub fn potential_energy(&self, bodies: &BodySet) -> Scalar {
        let positions = bodies.positions();
        let masses = bodies.masses();
        let mut energy = 0.0;

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let distance = positions[i].distance(positions[j]);
                energy -= self.gravitational_constant * masses[i] * masses[j] / distance;
            }
        }

        energy
    }
}
