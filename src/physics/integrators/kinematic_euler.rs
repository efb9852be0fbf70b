//! Constant-acceleration kinematic update
//!
//! Treats the acceleration computed at the start of a step as constant for the
//! whole step and applies the closed-form kinematics for that case.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Kinematic Euler integrator
///
/// Positions advance with the *old* velocity plus half the freshly computed
/// acceleration; velocities then take the full acceleration. Forces are only
/// evaluated once, at the start of the step.
///
/// # Algorithm
///
/// ```text
/// a(t)      = F(x(t)) / m
/// x(t+dt)   = x(t) + v(t) * dt + a(t) * dt² / 2
/// v(t+dt)   = v(t) + a(t) * dt
/// ```
///
/// With the simulation's fixed one-second step this is
/// `x += v + a/2; v += a`.
///
/// # Properties
///
/// - **Order of accuracy**: O(dt) globally (the acceleration is not refreshed
///   mid-step)
/// - **Symplectic**: No
/// - **Force evaluations**: 1 per timestep
/// - **Energy behavior**: Secular drift over long runs
///
/// This is neither velocity Verlet (which averages the old and new
/// accelerations for the velocity update) nor symplectic Euler (which moves
/// positions with the new velocity). Trajectories depend on this exact update
/// order, so it must not be swapped for either of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct KinematicEuler;

impl Integrator for KinematicEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Two separate additions: (x + v·dt) + a·dt²/2
        *position += *velocity * dt;
        *position += acceleration * (0.5 * dt * dt);
        *velocity += acceleration * dt;
    }

    fn name(&self) -> &str {
        "Kinematic Euler"
    }

    fn order(&self) -> usize {
        1
    }
}
