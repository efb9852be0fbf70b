//! Numerical integration for the n-body simulation

use crate::physics::bodies::BodySet;
use crate::physics::error::SimulationError;
use crate::physics::math::{Scalar, Vector};

pub mod kinematic_euler;

pub use kinematic_euler::KinematicEuler;

/// Length of one simulation step in seconds
pub const STEP_SECONDS: Scalar = 1.0;

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration computed at the start of the step
    /// * `dt` - Time step
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the order of this integrator
    fn order(&self) -> usize;
}

/// Applies `forces` to every body for one step of length `dt`.
///
/// `forces` must be index-aligned with `bodies`; acceleration is `force / mass`.
pub fn advance<I: Integrator + ?Sized>(
    integrator: &I,
    bodies: &mut BodySet,
    forces: &[Vector],
    dt: Scalar,
) -> Result<(), SimulationError> {
    if forces.len() != bodies.len() {
        return Err(SimulationError::ForceCountMismatch {
            forces: forces.len(),
            bodies: bodies.len(),
        });
    }

    let (positions, velocities, masses) = bodies.kinematics_mut();
    for (((position, velocity), &mass), &force) in positions
        .iter_mut()
        .zip(velocities.iter_mut())
        .zip(masses)
        .zip(forces)
    {
        integrator.step(position, velocity, force / mass, dt);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::bodies::Body;

    #[test]
    fn test_advance_divides_force_by_mass() {
        let mut bodies = BodySet::from_bodies([
            Body::new(Vector::ZERO, Vector::new(1.0, 0.0, 0.0), 2.0, 10.0),
            Body::new(Vector::new(10.0, 0.0, 0.0), Vector::ZERO, 4.0, 10.0),
        ])
        .unwrap();
        let forces = [Vector::new(4.0, 0.0, 0.0), Vector::new(0.0, -8.0, 0.0)];

        advance(&KinematicEuler, &mut bodies, &forces, STEP_SECONDS).unwrap();

        // a = (2, 0, 0): x = 0 + 1 + 1, v = 1 + 2
        assert_eq!(bodies.positions()[0], Vector::new(2.0, 0.0, 0.0));
        assert_eq!(bodies.velocities()[0], Vector::new(3.0, 0.0, 0.0));
        // a = (0, -2, 0): x = 10 + 0 - 1, v = -2
        assert_eq!(bodies.positions()[1], Vector::new(10.0, -1.0, 0.0));
        assert_eq!(bodies.velocities()[1], Vector::new(0.0, -2.0, 0.0));

        // Masses and sizes are untouched
        assert_eq!(bodies.masses(), &[2.0, 4.0]);
        assert_eq!(bodies.sizes(), &[10.0, 10.0]);
    }

    #[test]
    fn test_advance_rejects_misaligned_forces() {
        let mut bodies =
            BodySet::from_bodies([Body::new(Vector::ZERO, Vector::ZERO, 1.0, 1.0)]).unwrap();
        let before = bodies.clone();

        let result = advance(&KinematicEuler, &mut bodies, &[], STEP_SECONDS);
        assert_eq!(
            result,
            Err(SimulationError::ForceCountMismatch {
                forces: 0,
                bodies: 1
            })
        );
        assert_eq!(bodies, before);
    }

    #[test]
    fn test_advance_through_trait_object() {
        let integrator: Box<dyn Integrator> = Box::new(KinematicEuler);
        let mut bodies =
            BodySet::from_bodies([Body::new(Vector::ZERO, Vector::new(0.0, 0.0, 1.0), 1.0, 1.0)])
                .unwrap();

        advance(integrator.as_ref(), &mut bodies, &[Vector::ZERO], STEP_SECONDS).unwrap();
        assert_eq!(bodies.positions()[0], Vector::new(0.0, 0.0, 1.0));
    }
}
