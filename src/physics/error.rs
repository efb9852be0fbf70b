//! Error types for the physics engine

use crate::physics::collisions::CollisionPair;
use crate::physics::math::Scalar;
use std::fmt;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Range bounds are inverted, empty or not finite
    InvalidRange {
        name: &'static str,
        min: Scalar,
        max: Scalar,
    },
    /// Mass ranges must start above zero
    NonPositiveMass { min: Scalar },
    /// Collision threshold must be a positive distance
    NonPositiveCollisionDistance(Scalar),
    /// Gravitational constant must be finite and positive
    InvalidGravitationalConstant(Scalar),
    /// Driver frame interval must be finite and positive
    InvalidFrameInterval(Scalar),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { name, min, max } => {
                write!(f, "Invalid {name} range: min {min} must be below max {max}")
            }
            ConfigError::NonPositiveMass { min } => {
                write!(f, "Mass range must be positive, got minimum {min}")
            }
            ConfigError::NonPositiveCollisionDistance(distance) => {
                write!(f, "Collision distance must be positive, got {distance}")
            }
            ConfigError::InvalidGravitationalConstant(g) => {
                write!(f, "Gravitational constant must be finite and positive, got {g}")
            }
            ConfigError::InvalidFrameInterval(interval) => {
                write!(f, "Frame interval must be finite and positive, got {interval}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Usage errors raised while operating on a body set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// A body index past the end of the body set
    IndexOutOfRange { index: usize, len: usize },
    /// A merge was asked to combine a body with itself
    SameBody(usize),
    /// A collision was reported and must be merged before stepping again
    CollisionPending(CollisionPair),
    /// Two bodies share a position, so the inverse-square force is undefined
    CoincidentBodies { first: usize, second: usize },
    /// Bodies must carry a finite positive mass
    InvalidBody { index: usize, mass: Scalar },
    /// A force array that is not index-aligned with the body set
    ForceCountMismatch { forces: usize, bodies: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::IndexOutOfRange { index, len } => {
                write!(f, "Body index {index} is out of range for {len} bodies")
            }
            SimulationError::SameBody(index) => {
                write!(f, "Cannot merge body {index} with itself")
            }
            SimulationError::CollisionPending(pair) => write!(
                f,
                "Collision between bodies {} and {} must be merged before stepping",
                pair.first, pair.second
            ),
            SimulationError::CoincidentBodies { first, second } => write!(
                f,
                "Bodies {first} and {second} occupy the same position; force is undefined"
            ),
            SimulationError::InvalidBody { index, mass } => {
                write!(f, "Body {index} has invalid mass {mass}")
            }
            SimulationError::ForceCountMismatch { forces, bodies } => {
                write!(f, "Got {forces} forces for {bodies} bodies")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidRange {
            name: "position",
            min: 5.0,
            max: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid position range: min 5 must be below max 1"
        );

        let err = ConfigError::NonPositiveCollisionDistance(0.0);
        assert!(err.to_string().contains("Collision distance"));
    }

    #[test]
    fn test_simulation_error_messages() {
        let err = SimulationError::CollisionPending(CollisionPair::new(0, 2));
        assert_eq!(
            err.to_string(),
            "Collision between bodies 0 and 2 must be merged before stepping"
        );

        let err = SimulationError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "Body index 4 is out of range for 3 bodies");
    }
}
