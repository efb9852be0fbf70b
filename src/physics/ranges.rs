//! Sampling ranges and physical constants used to seed a simulation

use crate::physics::error::ConfigError;
use crate::physics::math::Scalar;
use serde::{Deserialize, Serialize};

/// Reference value the default gravitational constant is scaled from
pub const REFERENCE_GRAVITATIONAL_CONSTANT: Scalar = 6.672e-4;

/// Default gravitational constant (N·m²/kg²)
pub const DEFAULT_GRAVITATIONAL_CONSTANT: Scalar = 2.0 * REFERENCE_GRAVITATIONAL_CONSTANT;

/// Default distance below which two bodies are considered to have collided
pub const DEFAULT_COLLISION_DISTANCE: Scalar = 5.0;

/// Half-open interval `[min, max)` used for uniform sampling
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: Scalar,
    pub max: Scalar,
}

impl ValueRange {
    pub const fn new(min: Scalar, max: Scalar) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> Scalar {
        self.max - self.min
    }

    pub fn contains(&self, value: Scalar) -> bool {
        value >= self.min && value < self.max
    }

    /// Checks the bounds are finite, strictly increasing and have a finite span
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && self.span().is_finite()
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Validated ranges for random body generation, plus G and the collision threshold
///
/// Fields are private so every value goes through a validating setter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigRanges {
    mass: ValueRange,
    position: ValueRange,
    velocity: ValueRange,
    gravitational_constant: Scalar,
    collision_distance: Scalar,
}

impl Default for ConfigRanges {
    fn default() -> Self {
        Self {
            mass: ValueRange::new(4500.0, 5000.0),
            position: ValueRange::new(-200.0, 200.0),
            velocity: ValueRange::new(-0.2, 0.2),
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            collision_distance: DEFAULT_COLLISION_DISTANCE,
        }
    }
}

impl ConfigRanges {
    pub fn new(
        mass: ValueRange,
        position: ValueRange,
        velocity: ValueRange,
        gravitational_constant: Scalar,
        collision_distance: Scalar,
    ) -> Result<Self, ConfigError> {
        let mut ranges = Self::default();
        ranges.set_mass_range(mass.min, mass.max)?;
        ranges.set_position_range(position.min, position.max)?;
        ranges.set_velocity_range(velocity.min, velocity.max)?;
        ranges.set_gravitational_constant(gravitational_constant)?;
        ranges.set_collision_distance(collision_distance)?;
        Ok(ranges)
    }

    pub fn mass(&self) -> ValueRange {
        self.mass
    }

    pub fn position(&self) -> ValueRange {
        self.position
    }

    pub fn velocity(&self) -> ValueRange {
        self.velocity
    }

    pub fn gravitational_constant(&self) -> Scalar {
        self.gravitational_constant
    }

    pub fn collision_distance(&self) -> Scalar {
        self.collision_distance
    }

    pub fn set_mass_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        let range = ValueRange::new(min, max);
        range.validate("mass")?;
        if min <= 0.0 {
            return Err(ConfigError::NonPositiveMass { min });
        }
        self.mass = range;
        Ok(())
    }

    pub fn set_position_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        let range = ValueRange::new(min, max);
        range.validate("position")?;
        self.position = range;
        Ok(())
    }

    pub fn set_velocity_range(&mut self, min: Scalar, max: Scalar) -> Result<(), ConfigError> {
        let range = ValueRange::new(min, max);
        range.validate("velocity")?;
        self.velocity = range;
        Ok(())
    }

    pub fn set_gravitational_constant(&mut self, g: Scalar) -> Result<(), ConfigError> {
        if !g.is_finite() || g <= 0.0 {
            return Err(ConfigError::InvalidGravitationalConstant(g));
        }
        self.gravitational_constant = g;
        Ok(())
    }

    pub fn set_collision_distance(&mut self, distance: Scalar) -> Result<(), ConfigError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ConfigError::NonPositiveCollisionDistance(distance));
        }
        self.collision_distance = distance;
        Ok(())
    }
}
