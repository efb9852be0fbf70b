//! Random initial conditions

use crate::physics::bodies::{Body, BodyColor, BodySet};
use crate::physics::error::ConfigError;
use crate::physics::math::{Scalar, random_vector};
use crate::physics::ranges::{ConfigRanges, ValueRange};
use rand::Rng;

/// Smallest display size, given to bodies at the bottom of the mass range
pub const MIN_BODY_SIZE: Scalar = 10.0;

/// Largest display size, approached by bodies at the top of the mass range
pub const MAX_BODY_SIZE: Scalar = 60.0;

/// Produces body sets with uniformly distributed positions, velocities and masses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomBodyGenerator {
    position: ValueRange,
    velocity: ValueRange,
    mass: ValueRange,
}

impl RandomBodyGenerator {
    pub fn new(
        position: ValueRange,
        velocity: ValueRange,
        mass: ValueRange,
    ) -> Result<Self, ConfigError> {
        position.validate("position")?;
        velocity.validate("velocity")?;
        mass.validate("mass")?;
        if mass.min <= 0.0 {
            return Err(ConfigError::NonPositiveMass { min: mass.min });
        }

        Ok(Self {
            position,
            velocity,
            mass,
        })
    }

    /// Ranges held by a [`ConfigRanges`] are already validated
    pub fn from_ranges(ranges: &ConfigRanges) -> Self {
        Self {
            position: ranges.position(),
            velocity: ranges.velocity(),
            mass: ranges.mass(),
        }
    }

    /// Linear map from the mass range onto `[MIN_BODY_SIZE, MAX_BODY_SIZE)`
    pub fn mass_to_size(&self, mass: Scalar) -> Scalar {
        let scale = self.mass.span() / (MAX_BODY_SIZE - MIN_BODY_SIZE);
        MIN_BODY_SIZE + (mass - self.mass.min) / scale
    }

    /// Draws `count` bodies.
    ///
    /// Each column is drawn in turn (all positions, then velocities, masses and
    /// colors), so a given seed always yields the same set.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> BodySet {
        let positions: Vec<_> = (0..count)
            .map(|_| random_vector(rng, self.position.min, self.position.max))
            .collect();
        let velocities: Vec<_> = (0..count)
            .map(|_| random_vector(rng, self.velocity.min, self.velocity.max))
            .collect();
        let masses: Vec<Scalar> = (0..count)
            .map(|_| rng.random::<Scalar>() * self.mass.span() + self.mass.min)
            .collect();
        let colors: Vec<_> = (0..count)
            .map(|_| BodyColor::new(rng.random(), rng.random(), rng.random()))
            .collect();

        let mut bodies = BodySet::with_capacity(count);
        for (((position, velocity), mass), color) in
            positions.into_iter().zip(velocities).zip(masses).zip(colors)
        {
            let size = self.mass_to_size(mass);
            // Sampled masses lie in [min, max) with min > 0
            bodies.push_unchecked(Body::new(position, velocity, mass, size).with_color(color));
        }
        bodies
    }
}

/// Creates `count` random bodies from explicit ranges.
pub fn create_random_bodies<R: Rng + ?Sized>(
    count: usize,
    position: ValueRange,
    velocity: ValueRange,
    mass: ValueRange,
    rng: &mut R,
) -> Result<BodySet, ConfigError> {
    Ok(RandomBodyGenerator::new(position, velocity, mass)?.generate(count, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn default_generator() -> RandomBodyGenerator {
        RandomBodyGenerator::from_ranges(&ConfigRanges::default())
    }

    #[test]
    fn test_generate_respects_ranges() {
        let generator = default_generator();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bodies = generator.generate(200, &mut rng);

        assert_eq!(bodies.len(), 200);
        for body in bodies.iter() {
            for axis in body.position.to_array() {
                assert!((-200.0..200.0).contains(&axis));
            }
            for axis in body.velocity.to_array() {
                assert!((-0.2..0.2).contains(&axis));
            }
            assert!((4500.0..5000.0).contains(&body.mass));
            assert!((MIN_BODY_SIZE..MAX_BODY_SIZE).contains(&body.size));
            for channel in body.color.0 {
                assert!((0.0..1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_zero_count_yields_empty_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(default_generator().generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_mass_to_size_is_monotonic() {
        let generator = default_generator();
        assert_eq!(generator.mass_to_size(4500.0), MIN_BODY_SIZE);
        assert!((generator.mass_to_size(4750.0) - 35.0).abs() < 1e-9);
        assert!((generator.mass_to_size(5000.0) - MAX_BODY_SIZE).abs() < 1e-9);
        assert!(generator.mass_to_size(4600.0) < generator.mass_to_size(4601.0));
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let generator = default_generator();
        let first = generator.generate(5, &mut ChaCha8Rng::seed_from_u64(99));
        let second = generator.generate(5, &mut ChaCha8Rng::seed_from_u64(99));
        let other = generator.generate(5, &mut ChaCha8Rng::seed_from_u64(100));

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = create_random_bodies(
            3,
            ValueRange::new(-1.0, 1.0),
            ValueRange::new(-1.0, 1.0),
            ValueRange::new(0.0, 10.0),
            &mut rng,
        );
        assert_eq!(result, Err(ConfigError::NonPositiveMass { min: 0.0 }));

        let result = create_random_bodies(
            3,
            ValueRange::new(1.0, -1.0),
            ValueRange::new(-1.0, 1.0),
            ValueRange::new(1.0, 10.0),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange {
                name: "position",
                ..
            })
        ));
    }
}
