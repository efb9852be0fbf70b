//! Column-wise storage for simulated bodies
//!
//! A body's identity is its index. Removing a body (see
//! [`crate::physics::collisions::merge_bodies`]) shifts every later body down
//! by one, so indices held across a merge must be treated as stale.

use crate::physics::error::SimulationError;
use crate::physics::math::{Scalar, Vector};

/// Opaque RGB color carried alongside a body; physics never reads it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyColor(pub [f32; 3]);

impl BodyColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Component-wise average of two colors
    pub fn mix(self, other: Self) -> Self {
        let [r1, g1, b1] = self.0;
        let [r2, g2, b2] = other.0;
        Self([(r1 + r2) / 2.0, (g1 + g2) / 2.0, (b1 + b2) / 2.0])
    }
}

/// Row view of a single body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: Scalar,
    /// Display radius, derived from mass when the body is created or merged
    pub size: Scalar,
    pub color: BodyColor,
}

impl Body {
    pub fn new(position: Vector, velocity: Vector, mass: Scalar, size: Scalar) -> Self {
        Self {
            position,
            velocity,
            mass,
            size,
            color: BodyColor::default(),
        }
    }

    pub fn with_color(mut self, color: BodyColor) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }
}

/// Ordered set of bodies stored as index-aligned parallel arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySet {
    positions: Vec<Vector>,
    velocities: Vec<Vector>,
    masses: Vec<Scalar>,
    sizes: Vec<Scalar>,
    colors: Vec<BodyColor>,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            masses: Vec::with_capacity(capacity),
            sizes: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Builds a set from row values, rejecting any non-positive mass
    pub fn from_bodies(bodies: impl IntoIterator<Item = Body>) -> Result<Self, SimulationError> {
        let mut set = Self::new();
        for body in bodies {
            set.push(body)?;
        }
        Ok(set)
    }

    /// Appends a body and returns its index
    pub fn push(&mut self, body: Body) -> Result<usize, SimulationError> {
        let index = self.len();
        if !body.mass.is_finite() || body.mass <= 0.0 {
            return Err(SimulationError::InvalidBody {
                index,
                mass: body.mass,
            });
        }

        self.push_unchecked(body);
        Ok(index)
    }

    pub(crate) fn push_unchecked(&mut self, body: Body) {
        self.positions.push(body.position);
        self.velocities.push(body.velocity);
        self.masses.push(body.mass);
        self.sizes.push(body.size);
        self.colors.push(body.color);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Body> {
        if index >= self.len() {
            return None;
        }
        Some(Body {
            position: self.positions[index],
            velocity: self.velocities[index],
            mass: self.masses[index],
            size: self.sizes[index],
            color: self.colors[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Body> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector] {
        &self.velocities
    }

    pub fn masses(&self) -> &[Scalar] {
        &self.masses
    }

    pub fn sizes(&self) -> &[Scalar] {
        &self.sizes
    }

    pub fn colors(&self) -> &[BodyColor] {
        &self.colors
    }

    /// Mutable kinematic columns for the integrator; masses stay read-only
    pub(crate) fn kinematics_mut(&mut self) -> (&mut [Vector], &mut [Vector], &[Scalar]) {
        (&mut self.positions, &mut self.velocities, &self.masses)
    }

    /// Overwrites the body at `index` with merged attributes, keeping its position
    pub(crate) fn absorb(
        &mut self,
        index: usize,
        velocity: Vector,
        mass: Scalar,
        size: Scalar,
        color: BodyColor,
    ) {
        self.velocities[index] = velocity;
        self.masses[index] = mass;
        self.sizes[index] = size;
        self.colors[index] = color;
    }

    /// Removes the body at `index`, shifting later indices down by one
    pub fn remove(&mut self, index: usize) -> Result<Body, SimulationError> {
        let body = self.get(index).ok_or(SimulationError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;

        self.positions.remove(index);
        self.velocities.remove(index);
        self.masses.remove(index);
        self.sizes.remove(index);
        self.colors.remove(index);
        Ok(body)
    }

    pub fn total_mass(&self) -> Scalar {
        self.masses.iter().sum()
    }

    pub fn total_momentum(&self) -> Vector {
        self.velocities
            .iter()
            .zip(&self.masses)
            .fold(Vector::ZERO, |acc, (velocity, mass)| acc + *velocity * *mass)
    }

    /// Mass-weighted mean position, or `None` for an empty set
    pub fn barycenter(&self) -> Option<Vector> {
        let total_mass = self.total_mass();
        if total_mass <= 0.0 {
            return None;
        }

        let weighted = self
            .positions
            .iter()
            .zip(&self.masses)
            .fold(Vector::ZERO, |acc, (position, mass)| acc + *position * *mass);
        Some(weighted / total_mass)
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.velocities
            .iter()
            .zip(&self.masses)
            .map(|(velocity, mass)| 0.5 * mass * velocity.length_squared())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: Scalar, mass: Scalar) -> Body {
        Body::new(Vector::new(x, 0.0, 0.0), Vector::ZERO, mass, 10.0)
    }

    #[test]
    fn test_columns_stay_aligned() {
        let mut set = BodySet::new();
        set.push(body_at(1.0, 2.0).with_color(BodyColor::new(1.0, 0.0, 0.0)))
            .unwrap();
        set.push(body_at(2.0, 3.0)).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.positions().len(), 2);
        assert_eq!(set.sizes().len(), 2);
        assert_eq!(set.colors().len(), 2);
        assert_eq!(set.masses(), &[2.0, 3.0]);
        assert_eq!(set.colors()[0], BodyColor::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_push_rejects_invalid_mass() {
        let mut set = BodySet::new();
        set.push(body_at(0.0, 1.0)).unwrap();

        assert_eq!(
            set.push(body_at(1.0, 0.0)),
            Err(SimulationError::InvalidBody {
                index: 1,
                mass: 0.0
            })
        );
        assert!(set.push(body_at(1.0, -3.0)).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_shifts_later_indices() {
        let mut set =
            BodySet::from_bodies([body_at(0.0, 1.0), body_at(1.0, 2.0), body_at(2.0, 3.0)])
                .unwrap();

        let removed = set.remove(1).unwrap();
        assert_eq!(removed.mass, 2.0);
        assert_eq!(set.len(), 2);

        // The body formerly at index 2 is now at index 1
        assert_eq!(set.get(1).unwrap().mass, 3.0);
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut set = BodySet::from_bodies([body_at(0.0, 1.0)]).unwrap();
        assert_eq!(
            set.remove(3),
            Err(SimulationError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_aggregates() {
        let set = BodySet::from_bodies([
            Body::new(Vector::new(-1.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0), 1.0, 1.0),
            Body::new(Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, -2.0, 0.0), 3.0, 1.0),
        ])
        .unwrap();

        assert_eq!(set.total_mass(), 4.0);
        assert_eq!(set.total_momentum(), Vector::new(0.0, -5.0, 0.0));
        assert_eq!(set.barycenter(), Some(Vector::new(1.25, 0.0, 0.0)));
        assert!((set.kinetic_energy() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_set() {
        let set = BodySet::new();
        assert!(set.is_empty());
        assert_eq!(set.barycenter(), None);
        assert_eq!(set.total_momentum(), Vector::ZERO);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_color_mix() {
        let mixed = BodyColor::new(1.0, 0.0, 0.5).mix(BodyColor::new(0.0, 1.0, 0.5));
        assert_eq!(mixed, BodyColor::new(0.5, 0.5, 0.5));
    }
}
