//! Collision resolution through momentum-conserving mergers
//!
//! When two bodies collide they become one body that conserves:
//! - Total mass: `m = m₁ + m₂`
//! - Momentum: `v = (m₁v₁ + m₂v₂) / m`
//! - Volume: `s = (s₁³ + s₂³)^(1/3)`, treating size as a radius
//!
//! Color is averaged. The merged body stays where the heavier body was; no
//! combined position is computed.

use crate::physics::bodies::BodySet;
use crate::physics::error::SimulationError;
use crate::physics::math::{Scalar, volume_equivalent_radius};

/// Two body indices reported by collision detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    pub first: usize,
    pub second: usize,
}

impl CollisionPair {
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// What a merge did to the body set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOutcome {
    /// Index of the surviving body before the removal
    pub survivor: usize,
    /// Index that was removed
    pub removed: usize,
    /// Index of the surviving body after later bodies shifted down
    pub survivor_index: usize,
    /// Combined mass
    pub mass: Scalar,
}

/// Merges bodies `first` and `second` in place.
///
/// The heavier body keeps its slot and receives the merged attributes; on equal
/// masses `second` survives. The other body is removed, so every index after
/// it shifts down by one and `len()` drops by exactly one.
pub fn merge_bodies(
    bodies: &mut BodySet,
    first: usize,
    second: usize,
) -> Result<MergeOutcome, SimulationError> {
    let len = bodies.len();
    let a = bodies
        .get(first)
        .ok_or(SimulationError::IndexOutOfRange { index: first, len })?;
    let b = bodies
        .get(second)
        .ok_or(SimulationError::IndexOutOfRange { index: second, len })?;
    if first == second {
        return Err(SimulationError::SameBody(first));
    }

    let mass = a.mass + b.mass;
    let velocity = (a.velocity * a.mass + b.velocity * b.mass) / mass;
    let size = volume_equivalent_radius(a.size, b.size);
    let color = a.color.mix(b.color);

    let (survivor, removed) = if a.mass > b.mass {
        (first, second)
    } else {
        (second, first)
    };

    bodies.absorb(survivor, velocity, mass, size, color);
    bodies.remove(removed)?;

    let survivor_index = if removed < survivor {
        survivor - 1
    } else {
        survivor
    };

    Ok(MergeOutcome {
        survivor,
        removed,
        survivor_index,
        mass,
    })
}
