//! Gravwell prelude module
//!
//! Re-exports the types most systems and tests need, to cut import
//! boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Math
pub use crate::physics::math::{Scalar, Vector};

// Internal re-exports - Config
pub use crate::config::{DriverConfig, PhysicsConfig, SimulationConfig};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{DriverSettings, SharedRng, SimulationState};

// Internal re-exports - Physics
pub use crate::physics::Simulation;

// Internal re-exports - Events
pub use crate::events::{BodiesMerged, CollisionDetected, SimulationCommand};
