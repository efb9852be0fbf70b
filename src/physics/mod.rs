//! Point-mass gravity engine
//!
//! Leaf-first: [`ranges`] and [`bodies`] hold data, [`generator`] seeds it,
//! [`forces`] and [`integrators`] advance it, [`collisions`] merges bodies,
//! and [`simulation`] ties them together with a [`clock`].

pub mod bodies;
pub mod clock;
pub mod collisions;
pub mod error;
pub mod forces;
pub mod generator;
pub mod integrators;
pub mod math;
pub mod ranges;
pub mod simulation;

pub use bodies::{Body, BodyColor, BodySet};
pub use clock::SimulationClock;
pub use collisions::{CollisionPair, MergeOutcome, merge_bodies};
pub use error::{ConfigError, SimulationError};
pub use forces::{ForceOutcome, ForceSolver};
pub use generator::{RandomBodyGenerator, create_random_bodies};
pub use ranges::{ConfigRanges, ValueRange};
pub use simulation::{Simulation, StateReport, StepOutcome};
