//! GravityField - pairwise attraction between registered bodies
//!
//! Two-tier update:
//! - Recompute: O(n²) softened attraction sum, on a wall-clock cadence
//!   (`GravityConfig::recompute_interval`).
//! - Apply: every step, push the cached vector into the host integrator and
//!   optionally ease each body's up axis against gravity.
//!
//! The field does not integrate motion. Forces and orientations go back to
//! the host through `PhysicsBackend`.

mod apply;
mod backend;
mod recompute;
mod registry;
mod stats;
mod system;

pub use apply::orient_toward_gravity;
pub use backend::{ForceAccumulator, PhysicsBackend, Transform};
pub use stats::StepStats;
pub use system::GravityField;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
