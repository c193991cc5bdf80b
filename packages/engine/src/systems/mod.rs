//! Systems - everything that moves or changes particles
//!
//! - physics/    - per-substep passes (forces, collision, bounds, links)
//! - reactions   - pairwise material rules used by the collision pass
//! - behaviors/  - once-per-frame material and spawner logic

pub mod behaviors;
pub mod physics;
pub mod reactions;
