//! Physics System - Verlet substep passes
//!
//! Per substep, in this order:
//! 1. gravity (`forces.rs`), scaled per material (gases rise)
//! 2. external point forces (`forces.rs`)
//! 3. all-pairs collision + reactions (`collision.rs`)
//! 4. play-field boundary (`boundary.rs`)
//! 5. single-pass link relaxation (`links.rs`)
//! 6. integration
//!
//! Removals are only marked here; the solver compacts between passes.

mod boundary;
mod collision;
mod forces;
mod links;

pub use boundary::{apply_bounds, Bounds};
pub use collision::{solve_collisions, CollisionStats, FALLBACK_AXIS};
pub use forces::{
    apply_gravity, apply_point_forces, apply_radial_force, apply_vortex_force, PointForce,
    VORTEX_CORE, VORTEX_ORBIT,
};
pub use links::apply_links;

use crate::domain::Particle;

/// Advance every unpinned particle by one step.
pub fn integrate_all(particles: &mut [Particle], dt: f32) {
    for p in particles.iter_mut() {
        if !p.is_removed() {
            p.integrate(dt);
        }
    }
}
