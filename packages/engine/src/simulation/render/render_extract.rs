//! Render buffers for JS
//!
//! Colors are stored as raw bits (`f32::from_bits`) so a `Uint32Array` view
//! over the same memory reads them back exactly.

use super::Solver;

pub(super) const PARTICLE_STRIDE: usize = 4;
pub(super) const LINK_STRIDE: usize = 4;

pub(super) fn extract_particles(solver: &mut Solver) -> usize {
    let buf = &mut solver.render.particles;
    buf.clear();
    buf.reserve(solver.particles.len() * PARTICLE_STRIDE);
    for p in &solver.particles {
        buf.extend_from_slice(&[p.pos.x, p.pos.y, p.radius, f32::from_bits(p.color)]);
    }
    buf.len() / PARTICLE_STRIDE
}

pub(super) fn extract_links(solver: &mut Solver) -> usize {
    let buf = &mut solver.render.links;
    buf.clear();
    buf.reserve(solver.links.len() * LINK_STRIDE);
    for link in &solver.links {
        let (Some(a), Some(b)) = (solver.particles.get(link.a()), solver.particles.get(link.b())) else {
            continue;
        };
        buf.extend_from_slice(&[a.pos.x, a.pos.y, b.pos.x, b.pos.y]);
    }
    buf.len() / LINK_STRIDE
}
