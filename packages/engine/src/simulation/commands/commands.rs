use crate::core::{SandboxError, Vec2};
use crate::domain::{Link, Material, Particle, SpawnerKind};
use crate::systems::physics::{self, PointForce};

use super::lifecycle::compact;
use super::Solver;

pub(super) fn add_particle(solver: &mut Solver, material: Material, pos: Vec2) -> &mut Particle {
    let p = Particle::from_material(material, pos, &solver.materials);
    push(solver, p)
}

pub(super) fn add_spawner(solver: &mut Solver, pos: Vec2, kind: SpawnerKind) -> &mut Particle {
    let p = Particle::spawner(pos, kind, &solver.materials);
    push(solver, p)
}

fn push(solver: &mut Solver, p: Particle) -> &mut Particle {
    solver.particles.push(p);
    let last = solver.particles.len() - 1;
    &mut solver.particles[last]
}

pub(super) fn add_link(solver: &mut Solver, a: usize, b: usize) -> Result<&Link, SandboxError> {
    let link = Link::between(a, b, &solver.particles)?;
    solver.links.push(link);
    let last = solver.links.len() - 1;
    Ok(&solver.links[last])
}

pub(super) fn add_rect(solver: &mut Solver, material: Material, min: Vec2, max: Vec2) -> usize {
    let radius = solver.materials.props(material).radius;
    let step = radius * 2.0;
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() {
        return 0;
    }

    let mut added = 0;
    let mut y = min.y + radius;
    while y <= max.y - radius {
        let mut x = min.x + radius;
        while x <= max.x - radius {
            add_particle(solver, material, Vec2::new(x, y));
            added += 1;
            x += step;
        }
        y += step;
    }
    added
}

pub(super) fn add_cluster(
    solver: &mut Solver,
    material: Material,
    center: Vec2,
    count: usize,
    spread: f32,
) -> usize {
    let spread = spread.abs();
    for _ in 0..count {
        let offset = Vec2::new(
            solver.rng.range(-spread, spread),
            solver.rng.range(-spread, spread),
        );
        add_particle(solver, material, center + offset);
    }
    count
}

pub(super) fn set_velocity(solver: &mut Solver, index: usize, velocity: Vec2) -> Result<(), SandboxError> {
    let dt = solver.settings.step_dt();
    solver.particle_mut(index)?.set_velocity(velocity, dt);
    Ok(())
}

pub(super) fn set_point_forces(solver: &mut Solver, forces: &[PointForce]) {
    solver.point_forces.clear();
    solver.point_forces.extend_from_slice(forces);
}

pub(super) fn clear_point_forces(solver: &mut Solver) {
    solver.point_forces.clear();
}

pub(super) fn apply_radial_force(solver: &mut Solver, center: Vec2, radius: f32, strength: f32) -> u32 {
    let dt = solver.settings.step_dt();
    physics::apply_radial_force(&mut solver.particles, center, radius, strength, dt)
}

pub(super) fn apply_vortex_force(solver: &mut Solver, center: Vec2, radius: f32, power: f32) -> u32 {
    let dt = solver.settings.step_dt();
    physics::apply_vortex_force(&mut solver.particles, center, radius, power, dt)
}

/// Mark everything matching `pred` and compact.
fn remove_where<F>(solver: &mut Solver, mut pred: F) -> usize
where
    F: FnMut(&Particle) -> bool,
{
    for p in solver.particles.iter_mut() {
        if pred(p) {
            p.mark_removed();
        }
    }
    compact(solver)
}

pub(super) fn remove_in_radius(solver: &mut Solver, center: Vec2, radius: f32) -> usize {
    let r2 = radius * radius;
    remove_where(solver, |p| (p.pos - center).length_squared() <= r2)
}

pub(super) fn remove_material(solver: &mut Solver, material: Material) -> usize {
    remove_where(solver, |p| p.material == material)
}

pub(super) fn remove_spawners(solver: &mut Solver, target: Option<Material>) -> usize {
    remove_where(solver, |p| match p.spawner_kind() {
        Some(kind) => target.is_none() || kind.target() == target,
        None => false,
    })
}

/// Partial Fisher-Yates over the non-spawner indices: the first `n / 2`
/// slots of the shuffled list are the victims. Spawners always survive.
pub(super) fn remove_random_half(solver: &mut Solver) -> usize {
    let mut order: Vec<usize> = solver
        .particles
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_spawner())
        .map(|(i, _)| i)
        .collect();
    let count = order.len();
    let half = count / 2;
    for i in 0..half {
        let j = i + solver.rng.below(count - i);
        order.swap(i, j);
        solver.particles[order[i]].mark_removed();
    }
    compact(solver)
}

pub(super) fn clear(solver: &mut Solver) {
    solver.particles.clear();
    solver.links.clear();
    solver.spawn_queue.clear();
    solver.point_forces.clear();
    solver.render.particles.clear();
    solver.render.links.clear();
    solver.time = 0.0;
    solver.frame = 0;
}
