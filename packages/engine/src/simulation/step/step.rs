use crate::systems::behaviors::{update_spawner, BehaviorContext, FieldAction};
use crate::systems::physics::{
    apply_bounds, apply_gravity, apply_links, apply_point_forces, apply_radial_force,
    apply_vortex_force, integrate_all, solve_collisions,
};
use crate::systems::reactions::ReactionContext;

use super::lifecycle::flush_pending;
use super::perf_timer::lap;
use super::{PerfTimer, Solver};

pub(super) fn update(solver: &mut Solver) {
    if !solver.running {
        return;
    }

    let perf_on = solver.perf_enabled;
    if perf_on {
        solver.perf_stats.reset();
    }
    let frame_timer = PerfTimer::start_if(perf_on);

    let sub_steps = solver.settings.sub_steps.max(1);
    let step_dt = solver.settings.step_dt();
    solver.time += solver.settings.frame_dt();

    for _ in 0..sub_steps {
        substep(solver, step_dt, perf_on);
    }

    let t0 = PerfTimer::start_if(perf_on);
    update_spawners(solver, step_dt);
    flush_pending(solver);
    let spawners_ms = lap(t0);

    let t0 = PerfTimer::start_if(perf_on);
    {
        let mut ctx = BehaviorContext {
            frame: solver.frame,
            step_dt,
            rng: &mut solver.rng,
            table: &solver.materials,
            spawns: &mut solver.spawn_queue,
        };
        solver.behaviors.update_all(&mut solver.particles, &mut ctx);
    }
    flush_pending(solver);
    let behaviors_ms = lap(t0);

    solver.frame += 1;

    if perf_on {
        let stats = &mut solver.perf_stats;
        stats.spawners_ms = spawners_ms;
        stats.behaviors_ms = behaviors_ms;
        stats.sub_steps = sub_steps;
        stats.particle_count = solver.particles.len() as u32;
        stats.link_count = solver.links.len() as u32;
        stats.step_ms = lap(frame_timer);
    }
}

/// One substep: gravity, point forces, collision, bounds, links, integration.
fn substep(solver: &mut Solver, dt: f32, perf_on: bool) {
    let settings = solver.settings;

    let t0 = PerfTimer::start_if(perf_on);
    if settings.gravity_enabled {
        apply_gravity(&mut solver.particles, settings.gravity, &solver.materials);
    }
    apply_point_forces(
        &mut solver.particles,
        &solver.point_forces,
        settings.touch_radius,
        settings.touch_gain,
    );
    let forces_ms = lap(t0);

    let t0 = PerfTimer::start_if(perf_on);
    let collisions = {
        let mut ctx = ReactionContext {
            table: &solver.materials,
            rng: &mut solver.rng,
            spawns: &mut solver.spawn_queue,
            step_dt: dt,
        };
        solve_collisions(&mut solver.particles, &solver.reactions, &mut ctx, settings.response_coef)
    };
    flush_pending(solver);
    let collision_ms = lap(t0);

    let t0 = PerfTimer::start_if(perf_on);
    let vented = apply_bounds(&mut solver.particles, &settings.bounds, &solver.materials);
    if vented > 0 {
        flush_pending(solver);
    }
    let bounds_ms = lap(t0);

    let t0 = PerfTimer::start_if(perf_on);
    apply_links(&mut solver.particles, &solver.links);
    let links_ms = lap(t0);

    let t0 = PerfTimer::start_if(perf_on);
    integrate_all(&mut solver.particles, dt);
    let integrate_ms = lap(t0);

    if perf_on {
        let stats = &mut solver.perf_stats;
        stats.forces_ms += forces_ms;
        stats.collision_ms += collision_ms;
        stats.bounds_ms += bounds_ms;
        stats.links_ms += links_ms;
        stats.integrate_ms += integrate_ms;
        stats.pairs_tested += collisions.pairs_tested;
        stats.contacts += collisions.contacts;
        stats.reactions_applied += collisions.reactions;
        stats.suppressed += collisions.suppressed;
        stats.vented += vented;
    }
}

/// Emitters queue particles; force fields are applied after the scan since
/// they touch every particle.
fn update_spawners(solver: &mut Solver, step_dt: f32) {
    let mut fields = Vec::new();
    {
        let mut ctx = BehaviorContext {
            frame: solver.frame,
            step_dt,
            rng: &mut solver.rng,
            table: &solver.materials,
            spawns: &mut solver.spawn_queue,
        };
        for p in solver.particles.iter_mut() {
            if p.is_removed() || !p.is_spawner() {
                continue;
            }
            if let Some(action) = update_spawner(p, &mut ctx) {
                fields.push(action);
            }
        }
    }

    for action in fields {
        match action {
            FieldAction::Push { center, radius, strength } => {
                apply_radial_force(&mut solver.particles, center, radius, strength, step_dt);
            }
            FieldAction::Vortex { center, radius, power } => {
                apply_vortex_force(&mut solver.particles, center, radius, power, step_dt);
            }
        }
    }
}
