//! Pass-boundary bookkeeping: drop marked particles, append queued ones.

use super::Solver;

/// Flush everything requested during the last pass. Returns
/// `(removed, spawned)`.
pub(super) fn flush_pending(solver: &mut Solver) -> (usize, usize) {
    let removed = compact(solver);
    let spawned = solver.spawn_queue.len();
    if spawned > 0 {
        solver.particles.append(&mut solver.spawn_queue);
    }
    if solver.perf_enabled {
        solver.perf_stats.removed += removed as u32;
        solver.perf_stats.spawned += spawned as u32;
    }
    (removed, spawned)
}

/// Remove marked particles, keeping survivor order. Links are remapped to the
/// new indices; links that lost an endpoint go with it.
pub(super) fn compact(solver: &mut Solver) -> usize {
    if !solver.particles.iter().any(|p| p.is_removed()) {
        return 0;
    }

    let mut remap = Vec::with_capacity(solver.particles.len());
    let mut next = 0usize;
    for p in &solver.particles {
        if p.is_removed() {
            remap.push(None);
        } else {
            remap.push(Some(next));
            next += 1;
        }
    }

    let before = solver.particles.len();
    solver.particles.retain(|p| !p.is_removed());
    solver.links.retain_mut(|link| link.remap(&remap));
    before - solver.particles.len()
}
