//! All-pairs overlap resolution
//!
//! Every unordered pair is tested once per substep (O(n^2), no broad phase).
//! Reactions get the first say; only pairs that come back `Outcome::Correct`
//! are pushed apart.

use crate::core::Vec2;
use crate::domain::{Particle, MIN_DISTANCE};
use crate::systems::reactions::{resolve_pair, Outcome, ReactionContext, ReactionTable};

/// Separation axis for coincident centres. Points up so stacked spawns pop out
/// of each other instead of sinking.
pub const FALLBACK_AXIS: Vec2 = Vec2::new(0.0, -1.0);

/// Per-pass counters, summed into the frame perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: u32,
    pub contacts: u32,
    pub reactions: u32,
    pub suppressed: u32,
}

impl CollisionStats {
    pub fn merge(&mut self, other: CollisionStats) {
        self.pairs_tested += other.pairs_tested;
        self.contacts += other.contacts;
        self.reactions += other.reactions;
        self.suppressed += other.suppressed;
    }
}

/// One collision pass.
///
/// Removed particles and spawners never participate. A particle consumed by a
/// reaction stops taking part for the rest of the pass.
pub fn solve_collisions(
    particles: &mut [Particle],
    rules: &ReactionTable,
    ctx: &mut ReactionContext,
    response_coef: f32,
) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let count = particles.len();

    for i in 0..count {
        if !particles[i].is_active() {
            continue;
        }
        for j in (i + 1)..count {
            let (head, tail) = particles.split_at_mut(j);
            let a = &mut head[i];
            if !a.is_active() {
                break;
            }
            let b = &mut tail[0];
            if !b.is_active() {
                continue;
            }

            stats.pairs_tested += 1;
            let axis = a.pos - b.pos;
            let dist2 = axis.length_squared();
            let min_dist = a.radius + b.radius;
            if dist2 >= min_dist * min_dist {
                continue;
            }
            stats.contacts += 1;

            match resolve_pair(rules, ctx, a, b) {
                Outcome::Consumed => {
                    stats.reactions += 1;
                    continue;
                }
                Outcome::Suppress => {
                    stats.suppressed += 1;
                    continue;
                }
                Outcome::Correct => {}
            }

            let raw = dist2.sqrt();
            let (n, dist) = if raw < MIN_DISTANCE {
                (FALLBACK_AXIS, MIN_DISTANCE)
            } else {
                (axis / raw, raw)
            };

            let total = a.mass + b.mass;
            let (share_a, share_b) = if total > 0.0 {
                (a.mass / total, b.mass / total)
            } else {
                (0.5, 0.5)
            };
            // delta < 0 while overlapping; the lighter body moves further
            let delta = 0.5 * response_coef * (dist - min_dist);
            if !a.pinned {
                a.pos -= n * (share_b * delta);
            }
            if !b.pinned {
                b.pos += n * (share_a * delta);
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rng;
    use crate::domain::{Material, MaterialTable};

    fn run(particles: &mut [Particle], rules: &ReactionTable) -> (CollisionStats, Vec<Particle>) {
        let table = MaterialTable::from_generated();
        let mut rng = Rng::new(7);
        let mut spawns = Vec::new();
        let mut ctx = ReactionContext {
            table: &table,
            rng: &mut rng,
            spawns: &mut spawns,
            step_dt: 1.0 / 480.0,
        };
        let stats = solve_collisions(particles, rules, &mut ctx, 0.75);
        (stats, spawns)
    }

    #[test]
    fn overlapping_equal_masses_split_evenly() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Sand, Vec2::new(100.0, 100.0), &table),
            Particle::from_material(Material::Sand, Vec2::new(106.0, 100.0), &table),
        ];
        let (stats, _) = run(&mut ps, &ReactionTable::empty());

        assert_eq!(stats.contacts, 1);
        // overlap 4, corrected 0.5 * 0.75 * 4 = 1.5, split 0.75 each
        assert!((ps[0].pos.x - 99.25).abs() < 1e-4);
        assert!((ps[1].pos.x - 106.75).abs() < 1e-4);
    }

    #[test]
    fn lighter_particle_takes_the_larger_share() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Sand, Vec2::new(100.0, 100.0), &table),
            Particle::from_material(Material::Stone, Vec2::new(106.0, 100.0), &table),
        ];
        run(&mut ps, &ReactionTable::empty());

        // correction 1.5 split by mass 1.5 : 3.0
        assert!((ps[0].pos.x - 99.0).abs() < 1e-4);
        assert!((ps[1].pos.x - 106.5).abs() < 1e-4);
    }

    #[test]
    fn pinned_particle_does_not_move() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Stone, Vec2::new(100.0, 100.0), &table),
            Particle::from_material(Material::Stone, Vec2::new(105.0, 100.0), &table),
        ];
        ps[0].pin();
        run(&mut ps, &ReactionTable::empty());

        assert_eq!(ps[0].pos, Vec2::new(100.0, 100.0));
        assert!(ps[1].pos.x > 105.0);
    }

    #[test]
    fn coincident_centres_use_fallback_axis() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Stone, Vec2::new(50.0, 50.0), &table),
            Particle::from_material(Material::Stone, Vec2::new(50.0, 50.0), &table),
        ];
        run(&mut ps, &ReactionTable::empty());

        assert!(ps.iter().all(|p| p.pos.is_finite()));
        assert_eq!(ps[0].pos.x, 50.0);
        assert!(ps[0].pos.y < ps[1].pos.y);
    }

    #[test]
    fn spawners_and_distant_pairs_are_ignored() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Spawner, Vec2::new(10.0, 10.0), &table),
            Particle::from_material(Material::Sand, Vec2::new(12.0, 10.0), &table),
            Particle::from_material(Material::Sand, Vec2::new(80.0, 10.0), &table),
        ];
        let (stats, _) = run(&mut ps, &ReactionTable::empty());

        assert_eq!(stats.pairs_tested, 1);
        assert_eq!(stats.contacts, 0);
        assert_eq!(ps[1].pos, Vec2::new(12.0, 10.0));
    }

    #[test]
    fn consumed_particle_leaves_the_pass() {
        let table = MaterialTable::from_generated();
        let mut ps = vec![
            Particle::from_material(Material::Water, Vec2::new(20.0, 20.0), &table),
            Particle::from_material(Material::Lava, Vec2::new(24.0, 20.0), &table),
            Particle::from_material(Material::Lava, Vec2::new(16.0, 20.0), &table),
        ];
        let (stats, spawns) = run(&mut ps, &ReactionTable::from_generated());

        assert_eq!(stats.reactions, 1);
        assert!(ps[0].is_removed() && ps[1].is_removed());
        assert!(!ps[2].is_removed());
        assert_eq!(spawns.len(), 5);
    }
}
