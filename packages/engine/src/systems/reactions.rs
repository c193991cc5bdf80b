//! Reactions - pairwise material rules consulted before collision correction
//!
//! Rules are data: a LUT keyed by the sorted material pair holds one
//! `PairRule`. Pairs without a rule fall back to two generic contact
//! effects (fluid displacement, friction transfer).
//!
//! Evaluation order per overlapping pair:
//! transform -> suppress -> buoyancy -> displacement -> friction.
//! A transform short-circuits, so nothing else touches a consumed particle.
//! Transforms name the material they consume; id order never decides it.
//! Buoyancy skips displacement (it already set the gas velocity).

use crate::core::{Rng, Vec2};
use crate::domain::{Material, MaterialTable, Particle, MATERIAL_COUNT};

/// Gas particles released by a water + lava quench
pub const GAS_CLUSTER: u8 = 4;
/// Minimum heavy/light mass ratio for fluid displacement
pub const DISPLACEMENT_RATIO: f32 = 1.5;
/// Lateral speed (px/s) given to a displaced particle
pub const DISPLACE_LATERAL: f32 = 15.0;
/// Upward speed (px/s) given to a displaced particle
pub const DISPLACE_LIFT: f32 = 25.0;
/// Upward speed (px/s) forced onto gas touching water
pub const BUOYANCY_KICK: f32 = 200.0;

/// What the collision pass should do with the pair after the rule ran
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Apply the normal positional correction
    Correct,
    /// Skip correction, both particles stay
    Suppress,
    /// A transform removed at least one reactant
    Consumed,
}

/// Which reactants a transform destroys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consumes {
    Both,
    /// Only the reactant made of this material
    Only(Material),
}

impl Consumes {
    #[inline]
    pub fn takes(self, material: Material) -> bool {
        match self {
            Consumes::Both => true,
            Consumes::Only(m) => m == material,
        }
    }
}

/// Destroy-and-recreate rule
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub consumes: Consumes,
    /// Spawned at the midpoint; the first one sits exactly on it
    pub products: &'static [(Material, u8)],
    /// Max offset of the remaining products from the midpoint
    pub spread: f32,
    /// 0-255 probability gate, `None` = always
    pub chance: Option<u8>,
    /// Frames the consumed reactant waits after a failed gate
    pub cooldown: u32,
}

#[derive(Clone, Copy, Debug)]
pub enum PairRule {
    Suppress,
    Transform(Transform),
    /// `lifted` is forced upward at `kick` px/s; correction still runs
    Buoyancy { lifted: Material, kick: f32 },
}

const QUENCH_PRODUCTS: &[(Material, u8)] = &[(Material::Obsidian, 1), (Material::Gas, GAS_CLUSTER)];
const WOOD_FIRE_PRODUCTS: &[(Material, u8)] = &[(Material::Fire, 1), (Material::Smoke, 3)];
const DOUSE_PRODUCTS: &[(Material, u8)] = &[(Material::Gas, 1)];

/// O(1) pair lookup
#[derive(Clone, Debug)]
pub struct ReactionTable {
    lut: Vec<Option<PairRule>>,
}

impl ReactionTable {
    /// No rules at all; every contact is plain collision (plus fallbacks).
    pub fn empty() -> Self {
        Self {
            lut: vec![None; MATERIAL_COUNT * MATERIAL_COUNT],
        }
    }

    pub fn from_generated() -> Self {
        let mut table = Self::empty();

        table.set(
            Material::Water,
            Material::Lava,
            PairRule::Transform(Transform {
                consumes: Consumes::Both,
                products: QUENCH_PRODUCTS,
                spread: 4.0,
                chance: None,
                cooldown: 0,
            }),
        );
        for (igniter, chance) in [(Material::Fire, 40), (Material::Lava, 80)] {
            table.set(Material::Wood, igniter, PairRule::Transform(ignition(chance)));
        }
        table.set(
            Material::Water,
            Material::Fire,
            PairRule::Transform(Transform {
                consumes: Consumes::Only(Material::Fire),
                products: DOUSE_PRODUCTS,
                spread: 0.0,
                chance: None,
                cooldown: 0,
            }),
        );

        for gas in [Material::Gas, Material::Smoke] {
            table.set(gas, Material::Obsidian, PairRule::Suppress);
            table.set(gas, Material::Fire, PairRule::Suppress);
            table.set(gas, Material::Water, PairRule::Buoyancy { lifted: gas, kick: BUOYANCY_KICK });
        }

        table
    }

    #[inline]
    fn index(a: Material, b: Material) -> usize {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo.index() * MATERIAL_COUNT + hi.index()
    }

    /// Register a rule for the unordered pair (a, b).
    pub fn set(&mut self, a: Material, b: Material, rule: PairRule) {
        let idx = Self::index(a, b);
        self.lut[idx] = Some(rule);
    }

    pub fn get(&self, a: Material, b: Material) -> Option<&PairRule> {
        self.lut.get(Self::index(a, b))?.as_ref()
    }

}

/// Wood burns into fire and smoke; a failed roll leaves the wood cooling.
fn ignition(chance: u8) -> Transform {
    Transform {
        consumes: Consumes::Only(Material::Wood),
        products: WOOD_FIRE_PRODUCTS,
        spread: 3.0,
        chance: Some(chance),
        cooldown: 20,
    }
}

impl Default for ReactionTable {
    fn default() -> Self {
        Self::from_generated()
    }
}

/// Everything a rule may touch besides the two reactants
pub struct ReactionContext<'a> {
    pub table: &'a MaterialTable,
    pub rng: &'a mut Rng,
    pub spawns: &'a mut Vec<Particle>,
    pub step_dt: f32,
}

/// Run the rule for an overlapping pair.
pub fn resolve_pair(
    rules: &ReactionTable,
    ctx: &mut ReactionContext,
    a: &mut Particle,
    b: &mut Particle,
) -> Outcome {
    let (lo, hi) = if a.material <= b.material { (a, b) } else { (b, a) };

    match rules.get(lo.material, hi.material) {
        Some(PairRule::Transform(t)) => {
            if apply_transform(t, ctx, lo, hi) {
                return Outcome::Consumed;
            }
        }
        Some(PairRule::Suppress) => return Outcome::Suppress,
        Some(&PairRule::Buoyancy { lifted, kick }) => {
            let gas: &mut Particle = if lo.material == lifted { &mut *lo } else { &mut *hi };
            let mut v = gas.velocity(ctx.step_dt);
            if v.y > -kick {
                v.y = -kick;
                gas.set_velocity(v, ctx.step_dt);
            }
            transfer_friction(lo, hi);
            return Outcome::Correct;
        }
        None => {}
    }

    if displace(ctx, lo, hi) {
        return Outcome::Suppress;
    }
    transfer_friction(lo, hi);
    Outcome::Correct
}

/// Returns false when the probability gate or a cooldown held the reaction back.
fn apply_transform(t: &Transform, ctx: &mut ReactionContext, lo: &mut Particle, hi: &mut Particle) -> bool {
    let take_lo = t.consumes.takes(lo.material);
    let take_hi = t.consumes.takes(hi.material);

    if let Some(chance) = t.chance {
        let cooling = (take_lo && lo.counter > 0) || (take_hi && hi.counter > 0);
        if cooling {
            return false;
        }
        if !ctx.rng.chance(chance) {
            if take_lo {
                lo.counter = t.cooldown;
            }
            if take_hi {
                hi.counter = t.cooldown;
            }
            return false;
        }
    }

    let mid = (lo.pos + hi.pos) * 0.5;
    if take_lo {
        lo.mark_removed();
    }
    if take_hi {
        hi.mark_removed();
    }

    let mut first = true;
    for &(material, count) in t.products {
        for _ in 0..count {
            let offset = if first || t.spread <= 0.0 {
                Vec2::zero()
            } else {
                Vec2::new(
                    ctx.rng.range(-t.spread, t.spread),
                    ctx.rng.range(-t.spread, t.spread),
                )
            };
            first = false;
            ctx.spawns.push(Particle::from_material(material, mid + offset, ctx.table));
        }
    }
    true
}

/// Denser particle shoves a lighter one aside when a fluid is involved.
fn displace(ctx: &mut ReactionContext, lo: &mut Particle, hi: &mut Particle) -> bool {
    if !(lo.fluid || hi.fluid) {
        return false;
    }
    let (heavy, light) = if lo.mass >= hi.mass { (lo, hi) } else { (hi, lo) };
    if light.pinned || light.mass <= 0.0 || heavy.mass / light.mass < DISPLACEMENT_RATIO {
        return false;
    }
    let kick = Vec2::new(ctx.rng.sign() * DISPLACE_LATERAL, -DISPLACE_LIFT);
    light.add_velocity(kick, ctx.step_dt);
    true
}

/// The slipperier side of a contact (or the free side against a pinned one)
/// loses velocity by its own friction coefficient.
fn transfer_friction(lo: &mut Particle, hi: &mut Particle) {
    let subject = match (lo.pinned, hi.pinned) {
        (true, true) => None,
        (false, true) => Some(lo),
        (true, false) => Some(hi),
        (false, false) => {
            if lo.friction < hi.friction {
                Some(lo)
            } else if hi.friction < lo.friction {
                Some(hi)
            } else {
                None
            }
        }
    };
    if let Some(p) = subject {
        let d = p.displacement();
        p.prev_pos = p.pos - d * p.friction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 480.0;

    fn ctx_parts() -> (MaterialTable, Rng, Vec<Particle>) {
        (MaterialTable::from_generated(), Rng::new(42), Vec::new())
    }

    #[test]
    fn lookup_is_order_independent() {
        let rules = ReactionTable::from_generated();
        assert!(rules.get(Material::Lava, Material::Water).is_some());
        assert!(rules.get(Material::Water, Material::Lava).is_some());
        assert!(rules.get(Material::Sand, Material::Sand).is_none());
    }

    #[test]
    fn quench_consumes_both_and_spawns_cluster() {
        let rules = ReactionTable::from_generated();
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut lava = Particle::from_material(Material::Lava, Vec2::new(10.0, 0.0), &table);
        let mut water = Particle::from_material(Material::Water, Vec2::new(0.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        let out = resolve_pair(&rules, &mut ctx, &mut lava, &mut water);

        assert_eq!(out, Outcome::Consumed);
        assert!(lava.is_removed() && water.is_removed());
        assert_eq!(spawns.len(), 1 + GAS_CLUSTER as usize);
        assert_eq!(spawns[0].material, Material::Obsidian);
        assert_eq!(spawns[0].pos, Vec2::new(5.0, 0.0));
        assert!(spawns[1..].iter().all(|p| p.material == Material::Gas));
    }

    #[test]
    fn suppress_leaves_both_untouched() {
        let rules = ReactionTable::from_generated();
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut gas = Particle::from_material(Material::Gas, Vec2::new(0.0, 0.0), &table);
        let mut obsidian = Particle::from_material(Material::Obsidian, Vec2::new(3.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        assert_eq!(resolve_pair(&rules, &mut ctx, &mut gas, &mut obsidian), Outcome::Suppress);
        assert!(!gas.is_removed() && !obsidian.is_removed());
        assert!(spawns.is_empty());
    }

    #[test]
    fn gas_touching_water_is_forced_upward() {
        let rules = ReactionTable::from_generated();
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut gas = Particle::from_material(Material::Gas, Vec2::new(0.0, 0.0), &table);
        let mut water = Particle::from_material(Material::Water, Vec2::new(3.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        assert_eq!(resolve_pair(&rules, &mut ctx, &mut water, &mut gas), Outcome::Correct);
        assert!((gas.velocity(DT).y + BUOYANCY_KICK).abs() < 0.5);
        assert_eq!(water.velocity(DT), Vec2::zero());
    }

    #[test]
    fn failed_ignition_starts_cooldown() {
        let mut rules = ReactionTable::empty();
        rules.set(
            Material::Wood,
            Material::Fire,
            PairRule::Transform(Transform { chance: Some(0), ..ignition(40) }),
        );
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut wood = Particle::from_material(Material::Wood, Vec2::new(0.0, 0.0), &table);
        let mut fire = Particle::from_material(Material::Fire, Vec2::new(3.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        let out = resolve_pair(&rules, &mut ctx, &mut wood, &mut fire);

        assert_ne!(out, Outcome::Consumed);
        assert_eq!(wood.counter, 20);
        assert!(!wood.is_removed());
        assert!(spawns.is_empty());
    }

    #[test]
    fn heavy_particle_displaces_light_fluid() {
        let rules = ReactionTable::empty();
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut sand = Particle::from_material(Material::Sand, Vec2::new(0.0, 0.0), &table);
        let mut gas = Particle::from_material(Material::Gas, Vec2::new(3.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        assert_eq!(resolve_pair(&rules, &mut ctx, &mut sand, &mut gas), Outcome::Suppress);
        let v = gas.velocity(DT);
        assert!(v.y < 0.0);
        assert!((v.x.abs() - DISPLACE_LATERAL).abs() < 0.5);
        assert_eq!(sand.velocity(DT), Vec2::zero());
    }

    #[test]
    fn slippery_side_loses_velocity_against_pinned() {
        let rules = ReactionTable::empty();
        let (table, mut rng, mut spawns) = ctx_parts();
        let mut stone = Particle::from_material(Material::Stone, Vec2::new(0.0, 0.0), &table);
        stone.pin();
        let mut sand = Particle::from_material(Material::Sand, Vec2::new(8.0, 0.0), &table);
        sand.set_velocity(Vec2::new(-100.0, 0.0), DT);
        let before = sand.displacement();
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        assert_eq!(resolve_pair(&rules, &mut ctx, &mut stone, &mut sand), Outcome::Correct);
        let after = sand.displacement();
        assert!((after.x - before.x * sand.friction).abs() < 1e-4);
    }

    /// Every shipped transform as (pair, materials it destroys).
    fn shipped_transforms() -> Vec<(Material, Material, Transform)> {
        let rules = ReactionTable::from_generated();
        let mut found = Vec::new();
        for (i, &a) in Material::ALL.iter().enumerate() {
            for &b in &Material::ALL[i..] {
                if let Some(&PairRule::Transform(t)) = rules.get(a, b) {
                    found.push((a, b, t));
                }
            }
        }
        found
    }

    #[test]
    fn transforms_consume_the_intended_reactant() {
        let expected = [
            (Material::Water, Material::Lava, vec![Material::Water, Material::Lava]),
            (Material::Wood, Material::Fire, vec![Material::Wood]),
            (Material::Lava, Material::Wood, vec![Material::Wood]),
            (Material::Water, Material::Fire, vec![Material::Fire]),
        ];
        let shipped = shipped_transforms();
        assert_eq!(shipped.len(), expected.len());

        for (a, b, consumed) in expected {
            let (_, _, t) = shipped
                .iter()
                .find(|(x, y, _)| (*x, *y) == (a, b) || (*x, *y) == (b, a))
                .unwrap_or_else(|| panic!("no transform for {a:?} + {b:?}"));
            let mut rules = ReactionTable::empty();
            rules.set(a, b, PairRule::Transform(Transform { chance: None, ..*t }));

            // argument order must not matter
            for flip in [false, true] {
                let (table, mut rng, mut spawns) = ctx_parts();
                let mut pa = Particle::from_material(a, Vec2::new(0.0, 0.0), &table);
                let mut pb = Particle::from_material(b, Vec2::new(4.0, 0.0), &table);
                let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };
                let out = if flip {
                    resolve_pair(&rules, &mut ctx, &mut pb, &mut pa)
                } else {
                    resolve_pair(&rules, &mut ctx, &mut pa, &mut pb)
                };

                assert_eq!(out, Outcome::Consumed);
                assert_eq!(pa.is_removed(), consumed.contains(&a), "{a:?} + {b:?}");
                assert_eq!(pb.is_removed(), consumed.contains(&b), "{a:?} + {b:?}");
                assert_eq!(spawns.len(), t.products.iter().map(|&(_, n)| n as usize).sum::<usize>());
            }
        }
    }

    #[test]
    fn failed_roll_cools_only_the_consumed_reactant() {
        for (a, b, t) in shipped_transforms() {
            if t.chance.is_none() {
                continue;
            }
            let mut rules = ReactionTable::empty();
            rules.set(a, b, PairRule::Transform(Transform { chance: Some(0), ..t }));
            let (table, mut rng, mut spawns) = ctx_parts();
            let mut pa = Particle::from_material(a, Vec2::new(0.0, 0.0), &table);
            let mut pb = Particle::from_material(b, Vec2::new(4.0, 0.0), &table);
            let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

            assert_ne!(resolve_pair(&rules, &mut ctx, &mut pa, &mut pb), Outcome::Consumed);

            for p in [&pa, &pb] {
                let want = if t.consumes.takes(p.material) { t.cooldown } else { 0 };
                assert_eq!(p.counter, want, "{:?} in {a:?} + {b:?}", p.material);
                assert!(!p.is_removed());
            }
            assert!(spawns.is_empty());
        }
    }

    #[test]
    fn lava_ignites_wood_like_fire_does() {
        let rules = ReactionTable::from_generated();
        let by_fire = match rules.get(Material::Wood, Material::Fire) {
            Some(&PairRule::Transform(t)) => t,
            other => panic!("unexpected rule {other:?}"),
        };
        let by_lava = match rules.get(Material::Lava, Material::Wood) {
            Some(&PairRule::Transform(t)) => t,
            other => panic!("unexpected rule {other:?}"),
        };
        assert_eq!(by_lava.consumes, Consumes::Only(Material::Wood));
        assert_eq!(by_lava.products, by_fire.products);
        assert_eq!(by_lava.cooldown, by_fire.cooldown);
        assert_eq!(by_lava.chance, Some(80));
        assert_eq!(by_fire.chance, Some(40));
    }

    #[test]
    fn buoyancy_lifts_the_named_material_whatever_its_gravity() {
        let rules = ReactionTable::from_generated();
        let table =
            MaterialTable::from_bundle_json(r#"{ "materials": [ { "key": "base:smoke", "gravityScale": 0.5 } ] }"#)
                .unwrap();
        let mut rng = Rng::new(3);
        let mut spawns = Vec::new();
        let mut smoke = Particle::from_material(Material::Smoke, Vec2::new(0.0, 0.0), &table);
        let mut water = Particle::from_material(Material::Water, Vec2::new(3.0, 0.0), &table);
        let mut ctx = ReactionContext { table: &table, rng: &mut rng, spawns: &mut spawns, step_dt: DT };

        assert_eq!(resolve_pair(&rules, &mut ctx, &mut water, &mut smoke), Outcome::Correct);
        assert!((smoke.velocity(DT).y + BUOYANCY_KICK).abs() < 0.5);
        assert_eq!(water.velocity(DT), Vec2::zero());
    }
}
