//! Behaviors - once-per-frame material logic
//!
//! Runs after the substeps. Each material with a life of its own gets one
//! small behavior; everything else is pure physics.
//!
//! - gas.rs     - gas / smoke decay
//! - fire.rs    - burn down, shed smoke
//! - lava.rs    - throw sparks
//! - wood.rs    - ignition cooldown
//! - spawner.rs - emit / force / black hole

mod fire;
mod gas;
mod lava;
mod spawner;
mod wood;

pub use fire::{FireBehavior, EMBER_WINDOW};
pub use gas::{GasBehavior, DECAY_INTERVAL};
pub use lava::{LavaBehavior, LAVA_SPARK_LIFESPAN, LAVA_SPARK_ODDS};
pub use spawner::{update_spawner, FieldAction};
pub use wood::WoodBehavior;

use crate::core::{Rng, Vec2};
use crate::domain::{Material, MaterialTable, Particle};

/// Update context passed to behaviors
pub struct BehaviorContext<'a> {
    /// Frame being finished (not yet incremented)
    pub frame: u64,
    /// Substep length, used for every velocity write
    pub step_dt: f32,
    pub rng: &'a mut Rng,
    pub table: &'a MaterialTable,
    /// Particles created here are appended after the pass.
    pub spawns: &'a mut Vec<Particle>,
}

impl<'a> BehaviorContext<'a> {
    /// Queue a new particle of `material` moving at `velocity` px/s.
    pub fn emit(&mut self, material: Material, pos: Vec2, velocity: Vec2) -> &mut Particle {
        let mut p = Particle::from_material(material, pos, self.table);
        p.set_velocity(velocity, self.step_dt);
        self.spawns.push(p);
        let last = self.spawns.len() - 1;
        &mut self.spawns[last]
    }
}

/// Behavior trait - one per material family
pub trait Behavior {
    fn update(&self, particle: &mut Particle, ctx: &mut BehaviorContext);
}

/// Burn `amount` off a finite lifespan. Returns true when the particle expired
/// (it is then marked for removal). Negative lifespans never expire.
#[inline]
pub fn age(particle: &mut Particle, amount: i32) -> bool {
    if particle.lifespan < 0 {
        return false;
    }
    particle.lifespan -= amount;
    if particle.lifespan <= 0 {
        particle.mark_removed();
        return true;
    }
    false
}

/// Behavior registry - dispatch by material
pub struct BehaviorRegistry {
    gas: GasBehavior,
    fire: FireBehavior,
    lava: LavaBehavior,
    wood: WoodBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            gas: GasBehavior,
            fire: FireBehavior,
            lava: LavaBehavior,
            wood: WoodBehavior,
        }
    }

    #[inline]
    pub fn update(&self, particle: &mut Particle, ctx: &mut BehaviorContext) {
        match particle.material {
            Material::Gas | Material::Smoke => self.gas.update(particle, ctx),
            Material::Fire => self.fire.update(particle, ctx),
            Material::Lava => self.lava.update(particle, ctx),
            Material::Wood => self.wood.update(particle, ctx),
            _ => {}
        }
    }

    /// Passive pass over every live, non-spawner particle.
    pub fn update_all(&self, particles: &mut [Particle], ctx: &mut BehaviorContext) {
        for p in particles.iter_mut() {
            if p.is_active() {
                self.update(p, ctx);
            }
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::*;

    #[test]
    fn inert_materials_are_untouched() {
        let mut h = Harness::new(1);
        let registry = BehaviorRegistry::new();
        let mut sand = Particle::from_material(Material::Sand, Vec2::new(1.0, 1.0), &h.table);
        let before = sand.clone();
        for frame in 0..100 {
            registry.update(&mut sand, &mut h.ctx(frame));
        }
        assert_eq!(sand.lifespan, before.lifespan);
        assert_eq!(sand.counter, before.counter);
        assert!(!sand.is_removed());
        assert!(h.spawns.is_empty());
    }

    #[test]
    fn infinite_lifespan_never_expires() {
        let table = MaterialTable::from_generated();
        let mut p = Particle::from_material(Material::Gas, Vec2::zero(), &table);
        p.lifespan = -1;
        assert!(!age(&mut p, 5));
        assert_eq!(p.lifespan, -1);
        assert!(!p.is_removed());
    }
}
