//! FireBehavior - burns for a fixed number of frames, shedding smoke

use super::{age, Behavior, BehaviorContext};
use crate::core::Vec2;
use crate::domain::{Material, Particle};

/// Frames between smoke rolls
pub const EMBER_WINDOW: u64 = 6;

pub struct FireBehavior;

impl Behavior for FireBehavior {
    fn update(&self, particle: &mut Particle, ctx: &mut BehaviorContext) {
        if age(particle, 1) {
            return;
        }
        if ctx.frame % EMBER_WINDOW != 0 || !ctx.rng.one_in(3) {
            return;
        }
        let velocity = Vec2::new(ctx.rng.range(-30.0, 30.0), ctx.rng.range(-120.0, -60.0));
        let pos = particle.pos - Vec2::new(0.0, particle.radius);
        ctx.emit(Material::Smoke, pos, velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;

    #[test]
    fn burns_out_after_lifespan() {
        let mut h = Harness::new(9);
        let mut fire = Particle::from_material(Material::Fire, Vec2::new(50.0, 50.0), &h.table);
        let frames = fire.lifespan as u64;
        for frame in 0..frames {
            FireBehavior.update(&mut fire, &mut h.ctx(frame));
        }
        assert!(fire.is_removed());
    }

    #[test]
    fn smoke_rises_from_fire() {
        let mut h = Harness::new(9);
        for frame in 0..600u64 {
            let mut fire = Particle::from_material(Material::Fire, Vec2::new(50.0, 50.0), &h.table);
            FireBehavior.update(&mut fire, &mut h.ctx(frame));
        }
        assert!(!h.spawns.is_empty());
        let dt = 1.0 / 480.0;
        for smoke in &h.spawns {
            assert_eq!(smoke.material, Material::Smoke);
            let v = smoke.velocity(dt);
            assert!(v.y <= -59.0 && v.y >= -121.0);
            assert!(v.x.abs() <= 31.0);
        }
    }
}
