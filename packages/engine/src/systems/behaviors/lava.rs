//! LavaBehavior - occasionally throws a short-lived spark of fire upward

use super::{Behavior, BehaviorContext};
use crate::core::Vec2;
use crate::domain::{Material, Particle};

/// One spark per this many frames, on average
pub const LAVA_SPARK_ODDS: u32 = 240;
/// Frames a lava spark burns
pub const LAVA_SPARK_LIFESPAN: i32 = 20;

pub struct LavaBehavior;

impl Behavior for LavaBehavior {
    fn update(&self, particle: &mut Particle, ctx: &mut BehaviorContext) {
        if !ctx.rng.one_in(LAVA_SPARK_ODDS) {
            return;
        }
        let velocity = Vec2::new(ctx.rng.range(-40.0, 40.0), ctx.rng.range(-180.0, -90.0));
        let pos = particle.pos - Vec2::new(0.0, particle.radius * 2.0);
        let spark = ctx.emit(Material::Fire, pos, velocity);
        spark.lifespan = LAVA_SPARK_LIFESPAN;
    }
}
