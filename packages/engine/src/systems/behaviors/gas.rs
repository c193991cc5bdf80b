//! GasBehavior - gas and smoke thin out and disappear

use super::{age, Behavior, BehaviorContext};
use crate::domain::Particle;

/// Frames between lifespan ticks
pub const DECAY_INTERVAL: u64 = 4;

pub struct GasBehavior;

impl Behavior for GasBehavior {
    fn update(&self, particle: &mut Particle, ctx: &mut BehaviorContext) {
        if ctx.frame % DECAY_INTERVAL == 0 {
            age(particle, 1);
        }
    }
}
