//! WoodBehavior - counts down the ignition cooldown left by a failed burn roll

use super::{Behavior, BehaviorContext};
use crate::domain::Particle;

pub struct WoodBehavior;

impl Behavior for WoodBehavior {
    #[inline]
    fn update(&self, particle: &mut Particle, _ctx: &mut BehaviorContext) {
        particle.counter = particle.counter.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;
    use crate::core::Vec2;
    use crate::domain::Material;

    #[test]
    fn cooldown_counts_down_to_zero() {
        let mut h = Harness::new(5);
        let mut wood = Particle::from_material(Material::Wood, Vec2::zero(), &h.table);
        wood.counter = 2;
        for frame in 0..5 {
            WoodBehavior.update(&mut wood, &mut h.ctx(frame));
        }
        assert_eq!(wood.counter, 0);
    }
}
