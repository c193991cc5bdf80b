//! Spawner update
//!
//! Emitters queue particles directly. Force and black hole spawners need the
//! whole particle set, so they hand back a `FieldAction` for the solver to
//! apply once the spawner loop is done.

use super::BehaviorContext;
use crate::core::Vec2;
use crate::domain::{Particle, SpawnerKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldAction {
    Push { center: Vec2, radius: f32, strength: f32 },
    Vortex { center: Vec2, radius: f32, power: f32 },
}

pub fn update_spawner(particle: &mut Particle, ctx: &mut BehaviorContext) -> Option<FieldAction> {
    let kind = *particle.spawner_kind()?;
    match kind {
        SpawnerKind::Emit { material, interval, jitter, speed } => {
            particle.counter += 1;
            if particle.counter >= interval {
                particle.counter = 0;
                let dx = if jitter > 0.0 { ctx.rng.range(-jitter, jitter) } else { 0.0 };
                ctx.emit(material, particle.pos + Vec2::new(dx, 0.0), Vec2::new(0.0, speed));
            }
            None
        }
        SpawnerKind::Force { radius, strength } => Some(FieldAction::Push {
            center: particle.pos,
            radius,
            strength,
        }),
        SpawnerKind::BlackHole { radius, power } => Some(FieldAction::Vortex {
            center: particle.pos,
            radius,
            power,
        }),
    }
}
