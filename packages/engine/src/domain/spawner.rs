//! Spawner payloads
//!
//! A spawner is a pinned, non-colliding particle. What it does each frame is
//! carried here instead of in the generic physical fields.

use serde::{Deserialize, Serialize};

use crate::domain::materials::{Material, MaterialId};

/// Snapshot code for a force spawner.
pub const FORCE_CODE: i32 = 254;
/// Snapshot code for a black hole spawner.
pub const BLACKHOLE_CODE: i32 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpawnerKind {
    /// Emit `material` every `interval` frames.
    Emit {
        material: Material,
        interval: u32,
        /// Max lateral offset of each emitted particle
        jitter: f32,
        /// Initial downward speed of each emitted particle
        speed: f32,
    },
    /// Radial push away from the spawner.
    Force { radius: f32, strength: f32 },
    /// Pull toward the spawner with an orbital component.
    BlackHole { radius: f32, power: f32 },
}

impl SpawnerKind {
    pub fn emitter(material: Material, interval: u32) -> Self {
        SpawnerKind::Emit {
            material,
            interval: interval.max(1),
            jitter: 2.0,
            speed: 0.0,
        }
    }

    /// Emitted material, if this spawner emits at all.
    pub fn target(&self) -> Option<Material> {
        match self {
            SpawnerKind::Emit { material, .. } => Some(*material),
            _ => None,
        }
    }

    /// `spawnerType` column of a snapshot row.
    pub fn code(&self) -> i32 {
        match self {
            SpawnerKind::Emit { material, .. } => material.id() as i32,
            SpawnerKind::Force { .. } => FORCE_CODE,
            SpawnerKind::BlackHole { .. } => BLACKHOLE_CODE,
        }
    }

    /// `(counter, bounce, frictionCoeff)` columns of a snapshot row.
    pub fn snapshot_fields(&self) -> (u32, f32, f32) {
        match *self {
            SpawnerKind::Emit { interval, jitter, speed, .. } => (interval, jitter, speed),
            SpawnerKind::Force { radius, strength } => (0, radius, strength),
            SpawnerKind::BlackHole { radius, power } => (0, radius, power),
        }
    }

    /// Rebuild from snapshot columns. `None` when `code` names nothing.
    pub fn from_snapshot(code: i32, counter: u32, bounce: f32, friction: f32) -> Option<Self> {
        match code {
            FORCE_CODE => Some(SpawnerKind::Force { radius: bounce, strength: friction }),
            BLACKHOLE_CODE => Some(SpawnerKind::BlackHole { radius: bounce, power: friction }),
            c if (0..=MaterialId::MAX as i32).contains(&c) => {
                let material = Material::from_id(c as MaterialId)?;
                if material == Material::Spawner {
                    return None;
                }
                Some(SpawnerKind::Emit {
                    material,
                    interval: counter.max(1),
                    jitter: bounce,
                    speed: friction,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_codes() {
        assert_eq!(SpawnerKind::emitter(Material::Water, 4).code(), Material::Water.id() as i32);
        assert_eq!(SpawnerKind::Force { radius: 1.0, strength: 2.0 }.code(), FORCE_CODE);
        assert_eq!(SpawnerKind::BlackHole { radius: 1.0, power: 2.0 }.code(), BLACKHOLE_CODE);
    }

    #[test]
    fn payload_survives_snapshot_columns() {
        for kind in [
            SpawnerKind::Emit { material: Material::Lava, interval: 9, jitter: 3.5, speed: 40.0 },
            SpawnerKind::Force { radius: 60.0, strength: 250.0 },
            SpawnerKind::BlackHole { radius: 90.0, power: 1200.0 },
        ] {
            let (counter, bounce, friction) = kind.snapshot_fields();
            assert_eq!(SpawnerKind::from_snapshot(kind.code(), counter, bounce, friction), Some(kind));
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(SpawnerKind::from_snapshot(-1, 1, 0.0, 0.0), None);
        assert_eq!(SpawnerKind::from_snapshot(200, 1, 0.0, 0.0), None);
        let spawner_id = Material::Spawner.id() as i32;
        assert_eq!(SpawnerKind::from_snapshot(spawner_id, 1, 0.0, 0.0), None);
    }

    #[test]
    fn emitter_interval_is_at_least_one() {
        assert_eq!(
            SpawnerKind::emitter(Material::Sand, 0),
            SpawnerKind::Emit { material: Material::Sand, interval: 1, jitter: 2.0, speed: 0.0 }
        );
    }
}
