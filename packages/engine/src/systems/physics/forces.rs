use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::domain::{MaterialTable, Particle, MIN_DISTANCE};

/// Distances closer than this to a black hole are treated as this far.
pub const VORTEX_CORE: f32 = 8.0;
/// Tangential share of the black hole pull.
pub const VORTEX_ORBIT: f32 = 0.5;

/// A touch/mouse/brush drag: everything near `position` is pushed along `delta`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointForce {
    pub position: Vec2,
    pub delta: Vec2,
}

/// Apply gravity to every free particle.
/// Gases get INVERTED gravity (negative `gravity_scale`).
pub fn apply_gravity(particles: &mut [Particle], gravity: Vec2, table: &MaterialTable) {
    for p in particles.iter_mut() {
        if p.pinned || !p.is_active() {
            continue;
        }
        let scale = table.props(p.material).gravity_scale;
        p.accelerate(gravity * scale);
    }
}

/// Accelerate particles within `radius` of each point by `delta * gain`.
pub fn apply_point_forces(particles: &mut [Particle], forces: &[PointForce], radius: f32, gain: f32) {
    if forces.is_empty() {
        return;
    }
    let r2 = radius * radius;
    for p in particles.iter_mut() {
        if p.pinned || !p.is_active() {
            continue;
        }
        for f in forces {
            if (p.pos - f.position).length_squared() < r2 {
                p.accelerate(f.delta * gain);
            }
        }
    }
}

/// Push particles away from `center`, strongest at the centre and fading to
/// zero at `radius`. `strength` is a velocity change in px/s.
pub fn apply_radial_force(particles: &mut [Particle], center: Vec2, radius: f32, strength: f32, dt: f32) -> u32 {
    if radius <= 0.0 {
        return 0;
    }
    let mut touched = 0;
    for p in particles.iter_mut() {
        if p.pinned || !p.is_active() {
            continue;
        }
        let d = p.pos - center;
        let dist = d.length();
        if dist >= radius {
            continue;
        }
        let n = if dist < MIN_DISTANCE { Vec2::new(0.0, -1.0) } else { d / dist };
        let falloff = 1.0 - dist / radius;
        p.add_velocity(n * (strength * falloff), dt);
        touched += 1;
    }
    touched
}

/// Pull particles toward `center` with inverse-distance falloff plus a
/// tangential component so they orbit instead of collapsing.
pub fn apply_vortex_force(particles: &mut [Particle], center: Vec2, radius: f32, power: f32, dt: f32) -> u32 {
    if radius <= 0.0 {
        return 0;
    }
    let mut touched = 0;
    for p in particles.iter_mut() {
        if p.pinned || !p.is_active() {
            continue;
        }
        let d = center - p.pos;
        let raw = d.length();
        if raw >= radius {
            continue;
        }
        let n = if raw < MIN_DISTANCE { Vec2::new(0.0, 1.0) } else { d / raw };
        let magnitude = power / raw.max(VORTEX_CORE);
        let pull = n + n.perp() * VORTEX_ORBIT;
        p.add_velocity(pull * magnitude, dt);
        touched += 1;
    }
    touched
}
