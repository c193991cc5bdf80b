//! Distance links between two particles (rope segments).

use crate::core::{SandboxError, Vec2};
use crate::domain::particle::Particle;

/// Smallest separation used as a divisor; coincident centres clamp to this.
pub const MIN_DISTANCE: f32 = 1e-4;

/// Pairwise distance constraint. `rest_length` is captured at creation and
/// never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    a: usize,
    b: usize,
    rest_length: f32,
}

impl Link {
    /// Link `a` and `b` at their current separation.
    pub fn between(a: usize, b: usize, particles: &[Particle]) -> Result<Self, SandboxError> {
        let count = particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(SandboxError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(SandboxError::DegenerateLink { index: a });
        }
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Ok(Link { a, b, rest_length })
    }

    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Rewrite endpoints after compaction. Returns false when an endpoint is gone.
    pub(crate) fn remap(&mut self, remap: &[Option<usize>]) -> bool {
        match (
            remap.get(self.a).copied().flatten(),
            remap.get(self.b).copied().flatten(),
        ) {
            (Some(a), Some(b)) => {
                self.a = a;
                self.b = b;
                true
            }
            _ => false,
        }
    }

    /// One relaxation pass: each free endpoint takes half the error.
    pub fn relax(&self, particles: &mut [Particle]) {
        if self.a >= particles.len() || self.b >= particles.len() || self.a == self.b {
            return;
        }
        let axis = particles[self.a].pos - particles[self.b].pos;
        let raw = axis.length();
        let (n, dist) = if raw < MIN_DISTANCE {
            (Vec2::new(1.0, 0.0), MIN_DISTANCE)
        } else {
            (axis / raw, raw)
        };
        let delta = self.rest_length - dist;
        let shift = n * (0.5 * delta);

        if !particles[self.a].pinned {
            particles[self.a].pos += shift;
        }
        if !particles[self.b].pinned {
            particles[self.b].pos -= shift;
        }
    }
}
