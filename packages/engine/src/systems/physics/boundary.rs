//! Play-field boundary
//!
//! Walls and floor clamp. The ceiling clamps too, except for venting
//! materials (gas, smoke) which leave the field and are marked for removal.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::domain::{MaterialTable, Particle};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.width() > 0.0 && self.height() > 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(975.0, 950.0))
    }
}

/// Clamp everything into `bounds`. Returns how many particles vented.
///
/// Floor contact sets `grounded`, bleeds horizontal velocity by the particle's
/// own friction and pins materials that solidify on the floor.
pub fn apply_bounds(particles: &mut [Particle], bounds: &Bounds, table: &MaterialTable) -> u32 {
    let mut vented = 0;

    for p in particles.iter_mut() {
        if p.pinned || p.is_removed() {
            continue;
        }
        let props = table.props(p.material);
        let r = p.radius;

        if props.vents {
            if p.pos.y < bounds.min.y {
                p.mark_removed();
                vented += 1;
                continue;
            }
        } else if p.pos.y < bounds.min.y + r {
            p.pos.y = bounds.min.y + r;
        }

        if p.pos.x < bounds.min.x + r {
            p.pos.x = bounds.min.x + r;
        } else if p.pos.x > bounds.max.x - r {
            p.pos.x = bounds.max.x - r;
        }

        if p.pos.y > bounds.max.y - r {
            p.pos.y = bounds.max.y - r;
            p.grounded = true;
            let vx = p.pos.x - p.prev_pos.x;
            p.prev_pos.x = p.pos.x - vx * p.friction;
            if props.pins_on_floor {
                p.pin();
            }
        }
    }

    vented
}
