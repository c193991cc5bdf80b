//! Verlet particles with implicit velocity.

use crate::core::Vec2;
use crate::domain::content::MaterialTable;
use crate::domain::materials::Material;
use crate::domain::spawner::SpawnerKind;

/// A material particle.
///
/// `prev_pos` is always where the particle was one integration step ago, so
/// velocity is `(pos - prev_pos) / dt` and is never stored.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub acceleration: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub bounce: f32,
    pub friction: f32,
    pub color: u32,
    pub pinned: bool,
    pub material: Material,
    pub fluid: bool,
    pub grounded: bool,
    /// -1 = infinite
    pub lifespan: i32,
    /// Per-material tick: ignition cooldown for wood, emit tick for spawners.
    pub counter: u32,
    spawner: Option<SpawnerKind>,
    removed: bool,
}

impl Particle {
    /// Factory: a particle carrying every default of `material`.
    ///
    /// Spawners built this way get a one-frame sand emitter; use
    /// [`Particle::spawner`] to pick the payload.
    pub fn from_material(material: Material, pos: Vec2, table: &MaterialTable) -> Self {
        if material == Material::Spawner {
            return Self::spawner(pos, SpawnerKind::emitter(Material::Sand, 1), table);
        }
        Self::with_props(material, pos, table)
    }

    pub fn spawner(pos: Vec2, kind: SpawnerKind, table: &MaterialTable) -> Self {
        let mut p = Self::with_props(Material::Spawner, pos, table);
        p.pinned = true;
        p.spawner = Some(kind);
        p
    }

    fn with_props(material: Material, pos: Vec2, table: &MaterialTable) -> Self {
        let props = table.props(material);
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius: props.radius,
            mass: props.mass,
            bounce: props.bounce,
            friction: props.friction,
            color: props.color,
            pinned: false,
            material,
            fluid: props.fluid,
            grounded: false,
            lifespan: props.lifespan,
            counter: 0,
            spawner: None,
            removed: false,
        }
    }

    #[inline]
    pub fn accelerate(&mut self, a: Vec2) {
        self.acceleration += a;
    }

    pub fn integrate(&mut self, dt: f32) {
        if self.pinned {
            return;
        }
        let displacement = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + displacement + self.acceleration * (dt * dt);
        self.acceleration = Vec2::zero();
    }

    pub fn set_velocity(&mut self, v: Vec2, dt: f32) {
        if self.pinned {
            return;
        }
        self.prev_pos = self.pos - v * dt;
    }

    pub fn add_velocity(&mut self, v: Vec2, dt: f32) {
        if self.pinned {
            return;
        }
        self.prev_pos -= v * dt;
    }

    pub fn velocity(&self, dt: f32) -> Vec2 {
        if dt.abs() < 1e-12 {
            return Vec2::zero();
        }
        (self.pos - self.prev_pos) / dt
    }

    /// Movement over the last step.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Pin in place and drop any implicit velocity.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
        self.acceleration = Vec2::zero();
    }

    #[inline]
    pub fn is_spawner(&self) -> bool {
        self.spawner.is_some()
    }

    #[inline]
    pub fn spawner_kind(&self) -> Option<&SpawnerKind> {
        self.spawner.as_ref()
    }

    /// True once scheduled for removal at the next pass boundary.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[inline]
    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// Takes part in collisions and forces this pass.
    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        !self.removed && self.spawner.is_none()
    }
}
