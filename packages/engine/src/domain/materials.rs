//! Material Definitions - closed set of particle materials
//!
//! Every particle carries exactly one `Material` for its whole life.
//! Transitions (water + lava -> obsidian) destroy and recreate particles.
//!
//! Static parameters live in `MATERIAL_DATA`, indexed by `Material::id()`.
//! A content bundle can override them at runtime (see `content.rs`).

use serde::{Deserialize, Serialize};

pub type MaterialId = u8;

pub const MATERIAL_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Material {
    Sand = 0,
    Water = 1,
    Lava = 2,
    Obsidian = 3,
    Stone = 4,
    Wood = 5,
    Fire = 6,
    Gas = 7,
    Smoke = 8,
    Spawner = 9,
}

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Sand,
        Material::Water,
        Material::Lava,
        Material::Obsidian,
        Material::Stone,
        Material::Wood,
        Material::Fire,
        Material::Gas,
        Material::Smoke,
        Material::Spawner,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: MaterialId) -> Option<Material> {
        Self::ALL.get(id as usize).copied()
    }

    /// Content key, e.g. `base:sand`
    pub fn key(self) -> &'static str {
        match self {
            Material::Sand => "base:sand",
            Material::Water => "base:water",
            Material::Lava => "base:lava",
            Material::Obsidian => "base:obsidian",
            Material::Stone => "base:stone",
            Material::Wood => "base:wood",
            Material::Fire => "base:fire",
            Material::Gas => "base:gas",
            Material::Smoke => "base:smoke",
            Material::Spawner => "base:spawner",
        }
    }

    pub fn from_key(key: &str) -> Option<Material> {
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }

    pub fn name(self) -> &'static str {
        self.key().trim_start_matches("base:")
    }
}

/// Static per-material parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProps {
    pub radius: f32,
    pub mass: f32,
    /// Fraction of tangential velocity kept on contact (1.0 = frictionless)
    pub friction: f32,
    /// Carried for tools and persistence; the solver never reads it.
    pub bounce: f32,
    pub fluid: bool,
    /// Initial lifespan in ticks, -1 = infinite
    pub lifespan: i32,
    /// ABGR (little-endian RGBA bytes)
    pub color: u32,
    /// Multiplier on global gravity; negative rises
    pub gravity_scale: f32,
    /// Removed when its centre leaves through the ceiling instead of clamping
    pub vents: bool,
    /// Becomes pinned on first floor contact
    pub pins_on_floor: bool,
}

pub const MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    // Sand
    MaterialProps {
        radius: 5.0, mass: 1.5, friction: 0.6, bounce: 0.1, fluid: false, lifespan: -1,
        color: 0xFF80C8E6, gravity_scale: 1.0, vents: false, pins_on_floor: false,
    },
    // Water
    MaterialProps {
        radius: 5.0, mass: 1.0, friction: 0.98, bounce: 0.0, fluid: true, lifespan: -1,
        color: 0xFFE67828, gravity_scale: 1.0, vents: false, pins_on_floor: false,
    },
    // Lava
    MaterialProps {
        radius: 5.0, mass: 2.0, friction: 0.9, bounce: 0.0, fluid: true, lifespan: -1,
        color: 0xFF1450F0, gravity_scale: 1.0, vents: false, pins_on_floor: false,
    },
    // Obsidian
    MaterialProps {
        radius: 5.0, mass: 3.0, friction: 0.4, bounce: 0.05, fluid: false, lifespan: -1,
        color: 0xFF3C1428, gravity_scale: 1.0, vents: false, pins_on_floor: true,
    },
    // Stone
    MaterialProps {
        radius: 5.0, mass: 3.0, friction: 0.3, bounce: 0.05, fluid: false, lifespan: -1,
        color: 0xFF808080, gravity_scale: 1.0, vents: false, pins_on_floor: false,
    },
    // Wood
    MaterialProps {
        radius: 5.0, mass: 0.8, friction: 0.5, bounce: 0.2, fluid: false, lifespan: -1,
        color: 0xFF285078, gravity_scale: 1.0, vents: false, pins_on_floor: false,
    },
    // Fire
    MaterialProps {
        radius: 4.0, mass: 0.3, friction: 0.95, bounce: 0.0, fluid: false, lifespan: 45,
        color: 0xFF008CFF, gravity_scale: -0.3, vents: false, pins_on_floor: false,
    },
    // Gas (steam)
    MaterialProps {
        radius: 5.0, mass: 0.2, friction: 0.99, bounce: 0.0, fluid: true, lifespan: 150,
        color: 0xFFDCC8C8, gravity_scale: -1.0, vents: true, pins_on_floor: false,
    },
    // Smoke (fire gas)
    MaterialProps {
        radius: 4.0, mass: 0.2, friction: 0.99, bounce: 0.0, fluid: true, lifespan: 60,
        color: 0xFF3C3C3C, gravity_scale: -1.0, vents: true, pins_on_floor: false,
    },
    // Spawner
    MaterialProps {
        radius: 6.0, mass: 1.0, friction: 1.0, bounce: 0.0, fluid: false, lifespan: -1,
        color: 0xFFFFFFFF, gravity_scale: 0.0, vents: false, pins_on_floor: false,
    },
];
