//! Domain - what a particle is made of
//!
//! - materials.rs - closed material set + static parameter table
//! - content.rs   - runtime material table (JSON bundle overrides, manifest)
//! - particle.rs  - Verlet particle
//! - link.rs      - distance constraint
//! - spawner.rs   - spawner payloads

pub mod materials;
pub mod content;
pub mod particle;
pub mod link;
pub mod spawner;

pub use content::MaterialTable;
pub use link::{Link, MIN_DISTANCE};
pub use materials::{Material, MaterialId, MaterialProps, MATERIAL_COUNT, MATERIAL_DATA};
pub use particle::Particle;
pub use spawner::{SpawnerKind, BLACKHOLE_CODE, FORCE_CODE};
