//! Verlet Sandbox Engine - 2D particle sandbox in WASM
//!
//! Particles are Verlet bodies (velocity is implicit in the previous
//! position). Each frame runs a fixed number of substeps of gravity, touch
//! forces, all-pairs collision with material reactions, boundary, links and
//! integration, then one pass of spawners and material behaviors.
//!
//! Architecture:
//! - core/       - logging, errors, random source, math
//! - domain/     - materials, particles, links, spawner payloads
//! - systems/    - physics passes, reactions, behaviors
//! - simulation/ - the `Solver` orchestrator and its wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Verlet sandbox engine initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Rng, SandboxError, Vec2};
pub use domain::{Link, Material, MaterialTable, Particle, SpawnerKind};
pub use simulation::{PerfStats, Solver, SolverSettings, World};
pub use systems::physics::{Bounds, PointForce};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_lava() -> u8 { Material::Lava.id() }
#[wasm_bindgen]
pub fn mat_obsidian() -> u8 { Material::Obsidian.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn mat_gas() -> u8 { Material::Gas.id() }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { Material::Smoke.id() }
#[wasm_bindgen]
pub fn mat_spawner() -> u8 { Material::Spawner.id() }
#[wasm_bindgen]
pub fn force_code() -> i32 { domain::FORCE_CODE }
#[wasm_bindgen]
pub fn blackhole_code() -> i32 { domain::BLACKHOLE_CODE }
