use wasm_bindgen::prelude::*;

/// Per-frame metrics. Timings accumulate over all substeps of the frame.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) bounds_ms: f64,
    pub(super) links_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) spawners_ms: f64,
    pub(super) behaviors_ms: f64,
    pub(super) sub_steps: u32,
    pub(super) particle_count: u32,
    pub(super) link_count: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) reactions_applied: u32,
    pub(super) suppressed: u32,
    pub(super) vented: u32,
    pub(super) spawned: u32,
    pub(super) removed: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn links_ms(&self) -> f64 { self.links_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn spawners_ms(&self) -> f64 { self.spawners_ms }
    #[wasm_bindgen(getter)]
    pub fn behaviors_ms(&self) -> f64 { self.behaviors_ms }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn link_count(&self) -> u32 { self.link_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn reactions_applied(&self) -> u32 { self.reactions_applied }
    #[wasm_bindgen(getter)]
    pub fn suppressed(&self) -> u32 { self.suppressed }
    #[wasm_bindgen(getter)]
    pub fn vented(&self) -> u32 { self.vented }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn removed(&self) -> u32 { self.removed }
}
