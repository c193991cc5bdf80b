use wasm_bindgen::prelude::*;

use crate::core::{SandboxError, Vec2};
use crate::domain::{Material, SpawnerKind};
use crate::systems::physics::{Bounds, PointForce};

use super::perf_stats::PerfStats;
use super::Solver;

#[inline]
fn js_err(e: SandboxError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[inline]
fn material(id: u8) -> Result<Material, JsValue> {
    Material::from_id(id).ok_or_else(|| js_err(SandboxError::UnknownMaterial(id)))
}

#[wasm_bindgen]
pub struct World {
    core: Solver,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: Solver::new() }
    }

    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(seed: u32) -> Self {
        Self { core: Solver::with_seed(seed) }
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn link_count(&self) -> u32 { self.core.link_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f32 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn frame_dt(&self) -> f32 { self.core.frame_dt() }

    #[wasm_bindgen(getter)]
    pub fn step_dt(&self) -> f32 { self.core.step_dt() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === CREATION ===

    /// Add a particle and return its index
    pub fn add_particle(&mut self, material_id: u8, x: f32, y: f32) -> Result<u32, JsValue> {
        let m = material(material_id)?;
        self.core.add_particle(m, Vec2::new(x, y));
        Ok(self.core.particle_count() as u32 - 1)
    }

    pub fn add_emitter(&mut self, x: f32, y: f32, material_id: u8, interval: u32) -> Result<u32, JsValue> {
        let m = material(material_id)?;
        if m == Material::Spawner {
            return Err(js_err(SandboxError::UnknownMaterial(material_id)));
        }
        self.core.add_spawner(Vec2::new(x, y), SpawnerKind::emitter(m, interval));
        Ok(self.core.particle_count() as u32 - 1)
    }

    pub fn add_force_field(&mut self, x: f32, y: f32, radius: f32, strength: f32) -> u32 {
        self.core.add_spawner(Vec2::new(x, y), SpawnerKind::Force { radius, strength });
        self.core.particle_count() as u32 - 1
    }

    pub fn add_black_hole(&mut self, x: f32, y: f32, radius: f32, power: f32) -> u32 {
        self.core.add_spawner(Vec2::new(x, y), SpawnerKind::BlackHole { radius, power });
        self.core.particle_count() as u32 - 1
    }

    pub fn add_link(&mut self, a: u32, b: u32) -> Result<(), JsValue> {
        self.core.add_link(a as usize, b as usize).map_err(js_err)?;
        Ok(())
    }

    pub fn add_rect(&mut self, material_id: u8, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Result<u32, JsValue> {
        let m = material(material_id)?;
        Ok(self.core.add_rect(m, Vec2::new(min_x, min_y), Vec2::new(max_x, max_y)) as u32)
    }

    pub fn add_cluster(&mut self, material_id: u8, x: f32, y: f32, count: u32, spread: f32) -> Result<u32, JsValue> {
        let m = material(material_id)?;
        Ok(self.core.add_cluster(m, Vec2::new(x, y), count as usize, spread) as u32)
    }

    pub fn set_velocity(&mut self, index: u32, vx: f32, vy: f32) -> Result<(), JsValue> {
        self.core.set_velocity(index as usize, Vec2::new(vx, vy)).map_err(js_err)
    }

    // === FORCES ===

    /// Flat `[x, y, dx, dy, ...]`; a trailing partial entry is ignored.
    pub fn set_point_forces(&mut self, data: &[f32]) {
        let forces: Vec<PointForce> = data
            .chunks_exact(4)
            .map(|c| PointForce {
                position: Vec2::new(c[0], c[1]),
                delta: Vec2::new(c[2], c[3]),
            })
            .collect();
        self.core.set_point_forces(&forces);
    }

    pub fn clear_point_forces(&mut self) {
        self.core.clear_point_forces();
    }

    pub fn apply_radial_force(&mut self, x: f32, y: f32, radius: f32, strength: f32) -> u32 {
        self.core.apply_radial_force(Vec2::new(x, y), radius, strength)
    }

    pub fn apply_vortex_force(&mut self, x: f32, y: f32, radius: f32, power: f32) -> u32 {
        self.core.apply_vortex_force(Vec2::new(x, y), radius, power)
    }

    // === REMOVAL ===

    pub fn remove_in_radius(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        self.core.remove_in_radius(Vec2::new(x, y), radius) as u32
    }

    pub fn remove_material(&mut self, material_id: u8) -> Result<u32, JsValue> {
        let m = material(material_id)?;
        Ok(self.core.remove_material(m) as u32)
    }

    /// Remove spawners emitting `target_id`; a negative id removes all spawners.
    pub fn remove_spawners(&mut self, target_id: i32) -> Result<u32, JsValue> {
        let target = if target_id < 0 {
            None
        } else {
            let id = u8::try_from(target_id).map_err(|_| js_err(SandboxError::UnknownMaterial(u8::MAX)))?;
            Some(material(id)?)
        };
        Ok(self.core.remove_spawners(target) as u32)
    }

    pub fn remove_random_half(&mut self) -> u32 {
        self.core.remove_random_half() as u32
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === STEPPING ===

    pub fn update(&mut self) {
        self.core.update();
    }

    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(Vec2::new(x, y));
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.core.set_gravity_enabled(enabled);
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) {
        self.core.set_sub_steps(sub_steps);
    }

    pub fn set_update_rate(&mut self, rate: u32) {
        self.core.set_update_rate(rate);
    }

    pub fn set_bounds(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Result<(), JsValue> {
        let bounds = Bounds::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y));
        self.core.set_bounds(bounds).map_err(js_err)
    }

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(js_err)
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    // === CONTENT ===

    pub fn load_material_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_material_bundle_json(&json).map_err(js_err)
    }

    pub fn material_manifest_json(&self) -> String {
        self.core.material_manifest_json()
    }

    // === PERSISTENCE ===

    pub fn save_snapshot(&self) -> String {
        self.core.save_snapshot()
    }

    /// Replace the world with a snapshot; returns the particle count.
    pub fn load_snapshot(&mut self, text: String) -> Result<u32, JsValue> {
        self.core.load_snapshot(&text).map(|n| n as u32).map_err(js_err)
    }

    // === RENDERING ===

    /// Refill the `[x, y, radius, colorBits]` buffer; returns particle count.
    pub fn extract_render_data(&mut self) -> u32 {
        self.core.extract_render_data() as u32
    }

    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_ptr()
    }

    /// Buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }

    /// Refill the `[ax, ay, bx, by]` link buffer; returns link count.
    pub fn link_render_data(&mut self) -> u32 {
        self.core.extract_link_render_data() as u32
    }

    pub fn link_render_ptr(&self) -> *const f32 {
        self.core.link_render_ptr()
    }

    pub fn link_render_len(&self) -> usize {
        self.core.link_render_len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Native access to the solver behind the facade
    pub fn solver(&self) -> &Solver {
        &self.core
    }

    pub fn solver_mut(&mut self) -> &mut Solver {
        &mut self.core
    }
}
