//! Simulation - the solver that owns a whole sandbox
//!
//! `Solver` only orchestrates. Physics passes live in `systems/physics`,
//! pair rules in `systems/reactions`, per-material logic in
//! `systems/behaviors`. Each group of operations below is a thin wrapper over
//! a free function in one of the `#[path]` submodules.
//!
//! Particles are only ever removed by marking and compacting at a pass
//! boundary, and only ever created by queueing and appending at the same
//! boundaries. Outside `update` the particle list never holds removed entries.

use crate::core::{Rng, SandboxError, Vec2, DEFAULT_SEED};
use crate::domain::{Link, Material, MaterialTable, Particle, SpawnerKind};
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::physics::{Bounds, PointForce};
use crate::systems::reactions::ReactionTable;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/lifecycle.rs"]
mod lifecycle;
#[path = "step/step.rs"]
mod step;
#[path = "persist/snapshot.rs"]
mod snapshot;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::SolverSettings;
pub use snapshot::parse_snapshot;

use perf_timer::PerfTimer;

/// Flat f32 buffers handed to JS for drawing
pub(crate) struct RenderBuffers {
    /// `[x, y, radius, color_bits]` per particle
    pub(crate) particles: Vec<f32>,
    /// `[ax, ay, bx, by]` per link
    pub(crate) links: Vec<f32>,
}

/// The simulation
pub struct Solver {
    materials: MaterialTable,
    reactions: ReactionTable,
    behaviors: BehaviorRegistry,
    settings: SolverSettings,

    // State
    particles: Vec<Particle>,
    links: Vec<Link>,
    spawn_queue: Vec<Particle>,
    point_forces: Vec<PointForce>,
    rng: Rng,
    time: f32,
    frame: u64,
    running: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl Solver {
    /// Default settings, default seed
    pub fn new() -> Self {
        init::create_solver(SolverSettings::default(), DEFAULT_SEED)
    }

    /// Default settings with an explicit random seed. Equal seeds replay
    /// equal runs.
    pub fn with_seed(seed: u32) -> Self {
        init::create_solver(SolverSettings::default(), seed)
    }

    pub fn with_settings(settings: SolverSettings, seed: u32) -> Result<Self, SandboxError> {
        settings.validate()?;
        Ok(init::create_solver(settings, seed))
    }

    // === QUERIES ===

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn links(&self) -> &[Link] { &self.links }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn link_count(&self) -> usize { self.links.len() }

    /// Simulated seconds since the last clear
    pub fn time(&self) -> f32 { self.time }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn frame_dt(&self) -> f32 { self.settings.frame_dt() }

    pub fn step_dt(&self) -> f32 { self.settings.step_dt() }

    pub fn settings(&self) -> &SolverSettings { &self.settings }

    pub fn materials(&self) -> &MaterialTable { &self.materials }

    pub fn reactions(&self) -> &ReactionTable { &self.reactions }

    /// Pair rules are plain data; callers may add or override them.
    pub fn reactions_mut(&mut self) -> &mut ReactionTable { &mut self.reactions }

    pub fn point_forces(&self) -> &[PointForce] { &self.point_forces }

    pub fn is_running(&self) -> bool { self.running }

    pub fn particle(&self, index: usize) -> Result<&Particle, SandboxError> {
        let count = self.particles.len();
        self.particles
            .get(index)
            .ok_or(SandboxError::ParticleOutOfBounds { index, count })
    }

    pub fn particle_mut(&mut self, index: usize) -> Result<&mut Particle, SandboxError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(SandboxError::ParticleOutOfBounds { index, count })
    }

    // === CREATION ===

    /// Add a particle with every default of `material`.
    pub fn add_particle(&mut self, material: Material, pos: Vec2) -> &mut Particle {
        commands::add_particle(self, material, pos)
    }

    pub fn add_spawner(&mut self, pos: Vec2, kind: SpawnerKind) -> &mut Particle {
        commands::add_spawner(self, pos, kind)
    }

    /// Link two existing particles at their current distance.
    pub fn add_link(&mut self, a: usize, b: usize) -> Result<&Link, SandboxError> {
        commands::add_link(self, a, b)
    }

    /// Fill `min..max` with a grid of `material` spaced one diameter apart.
    pub fn add_rect(&mut self, material: Material, min: Vec2, max: Vec2) -> usize {
        commands::add_rect(self, material, min, max)
    }

    /// Scatter `count` particles uniformly within `spread` of `center`.
    pub fn add_cluster(&mut self, material: Material, center: Vec2, count: usize, spread: f32) -> usize {
        commands::add_cluster(self, material, center, count, spread)
    }

    /// Velocity in px/s, over the substep length.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec2) -> Result<(), SandboxError> {
        commands::set_velocity(self, index, velocity)
    }

    // === FORCES ===

    /// Replace the active touch/mouse forces (applied every substep).
    pub fn set_point_forces(&mut self, forces: &[PointForce]) {
        commands::set_point_forces(self, forces)
    }

    pub fn clear_point_forces(&mut self) {
        commands::clear_point_forces(self)
    }

    /// One-off radial push. Returns how many particles were affected.
    pub fn apply_radial_force(&mut self, center: Vec2, radius: f32, strength: f32) -> u32 {
        commands::apply_radial_force(self, center, radius, strength)
    }

    /// One-off black hole pull. Returns how many particles were affected.
    pub fn apply_vortex_force(&mut self, center: Vec2, radius: f32, power: f32) -> u32 {
        commands::apply_vortex_force(self, center, radius, power)
    }

    // === REMOVAL ===

    pub fn remove_in_radius(&mut self, center: Vec2, radius: f32) -> usize {
        commands::remove_in_radius(self, center, radius)
    }

    pub fn remove_material(&mut self, material: Material) -> usize {
        commands::remove_material(self, material)
    }

    /// Remove spawners emitting `target`, or every spawner for `None`.
    pub fn remove_spawners(&mut self, target: Option<Material>) -> usize {
        commands::remove_spawners(self, target)
    }

    /// Remove exactly `floor(n / 2)` randomly chosen particles.
    pub fn remove_random_half(&mut self) -> usize {
        commands::remove_random_half(self)
    }

    /// Drop every particle, link and pending spawn. Time and frame restart
    /// from zero; settings and materials are kept.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === STEPPING ===

    /// Advance one frame (no-op while paused).
    pub fn update(&mut self) {
        step::update(self);
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, gravity: Vec2) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        settings::set_gravity_enabled(self, enabled);
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) {
        settings::set_sub_steps(self, sub_steps);
    }

    pub fn set_update_rate(&mut self, rate: u32) {
        settings::set_update_rate(self, rate);
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SandboxError> {
        settings::set_bounds(self, bounds)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), SandboxError> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === CONTENT ===

    /// Swap the material table. Clears the world, since existing particles
    /// carry the old defaults.
    pub fn load_material_bundle_json(&mut self, json: &str) -> Result<(), SandboxError> {
        let table = MaterialTable::from_bundle_json(json)?;
        self.materials = table;
        self.clear();
        console_log!("material bundle loaded ({} materials)", self.materials.material_count());
        Ok(())
    }

    pub fn material_manifest_json(&self) -> String {
        self.materials.manifest_json()
    }

    // === PERSISTENCE ===

    pub fn save_snapshot(&self) -> String {
        snapshot::save_snapshot(self)
    }

    /// Replace the world with a snapshot. State is untouched on error.
    pub fn load_snapshot(&mut self, text: &str) -> Result<usize, SandboxError> {
        snapshot::load_snapshot(self, text)
    }

    pub fn save_snapshot_to_path<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), SandboxError> {
        snapshot::save_snapshot_to_path(self, path.as_ref())
    }

    pub fn load_snapshot_from_path<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<usize, SandboxError> {
        snapshot::load_snapshot_from_path(self, path.as_ref())
    }

    // === RENDERING ===

    /// Refill the particle render buffer. Returns the particle count written.
    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract_particles(self)
    }

    pub fn render_ptr(&self) -> *const f32 {
        self.render.particles.as_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.render.particles.len()
    }

    /// Refill the link render buffer. Returns the link count written.
    pub fn extract_link_render_data(&mut self) -> usize {
        render_extract::extract_links(self)
    }

    pub fn link_render_ptr(&self) -> *const f32 {
        self.render.links.as_ptr()
    }

    pub fn link_render_len(&self) -> usize {
        self.render.links.len()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
