use serde::{Deserialize, Serialize};

use crate::core::{SandboxError, Vec2};
use crate::systems::physics::Bounds;

use super::Solver;

/// Tunables of a solver. Missing JSON keys take the defaults below.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverSettings {
    /// Frames per simulated second
    pub update_rate: u32,
    pub sub_steps: u32,
    /// px/s^2, y grows downward
    pub gravity: Vec2,
    pub gravity_enabled: bool,
    pub bounds: Bounds,
    /// Share of an overlap corrected per collision pass
    pub response_coef: f32,
    /// Reach of a point force (px)
    pub touch_radius: f32,
    /// Point force `delta` to acceleration factor
    pub touch_gain: f32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            update_rate: 60,
            sub_steps: 8,
            gravity: Vec2::new(0.0, 1000.0),
            gravity_enabled: true,
            bounds: Bounds::default(),
            response_coef: 0.75,
            touch_radius: 150.0,
            touch_gain: 60.0,
        }
    }
}

impl SolverSettings {
    pub fn with_update_rate(mut self, rate: u32) -> Self {
        self.update_rate = rate;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_response_coef(mut self, coef: f32) -> Self {
        self.response_coef = coef;
        self
    }

    #[inline]
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.update_rate.max(1) as f32
    }

    #[inline]
    pub fn step_dt(&self) -> f32 {
        self.frame_dt() / self.sub_steps.max(1) as f32
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.update_rate == 0 {
            return Err(SandboxError::Settings("updateRate must be positive".into()));
        }
        if self.sub_steps == 0 {
            return Err(SandboxError::Settings("subSteps must be positive".into()));
        }
        if !self.gravity.is_finite() {
            return Err(SandboxError::Settings("gravity must be finite".into()));
        }
        if !self.bounds.is_valid() {
            return Err(SandboxError::Settings("bounds must have positive width and height".into()));
        }
        if !(self.response_coef > 0.0 && self.response_coef <= 1.0) {
            return Err(SandboxError::Settings("responseCoef must be in (0, 1]".into()));
        }
        if !(self.touch_radius >= 0.0) || !self.touch_gain.is_finite() {
            return Err(SandboxError::Settings("touch parameters must be finite and non-negative".into()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SandboxError> {
        let settings: SolverSettings =
            serde_json::from_str(json).map_err(|e| SandboxError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub(super) fn set_gravity(solver: &mut Solver, gravity: Vec2) {
    solver.settings.gravity = gravity;
}

pub(super) fn set_gravity_enabled(solver: &mut Solver, enabled: bool) {
    solver.settings.gravity_enabled = enabled;
}

pub(super) fn set_sub_steps(solver: &mut Solver, sub_steps: u32) {
    solver.settings.sub_steps = sub_steps.max(1);
}

pub(super) fn set_update_rate(solver: &mut Solver, rate: u32) {
    solver.settings.update_rate = rate.max(1);
}

pub(super) fn set_bounds(solver: &mut Solver, bounds: Bounds) -> Result<(), SandboxError> {
    if !bounds.is_valid() {
        return Err(SandboxError::Settings("bounds must have positive width and height".into()));
    }
    solver.settings.bounds = bounds;
    Ok(())
}

pub(super) fn load_settings_json(solver: &mut Solver, json: &str) -> Result<(), SandboxError> {
    match SolverSettings::from_json(json) {
        Ok(settings) => {
            solver.settings = settings;
            Ok(())
        }
        Err(e) => {
            console_warn!("{}", e);
            Err(e)
        }
    }
}

pub(super) fn enable_perf_metrics(solver: &mut Solver, enabled: bool) {
    solver.perf_enabled = enabled;
    if !enabled {
        solver.perf_stats.reset();
    }
}
