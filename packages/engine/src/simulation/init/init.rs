use crate::core::Rng;
use crate::domain::MaterialTable;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::reactions::ReactionTable;

use super::perf_stats::PerfStats;
use super::settings::SolverSettings;
use super::{RenderBuffers, Solver};

pub(super) fn create_solver(settings: SolverSettings, seed: u32) -> Solver {
    Solver {
        materials: MaterialTable::from_generated(),
        reactions: ReactionTable::from_generated(),
        behaviors: BehaviorRegistry::new(),
        settings,
        particles: Vec::with_capacity(1024),
        links: Vec::new(),
        spawn_queue: Vec::with_capacity(64),
        point_forces: Vec::new(),
        rng: Rng::new(seed),
        time: 0.0,
        frame: 0,
        running: true,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers {
            // Grown on demand by the extract calls.
            particles: Vec::new(),
            links: Vec::new(),
        },
    }
}
