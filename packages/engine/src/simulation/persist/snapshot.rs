//! Text snapshots
//!
//! One particle per line:
//!
//! ```text
//! x,y,counter,bounce,frictionCoeff,type,spawnerType
//! ```
//!
//! `type` is the material id. `spawnerType` is `-1` for plain particles; for
//! spawners it is the emitted material id, `FORCE_CODE` or `BLACKHOLE_CODE`,
//! and `counter`/`bounce`/`frictionCoeff` carry the spawner payload.
//! Velocity and links are not persisted. Blank lines are ignored.

use std::fmt::Write as _;
use std::path::Path;

use crate::core::{SandboxError, Vec2};
use crate::domain::{Material, MaterialId, MaterialTable, Particle, SpawnerKind};

use super::Solver;

const FIELDS: usize = 7;

pub(super) fn save_snapshot(solver: &Solver) -> String {
    let mut out = String::with_capacity(solver.particles.len() * 32);
    for p in solver.particles.iter().filter(|p| !p.is_removed()) {
        let (counter, bounce, friction, code) = match p.spawner_kind() {
            Some(kind) => {
                let (counter, bounce, friction) = kind.snapshot_fields();
                (counter, bounce, friction, kind.code())
            }
            None => (p.counter, p.bounce, p.friction, -1),
        };
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            p.pos.x,
            p.pos.y,
            counter,
            bounce,
            friction,
            p.material.id(),
            code
        );
    }
    out
}

/// Parse a whole snapshot without touching any solver.
pub fn parse_snapshot(text: &str, table: &MaterialTable) -> Result<Vec<Particle>, SandboxError> {
    let mut staged = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        staged.push(parse_row(line, i + 1, table)?);
    }
    Ok(staged)
}

fn parse_row(row: &str, line: usize, table: &MaterialTable) -> Result<Particle, SandboxError> {
    let fail = |reason: String| SandboxError::Parse { line, reason };

    let cols: Vec<&str> = row.split(',').map(str::trim).collect();
    if cols.len() != FIELDS {
        return Err(fail(format!("expected {} fields, found {}", FIELDS, cols.len())));
    }

    let x = parse_f32(cols[0], "x").map_err(fail)?;
    let y = parse_f32(cols[1], "y").map_err(fail)?;
    let counter: u32 = cols[2]
        .parse()
        .map_err(|_| fail(format!("bad counter '{}'", cols[2])))?;
    let bounce = parse_f32(cols[3], "bounce").map_err(fail)?;
    let friction = parse_f32(cols[4], "frictionCoeff").map_err(fail)?;
    let id: MaterialId = cols[5]
        .parse()
        .map_err(|_| fail(format!("bad type '{}'", cols[5])))?;
    let code: i32 = cols[6]
        .parse()
        .map_err(|_| fail(format!("bad spawnerType '{}'", cols[6])))?;

    let material = Material::from_id(id).ok_or_else(|| fail(format!("unknown material id {}", id)))?;
    let pos = Vec2::new(x, y);

    if material == Material::Spawner {
        let kind = SpawnerKind::from_snapshot(code, counter, bounce, friction)
            .ok_or_else(|| fail(format!("bad spawnerType {}", code)))?;
        return Ok(Particle::spawner(pos, kind, table));
    }

    let mut p = Particle::from_material(material, pos, table);
    p.counter = counter;
    p.bounce = bounce;
    p.friction = friction;
    Ok(p)
}

fn parse_f32(col: &str, name: &str) -> Result<f32, String> {
    match col.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("bad {} '{}'", name, col)),
    }
}

pub(super) fn load_snapshot(solver: &mut Solver, text: &str) -> Result<usize, SandboxError> {
    let staged = match parse_snapshot(text, &solver.materials) {
        Ok(staged) => staged,
        Err(e) => {
            console_warn!("{}", e);
            return Err(e);
        }
    };
    solver.clear();
    solver.particles = staged;
    console_log!("snapshot loaded ({} particles)", solver.particles.len());
    Ok(solver.particles.len())
}

pub(super) fn save_snapshot_to_path(solver: &Solver, path: &Path) -> Result<(), SandboxError> {
    std::fs::write(path, save_snapshot(solver))?;
    Ok(())
}

pub(super) fn load_snapshot_from_path(solver: &mut Solver, path: &Path) -> Result<usize, SandboxError> {
    let text = std::fs::read_to_string(path)?;
    load_snapshot(solver, &text)
}
