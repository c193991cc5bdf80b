//! Error types for solver operations.

use std::fmt;

/// Errors reported to callers of the solver.
///
/// Physics-loop problems (degenerate geometry and the like) are clamped in
/// place and never surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A link needs two distinct endpoints.
    DegenerateLink { index: usize },
    /// Material id does not name a known material.
    UnknownMaterial(u8),
    /// Reading or writing a snapshot file failed.
    Io(String),
    /// A snapshot row could not be parsed (1-based line number).
    Parse { line: usize, reason: String },
    /// A material content bundle was rejected.
    Content(String),
    /// A settings document was rejected.
    Settings(String),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SandboxError::DegenerateLink { index } => {
                write!(f, "cannot link particle {} to itself", index)
            }
            SandboxError::UnknownMaterial(id) => write!(f, "unknown material id: {}", id),
            SandboxError::Io(msg) => write!(f, "snapshot i/o failed: {}", msg),
            SandboxError::Parse { line, reason } => {
                write!(f, "snapshot line {}: {}", line, reason)
            }
            SandboxError::Content(msg) => write!(f, "material bundle rejected: {}", msg),
            SandboxError::Settings(msg) => write!(f, "settings rejected: {}", msg),
        }
    }
}

impl std::error::Error for SandboxError {}

impl From<std::io::Error> for SandboxError {
    fn from(err: std::io::Error) -> Self {
        SandboxError::Io(err.to_string())
    }
}
