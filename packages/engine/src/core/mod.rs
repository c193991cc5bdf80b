//! Core - shared building blocks for the solver
//!
//! - utils/log.rs    - console logging macros (must be first for macro export!)
//! - utils/random.rs - injected xorshift32 source
//! - utils/error.rs  - crate error type
//! - math/vec2.rs    - 2D vector

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
#[path = "utils/random.rs"]
pub mod random;
#[path = "utils/error.rs"]
pub mod error;
#[path = "math/vec2.rs"]
pub mod vec2;

pub use error::SandboxError;
pub use random::{Rng, DEFAULT_SEED};
pub use vec2::Vec2;
