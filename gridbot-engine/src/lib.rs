//! # gridbot-engine
//!
//! The core of the gridbot simulation: a directional robot confined to a
//! bounded 2D grid, driven by a textual command stream.
//!
//! ## Core Concepts
//! - **Grid**: immutable rectangular bounds for valid positions
//! - **Robot**: the mutable pose (position + facing), unplaced until the
//!   first successful PLACE
//! - **Command**: the five-command instruction set, decoded once by the parser
//! - **Engine**: validates each command against current state and applies it
//!
//! The engine performs no I/O. Callers feed it one raw line at a time via
//! [`Engine::dispatch`] and render the outcome; every rejection leaves the
//! robot state exactly as it was.

pub mod command;
pub mod engine;
pub mod error;
pub mod grid;
pub mod robot;

pub use command::{grammar_summary, Command};
pub use engine::{CommandResult, DispatchOutcome, Engine, TraceEntry, MAX_TRACE_ENTRIES};
pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use grid::Grid;
pub use robot::{Orientation, Pose, Robot};
