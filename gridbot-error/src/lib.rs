//! # gridbot-error
//!
//! Unified error handling for gridbot.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what failed (e.g., NotPlaced, OutOfBounds)
//! - **ErrorStatus**: Decide how to handle it (Recoverable, Fatal)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use gridbot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::OutOfBounds, "placement off the table")
//!         .with_operation("engine::place")
//!         .with_context("x", "7")
//!         .with_context("y", "-1"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, gridbot_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the gridbot Error
pub type Result<T> = std::result::Result<T, Error>;
