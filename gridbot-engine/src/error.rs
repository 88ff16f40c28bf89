//! Engine error types
//!
//! Re-exports gridbot-error and provides engine-specific conveniences.

// Re-export the core error types
pub use gridbot_error::{Error, ErrorKind, ErrorStatus, Result};

// =============================================================================
// Engine-specific error constructors
// =============================================================================

/// Create an UnknownCommand error naming the rejected keyword
pub fn unknown_command(keyword: impl Into<String>) -> Error {
    let keyword = keyword.into();
    Error::new(
        ErrorKind::UnknownCommand,
        format!("unknown command '{}'", keyword),
    )
    .with_context("keyword", keyword)
}

/// Create a NotPlaced error (gating rule violation)
pub fn not_placed() -> Error {
    Error::new(ErrorKind::NotPlaced, "agent must be placed first")
}

/// Create a MalformedArguments error for a bad PLACE argument block
pub fn malformed_place_args(args: impl Into<String>) -> Error {
    Error::new(
        ErrorKind::MalformedArguments,
        "invalid PLACE parameters, expected PLACE X,Y,F",
    )
    .with_context("args", args.into())
}

/// Create an OutOfBounds error for a placement outside the grid
pub fn placement_off_grid(x: i32, y: i32) -> Error {
    Error::new(ErrorKind::OutOfBounds, "placement off the table")
        .with_context("x", x.to_string())
        .with_context("y", y.to_string())
}

/// Create an OutOfBounds error for a move that would leave the grid
pub fn move_off_grid(x: i32, y: i32) -> Error {
    Error::new(ErrorKind::OutOfBounds, "move would leave the grid")
        .with_context("x", x.to_string())
        .with_context("y", y.to_string())
}

/// Create an InvalidOrientation error for a bad facing token
pub fn invalid_orientation(token: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidOrientation, "invalid facing direction")
        .with_context("facing", token.into())
}

/// Create a ConfigInvalid error for non-positive grid bounds
pub fn invalid_bounds(width: i32, height: i32) -> Error {
    Error::new(ErrorKind::ConfigInvalid, "grid bounds must be positive")
        .with_context("width", width.to_string())
        .with_context("height", height.to_string())
}
