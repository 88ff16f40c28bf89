//! Error kinds for gridbot operations

use std::fmt;

/// The kind of error that occurred.
///
/// This enum categorizes errors so callers can match on the category instead
/// of string-comparing messages. Every command rejection the engine produces
/// carries one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters (e.g. non-positive grid bounds)
    ConfigInvalid,

    // =========================================================================
    // Command errors
    // =========================================================================
    /// Command keyword not recognized
    UnknownCommand,

    /// A gated command was issued before any successful placement
    NotPlaced,

    /// PLACE argument block missing, malformed, or non-integer
    MalformedArguments,

    /// PLACE or MOVE target coordinate falls outside the grid bounds
    OutOfBounds,

    /// PLACE facing token is not a valid cardinal value
    InvalidOrientation,

    // =========================================================================
    // IO errors (outside the core; CLI stdin/script handling)
    // =========================================================================
    /// File not found
    FileNotFound,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            // General
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::ConfigInvalid => "ConfigInvalid",

            // Command
            ErrorKind::UnknownCommand => "UnknownCommand",
            ErrorKind::NotPlaced => "NotPlaced",
            ErrorKind::MalformedArguments => "MalformedArguments",
            ErrorKind::OutOfBounds => "OutOfBounds",
            ErrorKind::InvalidOrientation => "InvalidOrientation",

            // IO
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::IoFailed => "IoFailed",
        }
    }

    /// Check if this error kind leaves the session able to continue.
    ///
    /// Every command rejection is recoverable: the robot state is untouched
    /// and the next command may be dispatched. Only setup and IO failures
    /// default to fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnknownCommand
                | ErrorKind::NotPlaced
                | ErrorKind::MalformedArguments
                | ErrorKind::OutOfBounds
                | ErrorKind::InvalidOrientation
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
