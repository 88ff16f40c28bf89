//! Command set and line parsing.
//!
//! The command line is the whole protocol: a keyword, optionally followed by
//! a single space and an argument block. [`Command::parse`] decodes a raw
//! line into a [`Command`] exactly once; the engine then matches on the
//! variant exhaustively. There is no string-keyed handler lookup at dispatch
//! time.

use crate::error::{self, Result};
use crate::robot::Orientation;

/// A parsed command, carrying its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the robot at `(x, y)` facing the given direction.
    /// The only command that works on an unplaced robot.
    Place {
        x: i32,
        y: i32,
        facing: Orientation,
    },
    /// Advance one cell in the facing direction
    Move,
    /// Rotate 90 degrees counter-clockwise
    Left,
    /// Rotate 90 degrees clockwise
    Right,
    /// Render the current position and facing
    Report,
}

impl Command {
    /// Parse one raw command line.
    ///
    /// The keyword is the text before the first space; the remainder (if
    /// any) is the argument block. Only PLACE takes arguments; the
    /// zero-argument commands ignore whatever follows them, so `MOVE` and
    /// `MOVE anything` are the same command.
    pub fn parse(line: &str) -> Result<Command> {
        let (keyword, args) = match line.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };

        match keyword {
            "PLACE" => Self::parse_place_args(args),
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Left),
            "RIGHT" => Ok(Command::Right),
            "REPORT" => Ok(Command::Report),
            other => Err(error::unknown_command(other).with_operation("command::parse")),
        }
    }

    /// Decode the `X,Y,F` argument block of a PLACE command.
    ///
    /// Two-stage validation: token syntax here (integers parse, facing is a
    /// known literal), grid bounds later in the engine. A sign-prefixed
    /// number like `-1` is syntactically valid and only fails the bounds
    /// check.
    fn parse_place_args(args: &str) -> Result<Command> {
        let mut tokens = args.split(',');
        let (Some(x), Some(y), Some(facing), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(error::malformed_place_args(args).with_operation("command::parse"));
        };

        let x: i32 = x
            .parse()
            .map_err(|_| error::malformed_place_args(args).with_operation("command::parse"))?;
        let y: i32 = y
            .parse()
            .map_err(|_| error::malformed_place_args(args).with_operation("command::parse"))?;
        let facing = Orientation::from_token(facing)
            .ok_or_else(|| error::invalid_orientation(facing).with_operation("command::parse"))?;

        Ok(Command::Place { x, y, facing })
    }
}

/// Render a short, human-readable summary of the command grammar.
///
/// Surfaced by the CLI `grammar` subcommand and its REPL `HELP` sentinel.
pub fn grammar_summary() -> String {
    let mut out = String::new();
    out.push_str("Commands:\n");
    out.push_str("  PLACE X,Y,F  place the robot at (X, Y) facing F\n");
    out.push_str("               X and Y are integers; F is NORTH, EAST, SOUTH or WEST\n");
    out.push_str("  MOVE         advance one cell in the facing direction\n");
    out.push_str("  LEFT         rotate 90 degrees counter-clockwise\n");
    out.push_str("  RIGHT        rotate 90 degrees clockwise\n");
    out.push_str("  REPORT       print the current position and facing\n");
    out.push_str("\nThe robot accepts no command before its first successful PLACE.\n");
    out
}
