//! Dispatch engine: one raw line in, one validated state transition out.
//!
//! The engine owns one session's [`Robot`] and [`Grid`]. Validation always
//! runs to completion before any mutation, so a failing dispatch leaves the
//! robot exactly as it was. The engine holds no global state; concurrent
//! sessions are simply independent `Engine` values.

use crate::command::Command;
use crate::error::{self, Result};
use crate::grid::Grid;
use crate::robot::{Orientation, Pose, Robot};
use serde::Serialize;

/// Maximum retained trace entries (oldest dropped first)
pub const MAX_TRACE_ENTRIES: usize = 64;

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command was applied; nothing to render
    Applied,
    /// REPORT payload for the caller to render
    Report(String),
}

impl DispatchOutcome {
    /// Message to render, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Applied => None,
            DispatchOutcome::Report(message) => Some(message),
        }
    }
}

/// Flat `{success, message}` record of a dispatch.
///
/// This is the wire shape: the report payload on success, the human-readable
/// explanation on failure. Used by callers that serialize results (the CLI's
/// JSON mode) instead of matching on the typed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommandResult {
    /// Flatten a dispatch result into the wire shape
    pub fn from_dispatch(result: &Result<DispatchOutcome>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                message: outcome.message().map(str::to_string),
            },
            Err(err) => Self {
                success: false,
                message: Some(err.message().to_string()),
            },
        }
    }
}

/// One dispatched line, as retained in the session trace.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEntry {
    /// Dispatch sequence number, counted from 1
    pub seq: usize,
    /// The raw line as received
    pub line: String,
    /// Report payload, "ok", or the error message
    pub result: String,
    /// Whether this dispatch was rejected
    pub had_error: bool,
}

/// The command engine for one session.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    grid: Grid,
    robot: Robot,
    trace: Vec<TraceEntry>,
    seq: usize,
}

impl Engine {
    /// Create an engine with the default 5x5 grid and an unplaced robot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over custom grid bounds
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Grid bounds for this session
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Robot state for this session
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Retained trace of dispatched lines, oldest first
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Parse, validate, and execute one raw command line.
    ///
    /// On failure the robot state is exactly as it was before the call; the
    /// session always continues.
    pub fn dispatch(&mut self, line: &str) -> Result<DispatchOutcome> {
        let result = self.execute(line);
        self.record(line, &result);
        result
    }

    fn execute(&mut self, line: &str) -> Result<DispatchOutcome> {
        match Command::parse(line).map_err(|e| e.with_operation("engine::dispatch"))? {
            Command::Place { x, y, facing } => self.place(x, y, facing),
            Command::Move => self.advance(),
            Command::Left => self.turn(Orientation::left),
            Command::Right => self.turn(Orientation::right),
            Command::Report => self.report(),
        }
    }

    /// Gating rule: every command except PLACE demands a placed robot.
    fn placed_pose(&self) -> Result<Pose> {
        self.robot
            .pose()
            .ok_or_else(|| error::not_placed().with_operation("engine::dispatch"))
    }

    /// PLACE: bounds-check the target, then fully overwrite the pose.
    /// Re-placing an already-placed robot is the same operation.
    fn place(&mut self, x: i32, y: i32, facing: Orientation) -> Result<DispatchOutcome> {
        if !self.grid.contains(x, y) {
            return Err(error::placement_off_grid(x, y).with_operation("engine::place"));
        }
        self.robot.set_pose(Pose { x, y, facing });
        Ok(DispatchOutcome::Applied)
    }

    /// MOVE: one cell along the facing direction, or nothing at all.
    fn advance(&mut self) -> Result<DispatchOutcome> {
        let pose = self.placed_pose()?;
        let (dx, dy) = pose.facing.displacement();
        let (x, y) = (pose.x + dx, pose.y + dy);
        if !self.grid.contains(x, y) {
            return Err(error::move_off_grid(x, y)
                .with_operation("engine::advance")
                .with_context("facing", pose.facing.as_str()));
        }
        self.robot.set_pose(Pose { x, y, ..pose });
        Ok(DispatchOutcome::Applied)
    }

    /// LEFT/RIGHT: rotate in place. No bounds implication.
    fn turn(&mut self, rotate: fn(Orientation) -> Orientation) -> Result<DispatchOutcome> {
        let pose = self.placed_pose()?;
        self.robot.set_pose(Pose {
            facing: rotate(pose.facing),
            ..pose
        });
        Ok(DispatchOutcome::Applied)
    }

    /// REPORT: render the pose, mutate nothing.
    fn report(&self) -> Result<DispatchOutcome> {
        let pose = self.placed_pose()?;
        Ok(DispatchOutcome::Report(format!(
            "X: {} | Y: {} | F: {}",
            pose.x, pose.y, pose.facing
        )))
    }

    fn record(&mut self, line: &str, result: &Result<DispatchOutcome>) {
        self.seq += 1;
        let (result_text, had_error) = match result {
            Ok(outcome) => (outcome.message().unwrap_or("ok").to_string(), false),
            Err(err) => (err.message().to_string(), true),
        };

        self.trace.push(TraceEntry {
            seq: self.seq,
            line: line.to_string(),
            result: result_text,
            had_error,
        });

        if self.trace.len() > MAX_TRACE_ENTRIES {
            let excess = self.trace.len() - MAX_TRACE_ENTRIES;
            self.trace.drain(0..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn report(engine: &mut Engine) -> String {
        match engine.dispatch("REPORT").unwrap() {
            DispatchOutcome::Report(message) => message,
            other => panic!("expected report, got {:?}", other),
        }
    }

    // =========================================================================
    // Gating rule
    // =========================================================================

    #[test]
    fn test_gated_commands_fail_before_placement() {
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT"] {
            let mut engine = Engine::new();
            let err = engine.dispatch(line).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotPlaced, "line: {line}");
            assert_eq!(err.message(), "agent must be placed first");
        }
    }

    #[test]
    fn test_gated_commands_succeed_after_placement() {
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT"] {
            let mut engine = Engine::new();
            engine.dispatch("PLACE 2,2,NORTH").unwrap();
            assert!(engine.dispatch(line).is_ok(), "line: {line}");
        }
    }

    #[test]
    fn test_place_is_never_gated() {
        let mut engine = Engine::new();
        // Even a malformed PLACE is attempted, not rejected by the gate.
        let err = engine.dispatch("PLACE bogus").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArguments);
    }

    // =========================================================================
    // PLACE validation
    // =========================================================================

    #[test]
    fn test_place_accepts_all_corners_and_facings() {
        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            for facing in ["NORTH", "EAST", "SOUTH", "WEST"] {
                let mut engine = Engine::new();
                engine
                    .dispatch(&format!("PLACE {},{},{}", x, y, facing))
                    .unwrap();
                assert_eq!(report(&mut engine), format!("X: {} | Y: {} | F: {}", x, y, facing));
            }
        }
    }

    #[test]
    fn test_place_rejects_malformed_arguments() {
        for line in ["PLACE", "PLACE 0", "PLACE 0,0", "PLACE X,Y,NORTH"] {
            let mut engine = Engine::new();
            let err = engine.dispatch(line).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedArguments, "line: {line}");
            assert!(!engine.robot().is_placed());
        }
    }

    #[test]
    fn test_place_rejects_negative_coordinates_as_off_grid() {
        let mut engine = Engine::new();
        let err = engine.dispatch("PLACE -1,-1,NORTH").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(err.message(), "placement off the table");

        // Never placed, so REPORT still fails.
        let err = engine.dispatch("REPORT").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPlaced);
    }

    #[test]
    fn test_place_rejects_coordinates_beyond_bounds() {
        let mut engine = Engine::new();
        let err = engine.dispatch("PLACE 10,10,NORTH").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(!engine.robot().is_placed());
    }

    #[test]
    fn test_place_rejects_invalid_facing() {
        let mut engine = Engine::new();
        let err = engine.dispatch("PLACE 0,0,WEAST").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOrientation);
        assert_eq!(err.message(), "invalid facing direction");
        assert!(!engine.robot().is_placed());
    }

    #[test]
    fn test_replacement_fully_overwrites_pose() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,0,NORTH").unwrap();
        engine.dispatch("PLACE 3,2,SOUTH").unwrap();
        assert_eq!(report(&mut engine), "X: 3 | Y: 2 | F: SOUTH");
    }

    #[test]
    fn test_failed_replacement_keeps_previous_pose() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 1,1,EAST").unwrap();
        engine.dispatch("PLACE 9,9,NORTH").unwrap_err();
        engine.dispatch("PLACE 0,0,WEAST").unwrap_err();
        assert_eq!(report(&mut engine), "X: 1 | Y: 1 | F: EAST");
    }

    // =========================================================================
    // MOVE
    // =========================================================================

    #[test]
    fn test_move_advances_along_each_facing() {
        let cases = [
            ("NORTH", "X: 2 | Y: 3 | F: NORTH"),
            ("EAST", "X: 3 | Y: 2 | F: EAST"),
            ("SOUTH", "X: 2 | Y: 1 | F: SOUTH"),
            ("WEST", "X: 1 | Y: 2 | F: WEST"),
        ];
        for (facing, expected) in cases {
            let mut engine = Engine::new();
            engine.dispatch(&format!("PLACE 2,2,{}", facing)).unwrap();
            engine.dispatch("MOVE").unwrap();
            assert_eq!(report(&mut engine), expected);
        }
    }

    #[test]
    fn test_move_fails_at_each_edge() {
        let cases = [
            ("PLACE 0,4,NORTH", "X: 0 | Y: 4 | F: NORTH"),
            ("PLACE 4,0,EAST", "X: 4 | Y: 0 | F: EAST"),
            ("PLACE 0,0,SOUTH", "X: 0 | Y: 0 | F: SOUTH"),
            ("PLACE 0,0,WEST", "X: 0 | Y: 0 | F: WEST"),
        ];
        for (place, expected) in cases {
            let mut engine = Engine::new();
            engine.dispatch(place).unwrap();
            let err = engine.dispatch("MOVE").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfBounds, "place: {place}");
            assert_eq!(err.message(), "move would leave the grid");
            // Never partially applies.
            assert_eq!(report(&mut engine), expected);
        }
    }

    // =========================================================================
    // LEFT / RIGHT
    // =========================================================================

    #[test]
    fn test_left_turns_through_full_cycle() {
        let cases = [
            ("NORTH", "WEST"),
            ("EAST", "NORTH"),
            ("SOUTH", "EAST"),
            ("WEST", "SOUTH"),
        ];
        for (start, expected) in cases {
            let mut engine = Engine::new();
            engine.dispatch(&format!("PLACE 0,0,{}", start)).unwrap();
            engine.dispatch("LEFT").unwrap();
            assert_eq!(report(&mut engine), format!("X: 0 | Y: 0 | F: {}", expected));
        }
    }

    #[test]
    fn test_right_turns_through_full_cycle() {
        let cases = [
            ("NORTH", "EAST"),
            ("EAST", "SOUTH"),
            ("SOUTH", "WEST"),
            ("WEST", "NORTH"),
        ];
        for (start, expected) in cases {
            let mut engine = Engine::new();
            engine.dispatch(&format!("PLACE 0,0,{}", start)).unwrap();
            engine.dispatch("RIGHT").unwrap();
            assert_eq!(report(&mut engine), format!("X: 0 | Y: 0 | F: {}", expected));
        }
    }

    #[test]
    fn test_turning_never_changes_position() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 3,1,NORTH").unwrap();
        for _ in 0..4 {
            engine.dispatch("LEFT").unwrap();
        }
        assert_eq!(report(&mut engine), "X: 3 | Y: 1 | F: NORTH");
    }

    // =========================================================================
    // No partial mutation
    // =========================================================================

    #[test]
    fn test_failing_dispatch_leaves_state_untouched() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,4,NORTH").unwrap();
        let before = engine.robot().clone();

        for line in [
            "MOVE",             // off the north edge
            "PLACE 5,5,NORTH",  // off-grid placement
            "PLACE 0,0,WEAST",  // bad facing
            "PLACE nope",       // malformed
            "FLY",              // unknown keyword
        ] {
            engine.dispatch(line).unwrap_err();
            assert_eq!(engine.robot(), &before, "line: {line}");
        }
    }

    // =========================================================================
    // Example scenarios
    // =========================================================================

    #[test]
    fn test_scenario_move_then_report() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,0,NORTH").unwrap();
        engine.dispatch("MOVE").unwrap();
        assert_eq!(report(&mut engine), "X: 0 | Y: 1 | F: NORTH");
    }

    #[test]
    fn test_scenario_left_then_report() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,0,NORTH").unwrap();
        engine.dispatch("LEFT").unwrap();
        assert_eq!(report(&mut engine), "X: 0 | Y: 0 | F: WEST");
    }

    #[test]
    fn test_scenario_mixed_walk() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 1,2,EAST").unwrap();
        engine.dispatch("MOVE").unwrap();
        engine.dispatch("MOVE").unwrap();
        engine.dispatch("LEFT").unwrap();
        engine.dispatch("MOVE").unwrap();
        assert_eq!(report(&mut engine), "X: 3 | Y: 3 | F: NORTH");
    }

    // =========================================================================
    // Custom grids
    // =========================================================================

    #[test]
    fn test_custom_grid_bounds_apply() {
        let mut engine = Engine::with_grid(Grid::new(3, 3).unwrap());
        assert_eq!(engine.grid().width(), 3);
        engine.dispatch("PLACE 2,2,NORTH").unwrap();
        assert_eq!(
            engine.dispatch("MOVE").unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            engine.dispatch("PLACE 3,0,NORTH").unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
    }

    // =========================================================================
    // Trace
    // =========================================================================

    #[test]
    fn test_trace_records_dispatches() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,0,NORTH").unwrap();
        engine.dispatch("MOVE").unwrap();
        engine.dispatch("FLY").unwrap_err();
        engine.dispatch("REPORT").unwrap();

        let trace = engine.trace();
        assert_eq!(trace.len(), 4);
        assert_eq!(trace[0].line, "PLACE 0,0,NORTH");
        assert_eq!(trace[0].result, "ok");
        assert!(!trace[0].had_error);
        assert!(trace[2].had_error);
        assert!(trace[2].result.contains("FLY"));
        assert_eq!(trace[3].result, "X: 0 | Y: 1 | F: NORTH");
    }

    #[test]
    fn test_trace_is_bounded() {
        let mut engine = Engine::new();
        engine.dispatch("PLACE 0,0,NORTH").unwrap();
        for _ in 0..(MAX_TRACE_ENTRIES * 2) {
            engine.dispatch("REPORT").unwrap();
        }
        assert_eq!(engine.trace().len(), MAX_TRACE_ENTRIES);
        // Sequence numbers keep counting even after old entries are dropped.
        assert_eq!(engine.trace().last().unwrap().seq, MAX_TRACE_ENTRIES * 2 + 1);
    }

    // =========================================================================
    // CommandResult wire shape
    // =========================================================================

    #[test]
    fn test_command_result_from_dispatch() {
        let mut engine = Engine::new();

        let result = engine.dispatch("PLACE 0,0,NORTH");
        let record = CommandResult::from_dispatch(&result);
        assert!(record.success);
        assert_eq!(record.message, None);

        let result = engine.dispatch("REPORT");
        let record = CommandResult::from_dispatch(&result);
        assert!(record.success);
        assert_eq!(record.message.as_deref(), Some("X: 0 | Y: 0 | F: NORTH"));

        let result = engine.dispatch("FLY");
        let record = CommandResult::from_dispatch(&result);
        assert!(!record.success);
        assert_eq!(record.message.as_deref(), Some("unknown command 'FLY'"));
    }

    #[test]
    fn test_command_result_serialization() {
        let mut engine = Engine::new();

        let result = engine.dispatch("PLACE 0,0,NORTH");
        let json = serde_json::to_string(&CommandResult::from_dispatch(&result)).unwrap();
        assert_eq!(json, r#"{"success":true}"#);

        let result = engine.dispatch("REPORT");
        let json = serde_json::to_string(&CommandResult::from_dispatch(&result)).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"X: 0 | Y: 0 | F: NORTH"}"#);
    }
}
