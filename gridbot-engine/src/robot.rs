//! Robot state: orientation, pose, placement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal facing values, cyclically ordered
/// NORTH -> EAST -> SOUTH -> WEST -> NORTH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Counter-clockwise neighbor in the cardinal cycle
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Clockwise neighbor in the cardinal cycle
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit displacement applied on advance
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// The uppercase literal, as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "NORTH",
            Orientation::East => "EAST",
            Orientation::South => "SOUTH",
            Orientation::West => "WEST",
        }
    }

    /// Case-sensitive match against the four cardinal literals
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NORTH" => Some(Orientation::North),
            "EAST" => Some(Orientation::East),
            "SOUTH" => Some(Orientation::South),
            "WEST" => Some(Orientation::West),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position and facing of a placed robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    pub facing: Orientation,
}

/// The single source of truth for the robot's placement.
///
/// `pose` stays `None` until the first successful PLACE; position and facing
/// cannot be read or written before that. Mutation goes through the engine
/// only, after validation succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pose: Option<Pose>,
}

impl Robot {
    /// Create an unplaced robot
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the robot has ever been successfully placed
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// Current pose, if placed
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Overwrite the pose. Engine-only: callers go through dispatch.
    pub(crate) fn set_pose(&mut self, pose: Pose) {
        self.pose = Some(pose);
    }
}
