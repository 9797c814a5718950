//! Type-safe wrappers for headings, moves and broadside inputs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::constants::{CARDINAL_HEADINGS, HEADING_COUNT, MAX_SHOTS_PER_SIDE};
use super::errors::{SimError, SimResult};

/// Facing direction (0 to 15)
///
/// The sixteen headings are 22.5 degrees apart and the index grows clockwise:
/// - 2 = East
/// - 6 = South
/// - 10 = West
/// - 14 = North
/// - everything else is an intermediate position passed through while turning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Heading(u8);

impl Heading {
    pub const EAST: Heading = Heading(2);
    pub const SOUTH: Heading = Heading(6);
    pub const WEST: Heading = Heading(10);
    pub const NORTH: Heading = Heading(14);

    /// Create a heading, wrapping any integer into 0..16 (16 -> 0, -1 -> 15).
    pub fn new(value: i32) -> Self {
        Heading(value.rem_euclid(HEADING_COUNT as i32) as u8)
    }

    /// Get the heading index
    pub fn index(self) -> u8 {
        self.0
    }

    /// Whether broadsides can be resolved at this heading
    pub fn is_cardinal(self) -> bool {
        CARDINAL_HEADINGS.contains(&self.0)
    }

    /// Rotate by `steps` index positions; positive is clockwise.
    pub fn rotated(self, steps: i32) -> Self {
        Heading::new(self.0 as i32 + steps)
    }

    pub fn opposite(self) -> Self {
        self.rotated(HEADING_COUNT as i32 / 2)
    }

    /// All sixteen headings in index order
    pub fn all() -> impl Iterator<Item = Heading> {
        (0..HEADING_COUNT).map(Heading)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move a vessel can queue for one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Forward,
    TurnLeft,
    TurnRight,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Forward, MoveKind::TurnLeft, MoveKind::TurnRight];

    /// Decode the numeric move code used by turn scripts.
    pub fn from_code(code: u8) -> SimResult<Self> {
        match code {
            1 => Ok(MoveKind::TurnLeft),
            2 => Ok(MoveKind::TurnRight),
            3 => Ok(MoveKind::Forward),
            other => Err(SimError::InvalidArgument(format!("unknown move code {other}"))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MoveKind::TurnLeft => 1,
            MoveKind::TurnRight => 2,
            MoveKind::Forward => 3,
        }
    }

    pub fn is_turn(self) -> bool {
        !matches!(self, MoveKind::Forward)
    }

    pub fn name(self) -> &'static str {
        match self {
            MoveKind::Forward => "FORWARD",
            MoveKind::TurnLeft => "TURN LEFT",
            MoveKind::TurnRight => "TURN RIGHT",
        }
    }
}

impl FromStr for MoveKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "forward" => Ok(MoveKind::Forward),
            "l" | "left" | "turn_left" => Ok(MoveKind::TurnLeft),
            "r" | "right" | "turn_right" => Ok(MoveKind::TurnRight),
            other => Err(SimError::InvalidArgument(format!("unknown move kind '{other}'"))),
        }
    }
}

/// Which broadside fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

/// Number of shots fired from one side in one action (0 to 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShotCount(u8);

impl ShotCount {
    pub const NONE: ShotCount = ShotCount(0);
    pub const SINGLE: ShotCount = ShotCount(1);
    pub const DOUBLE: ShotCount = ShotCount(2);

    /// Create a new shot count
    ///
    /// # Returns
    /// Ok(ShotCount) if valid, InvalidArgument otherwise
    pub fn new(value: u8) -> SimResult<Self> {
        if value <= MAX_SHOTS_PER_SIDE {
            Ok(ShotCount(value))
        } else {
            Err(SimError::InvalidArgument(format!(
                "shot count {value} outside 0..={MAX_SHOTS_PER_SIDE}"
            )))
        }
    }

    /// Get the shot count value
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}
