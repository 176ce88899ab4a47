//! Compass directions and relative turns.
//!
//! Directions are stored as 2-bit ordinals in the order `Up, Left, Down,
//! Right`. That order is load-bearing: creature tiles are laid out as
//! `base | ordinal`, and turning left is `+1` modulo 4.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Candidate directions, highest priority first.
///
/// `None` entries are kept in place: they are attempted (and fail) like any
/// other candidate, which matters for bookkeeping in the turn driver.
pub type Candidates = SmallVec<[Option<Direction>; 4]>;

/// One of the four compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward column 0.
    Left,
    /// Toward row 31.
    Down,
    /// Toward column 31.
    Right,
}

/// A turn relative to a creature's current facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Keep the current facing.
    Forward,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Half turn.
    Around,
}

impl Turn {
    const fn steps(self) -> u8 {
        match self {
            Turn::Forward => 0,
            Turn::Left => 1,
            Turn::Around => 2,
            Turn::Right => 3,
        }
    }
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Direction for a 2-bit ordinal. Higher bits are ignored.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        Self::ALL[(ordinal & 0b11) as usize]
    }

    /// The 2-bit ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Ordinal shifted into bits 15:14 of the creature encoding.
    #[must_use]
    pub const fn bits(self) -> u16 {
        (self as u16) << 14
    }

    /// Apply a relative turn.
    #[must_use]
    pub const fn turn(self, turn: Turn) -> Self {
        Self::from_ordinal(self.ordinal() + turn.steps())
    }

    /// Apply each turn in order, producing a candidate list.
    ///
    /// ```
    /// use chip_rules::core::{Direction, Turn};
    ///
    /// let list = Direction::Up.turn_all(&[Turn::Forward, Turn::Around]);
    /// assert_eq!(list.as_slice(), &[Some(Direction::Up), Some(Direction::Down)]);
    /// ```
    #[must_use]
    pub fn turn_all(self, turns: &[Turn]) -> Candidates {
        turns.iter().map(|&turn| Some(self.turn(turn))).collect()
    }

    /// Column and row deltas for one step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}
