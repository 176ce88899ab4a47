//! Board coordinates packed into a 10-bit index.
//!
//! The board is a fixed 32×32 grid. A cell is stored as `row * 32 + col`,
//! which fits in the low ten bits of the persisted creature encoding.
//!
//! ## Off-board cells
//!
//! Stepping off the edge never panics. [`Position::moved`] returns
//! [`Position::INVALID`] instead, and every layer read of `INVALID` yields a
//! wall, so the move simply fails further down the pipeline.
//!
//! ```
//! use chip_rules::core::{Direction, Position};
//!
//! let corner = Position::new(0, 0);
//! assert_eq!(corner.moved(Direction::Right), Position::new(1, 0));
//! assert_eq!(corner.moved(Direction::Up), Position::INVALID);
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Width and height of the board, in cells.
pub const BOARD_SIZE: u16 = 32;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A board cell, or the off-board sentinel.
///
/// Deserializing goes through [`Position::from_index`], so every stored
/// index past the board reads back as `INVALID`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16")]
pub struct Position(u16);

impl Position {
    /// The off-board sentinel. Compares unequal to every real cell.
    pub const INVALID: Position = Position(u16::MAX);

    /// Create a position from column `x` and row `y`.
    ///
    /// Returns `INVALID` if either coordinate is outside `0..32`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        if x < 0 || y < 0 || x >= BOARD_SIZE as i32 || y >= BOARD_SIZE as i32 {
            return Self::INVALID;
        }
        Self((y as u16) * BOARD_SIZE + x as u16)
    }

    /// Create a position from a raw board index.
    ///
    /// Returns `INVALID` for indices of 1024 and above.
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        if index as usize >= CELL_COUNT {
            Self::INVALID
        } else {
            Self(index)
        }
    }

    /// Raw board index. Only meaningful for valid positions.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Whether this is a real board cell.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < CELL_COUNT
    }

    /// Column, `0..32`.
    #[must_use]
    pub fn x(self) -> i32 {
        debug_assert!(self.is_valid(), "x() of off-board position");
        i32::from(self.0 % BOARD_SIZE)
    }

    /// Row, `0..32`.
    #[must_use]
    pub fn y(self) -> i32 {
        debug_assert!(self.is_valid(), "y() of off-board position");
        i32::from(self.0 / BOARD_SIZE)
    }

    /// The neighbouring cell in `direction`, or `INVALID` past the edge.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        if !self.is_valid() {
            return Self::INVALID;
        }
        let (dx, dy) = direction.offset();
        Self::new(self.x() + dx, self.y() + dy)
    }

    /// Directions that close the distance to `target`.
    ///
    /// The axis with the larger distance comes first; vertical wins ties.
    /// A slot is `None` when there is no distance to close on that axis.
    #[must_use]
    pub fn seek(self, target: Position) -> [Option<Direction>; 2] {
        if !self.is_valid() || !target.is_valid() {
            return [None, None];
        }
        let dx = target.x() - self.x();
        let dy = target.y() - self.y();

        let vertical = match dy.signum() {
            -1 => Some(Direction::Up),
            1 => Some(Direction::Down),
            _ => None,
        };
        let horizontal = match dx.signum() {
            -1 => Some(Direction::Left),
            1 => Some(Direction::Right),
            _ => None,
        };

        if dx.abs() > dy.abs() {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        }
    }
}

impl From<u16> for Position {
    fn from(index: u16) -> Self {
        Self::from_index(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "({}, {})", self.x(), self.y())
        } else {
            write!(f, "(off-board)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(31, 0).index(), 31);
        assert_eq!(Position::new(0, 1).index(), 32);
        assert_eq!(Position::new(31, 31).index(), 1023);

        let p = Position::from_index(70);
        assert_eq!((p.x(), p.y()), (6, 2));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert_eq!(Position::new(-1, 0), Position::INVALID);
        assert_eq!(Position::new(0, 32), Position::INVALID);
        assert_eq!(Position::from_index(1024), Position::INVALID);
        assert!(!Position::INVALID.is_valid());
    }

    #[test]
    fn test_invalid_differs_from_every_cell() {
        for index in 0..CELL_COUNT as u16 {
            assert_ne!(Position::from_index(index), Position::INVALID);
        }
    }

    #[test]
    fn test_moved() {
        let p = Position::new(5, 5);
        assert_eq!(p.moved(Direction::Up), Position::new(5, 4));
        assert_eq!(p.moved(Direction::Down), Position::new(5, 6));
        assert_eq!(p.moved(Direction::Left), Position::new(4, 5));
        assert_eq!(p.moved(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_moved_off_board() {
        assert_eq!(Position::new(0, 3).moved(Direction::Left), Position::INVALID);
        assert_eq!(Position::new(31, 3).moved(Direction::Right), Position::INVALID);
        assert_eq!(Position::new(3, 0).moved(Direction::Up), Position::INVALID);
        assert_eq!(Position::new(3, 31).moved(Direction::Down), Position::INVALID);
        assert_eq!(Position::INVALID.moved(Direction::Down), Position::INVALID);
    }

    #[test]
    fn test_seek_prefers_longer_axis() {
        let from = Position::new(10, 10);

        // Mostly horizontal
        assert_eq!(
            from.seek(Position::new(15, 8)),
            [Some(Direction::Right), Some(Direction::Up)]
        );
        // Mostly vertical
        assert_eq!(
            from.seek(Position::new(9, 20)),
            [Some(Direction::Down), Some(Direction::Left)]
        );
    }

    #[test]
    fn test_seek_tie_goes_vertical() {
        let from = Position::new(10, 10);
        assert_eq!(
            from.seek(Position::new(7, 7)),
            [Some(Direction::Up), Some(Direction::Left)]
        );
    }

    #[test]
    fn test_seek_same_axis() {
        let from = Position::new(10, 10);
        assert_eq!(from.seek(Position::new(10, 2)), [Some(Direction::Up), None]);
        assert_eq!(from.seek(Position::new(12, 10)), [Some(Direction::Right), None]);
        assert_eq!(from.seek(from), [None, None]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(3, 4)), "(3, 4)");
        assert_eq!(format!("{}", Position::INVALID), "(off-board)");
    }

    #[test]
    fn test_serde_normalizes_off_board() {
        let p = Position::new(5, 5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "165");
        assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), p);

        for raw in ["1024", "2000", "65535"] {
            assert_eq!(serde_json::from_str::<Position>(raw).unwrap(), Position::INVALID, "{raw}");
        }
    }
}
