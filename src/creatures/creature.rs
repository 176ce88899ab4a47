//! The per-actor record and its persisted encoding.
//!
//! ## Encoding
//!
//! ```text
//!   15 14 | 13 12 11 10 | 9 8 7 6 5 | 4 3 2 1 0
//!   DIR   |    KIND     |    ROW    |    COL
//! ```
//!
//! Storage does not distinguish a stopped tank from a moving one, so a
//! decoded `TankStationary` comes back as `TankMoving`.
//!
//! ```
//! use chip_rules::core::{Direction, Position};
//! use chip_rules::creatures::{Creature, CreatureKind};
//!
//! let bug = Creature::new(Direction::Left, CreatureKind::Bug, Position::new(4, 2));
//! assert_eq!(Creature::from_bits(bug.bits()), Ok(bug));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Direction, EncodingError, Position};
use crate::tiles::Tile;

use super::kind::CreatureKind;

const POSITION_MASK: u16 = 0b11_1111_1111;

/// One actor on the board.
///
/// Dead actors keep their slot; callers skip them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Current cell.
    pub position: Position,
    /// What this actor is.
    pub kind: CreatureKind,
    /// Current facing.
    pub direction: Direction,
    /// Whether a sliding surface currently controls this actor.
    pub sliding: bool,
    /// Externally injected next direction, consumed by the next decision.
    scripted: Option<Direction>,
}

impl Creature {
    /// Create a creature from explicit fields.
    ///
    /// `ChipSliding` starts with the sliding flag set, matching what decoding
    /// produces.
    #[must_use]
    pub fn new(direction: Direction, kind: CreatureKind, position: Position) -> Self {
        Self {
            position,
            kind,
            direction,
            sliding: kind == CreatureKind::ChipSliding,
            scripted: None,
        }
    }

    /// Decode the creature depicted by a board tile.
    ///
    /// Blocks drawn with an arrow face that arrow; the plain block tile faces
    /// down. Tanks always come back moving.
    pub fn from_tile(position: Position, tile: Tile) -> Result<Self, EncodingError> {
        if !tile.is_creature() {
            return Err(EncodingError::NotACreature(tile));
        }
        let code = tile.ordinal();
        let (direction, kind) = match tile {
            Tile::BlockUp | Tile::BlockLeft | Tile::BlockDown | Tile::BlockRight => {
                (Direction::from_ordinal(code + 2), CreatureKind::Block)
            }
            Tile::Block => (Direction::from_ordinal(code), CreatureKind::Block),
            _ => (
                Direction::from_ordinal(code),
                CreatureKind::from_code((code - Tile::BugUp.ordinal()) >> 2)?,
            ),
        };
        let kind = match kind {
            CreatureKind::TankStationary => CreatureKind::TankMoving,
            other => other,
        };
        Ok(Self::new(direction, kind, position))
    }

    /// Decode the 16-bit persisted form.
    pub fn from_bits(bits: u16) -> Result<Self, EncodingError> {
        let direction = Direction::from_ordinal((bits >> 14) as u8);
        let kind = match CreatureKind::from_code(((bits >> 10) & 0b1111) as u8)? {
            CreatureKind::TankStationary => CreatureKind::TankMoving,
            other => other,
        };
        let position = Position::from_index(bits & POSITION_MASK);
        Ok(Self::new(direction, kind, position))
    }

    /// The 16-bit persisted form.
    #[must_use]
    pub fn bits(&self) -> u16 {
        debug_assert!(self.position.is_valid(), "encoding off-board creature");
        self.direction.bits() | self.kind.bits() | (self.position.index() & POSITION_MASK)
    }

    /// Persisted form as little-endian bytes.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.bits().to_le_bytes()
    }

    /// Decode little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Result<Self, EncodingError> {
        Self::from_bits(u16::from_le_bytes(bytes))
    }

    /// The tile that renders this creature on the foreground layer.
    ///
    /// Panics for a dead creature, which has no rendering.
    #[must_use]
    pub fn to_tile(&self) -> Tile {
        let facing = self.direction.ordinal();
        let code = match self.kind {
            CreatureKind::Block => return Tile::Block,
            CreatureKind::Dead => panic!("dead creature at {} has no tile", self.position),
            CreatureKind::ChipSliding => Tile::ChipUp.ordinal() | facing,
            CreatureKind::TankStationary => Tile::TankUp.ordinal() | facing,
            kind => (Tile::BugUp.ordinal() + (kind.code() << 2)) | facing,
        };
        Tile::from_ordinal(code).unwrap_or_else(|_| unreachable!("creature tile {code:#04x}"))
    }

    /// Turn this actor into the dead marker.
    pub fn kill(&mut self) {
        self.kind = CreatureKind::Dead;
    }

    /// Whether this actor is the dead marker.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.kind == CreatureKind::Dead
    }

    /// Sliding as seen by the rules: the flag, or the sliding player kind.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.kind == CreatureKind::ChipSliding || self.sliding
    }

    /// Inject the direction the next decision must return.
    pub fn set_scripted_direction(&mut self, direction: Option<Direction>) {
        self.scripted = direction;
    }

    /// The pending injected direction, if any.
    #[must_use]
    pub fn scripted_direction(&self) -> Option<Direction> {
        self.scripted
    }

    pub(crate) fn take_scripted_direction(&mut self) -> Option<Direction> {
        self.scripted.take()
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_dead() {
            write!(f, "Dead monster at position {}", self.position)
        } else {
            write!(f, "{:?} facing {:?} at position {}", self.kind, self.direction, self.position)
        }
    }
}
