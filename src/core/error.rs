//! Errors at the persistence boundary.
//!
//! Everything inside a tick is closed-world and fails fast; only decoding of
//! stored tiles and creatures can meet bad input, and that is reported here.

use thiserror::Error;

use crate::tiles::Tile;

/// Failure to decode a stored layer, tile or creature.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Tile code above the last board tile.
    #[error("tile code {0:#04x} is out of range")]
    UnknownTile(u8),

    /// Creature kind code that no kind is assigned to.
    #[error("creature kind code {0} is not assigned")]
    UnknownCreatureKind(u8),

    /// Tile that does not depict a creature or block.
    #[error("tile {0:?} does not depict a creature")]
    NotACreature(Tile),

    /// Stored layer whose cell count is not one full board.
    #[error("layer has {0} cells, a board has 1024")]
    WrongCellCount(usize),
}
