//! One 32×32 tile layer.
//!
//! Reads of the off-board sentinel yield [`Tile::Wall`], so a move that steps
//! off the edge fails entry like any other wall. Writes to it are dropped.
//!
//! A layer always holds exactly one board of cells. Stored layers, whether
//! raw codes or serde data, are checked on the way in.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{EncodingError, Position, CELL_COUNT};
use crate::tiles::Tile;

/// A full board of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Layer {
    cells: Vec<Tile>,
}

impl Layer {
    /// A layer with every cell set to `tile`.
    #[must_use]
    pub fn filled(tile: Tile) -> Self {
        Self {
            cells: vec![tile; CELL_COUNT],
        }
    }

    /// Build a layer from raw tile codes in board index order.
    ///
    /// Exactly one code per cell is required.
    pub fn from_codes(codes: &[u8]) -> Result<Self, EncodingError> {
        if codes.len() != CELL_COUNT {
            return Err(EncodingError::WrongCellCount(codes.len()));
        }
        let cells = codes
            .iter()
            .map(|&code| Tile::from_ordinal(code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// Tile at `position`, or a wall off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Tile {
        if position.is_valid() {
            self.cells[position.index() as usize]
        } else {
            Tile::Wall
        }
    }

    /// Overwrite the tile at `position`.
    pub fn set(&mut self, position: Position, tile: Tile) {
        if position.is_valid() {
            self.cells[position.index() as usize] = tile;
        } else {
            warn!(?tile, "ignoring write to off-board position");
        }
    }

    /// Raw tile codes in board index order.
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|tile| tile.ordinal()).collect()
    }

    /// Every cell holding `tile`, in board index order.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == tile)
            .map(|(index, _)| Position::from_index(index as u16))
    }
}

impl TryFrom<Vec<Tile>> for Layer {
    type Error = EncodingError;

    fn try_from(cells: Vec<Tile>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(EncodingError::WrongCellCount(cells.len()));
        }
        Ok(Self { cells })
    }
}

impl From<Layer> for Vec<Tile> {
    fn from(layer: Layer) -> Self {
        layer.cells
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::filled(Tile::Floor)
    }
}
