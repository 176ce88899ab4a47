//! The closed set of board tiles.
//!
//! Every rule function matches exhaustively over [`Tile`], so adding a
//! variant is a compile error until each rule classifies it.

pub mod tile;

pub use tile::{Tile, TILE_COUNT};
pub(crate) use tile::monster_tiles;
