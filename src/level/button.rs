//! Floor buttons and what they are wired to.
//!
//! | Kind  | Target           | Press                         | Release     |
//! |-------|------------------|-------------------------------|-------------|
//! | Green | none             | flip every toggle door        | nothing     |
//! | Blue  | none             | reverse every tank            | nothing     |
//! | Red   | clone machine    | clone what stands on it       | nothing     |
//! | Brown | trap             | open the trap                 | close it    |
//!
//! Green and blue buttons act on the whole board, so an unwired one still
//! works. Red and brown buttons do nothing unless wired.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Position;
use crate::tiles::Tile;

use super::level::Level;

/// Button colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    Green,
    Red,
    Brown,
    Blue,
}

impl ButtonKind {
    /// The kind of button a tile depicts.
    #[must_use]
    pub fn of_tile(tile: Tile) -> Option<Self> {
        match tile {
            Tile::ButtonGreen => Some(ButtonKind::Green),
            Tile::ButtonRed => Some(ButtonKind::Red),
            Tile::ButtonBrown => Some(ButtonKind::Brown),
            Tile::ButtonBlue => Some(ButtonKind::Blue),
            _ => None,
        }
    }
}

/// One button on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Colour.
    pub kind: ButtonKind,
    /// Cell the button sits on.
    pub position: Position,
    /// Wired clone machine or trap.
    pub target: Option<Position>,
}

impl Button {
    /// A button acting on the whole board.
    #[must_use]
    pub fn global(kind: ButtonKind, position: Position) -> Self {
        Self {
            kind,
            position,
            target: None,
        }
    }

    /// A button wired to `target`.
    #[must_use]
    pub fn wired(kind: ButtonKind, position: Position, target: Position) -> Self {
        Self {
            kind,
            position,
            target: Some(target),
        }
    }

    /// Apply the press effect.
    pub fn press(&self, level: &mut Level) {
        trace!(kind = ?self.kind, position = %self.position, "button pressed");
        match (self.kind, self.target) {
            (ButtonKind::Green, _) => level.flip_toggle_doors(),
            (ButtonKind::Blue, _) => level.reverse_tanks(),
            (ButtonKind::Red, Some(machine)) => level.clone_from_machine(machine),
            (ButtonKind::Brown, Some(trap)) => level.open_trap(trap),
            (ButtonKind::Red | ButtonKind::Brown, None) => {}
        }
    }

    /// Apply the release effect.
    pub fn release(&self, level: &mut Level) {
        if let (ButtonKind::Brown, Some(trap)) = (self.kind, self.target) {
            trace!(position = %self.position, trap = %trap, "brown button released");
            level.close_trap(trap);
        }
    }
}
