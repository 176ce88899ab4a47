//! Teleport exit search.
//!
//! Portals are scanned backwards from the one entered, wrapping around the
//! list, until one offers a usable exit. If none does, the scan ends back on
//! the entry portal and the actor stays there, still sliding.

use tracing::{debug, trace};

use crate::core::{Direction, Position};
use crate::creatures::{Creature, CreatureKind};
use crate::level::{ActorId, Button, Level};
use crate::tiles::Tile;

use super::entry::{can_enter, can_leave};

impl Level {
    /// Move `position` from the entered portal to the portal the actor
    /// exits from.
    pub(crate) fn teleport(
        &mut self,
        id: ActorId,
        direction: Direction,
        position: &mut Position,
        pressed: &mut Vec<Button>,
    ) {
        let entry = *position;
        let Some(start) = self.portals().iter().position(|&p| p == entry) else {
            trace!(position = %entry, "teleport not registered as a portal");
            return;
        };
        let count = self.portals().len();
        let kind = self.actor(id).kind;

        let mut i = start;
        loop {
            i = if i == 0 { count - 1 } else { i - 1 };
            *position = self.portals()[i];
            if self.portal_exit_usable(kind, direction, *position, pressed) || i == start {
                break;
            }
        }
        debug!(actor = %id, from = %entry, to = %position, "teleported");
    }

    /// Whether an actor of `kind` leaving `portal` heading `direction` gets
    /// out. When the player's exit is blocked by a block, pushing that block
    /// is attempted here and counts as getting out if it moves.
    fn portal_exit_usable(
        &mut self,
        kind: CreatureKind,
        direction: Direction,
        portal: Position,
        pressed: &mut Vec<Button>,
    ) -> bool {
        if self.fg.get(portal) != Tile::Teleport {
            return false;
        }
        let exit = portal.moved(direction);
        if !exit.is_valid() {
            return false;
        }

        let mut exit_tile = self.fg.get(exit);
        if !kind.is_chip() && exit_tile.is_chip() {
            exit_tile = self.bg.get(exit);
        }
        if kind.is_chip() && exit_tile.is_transparent() {
            exit_tile = self.bg.get(exit);
        }

        if kind.is_chip() && exit_tile == Tile::Block {
            return self.push_block_out_of_exit(kind, direction, exit, pressed);
        }
        can_enter(kind, direction, exit_tile, self)
    }

    /// Push the block sitting on a portal exit one cell further.
    ///
    /// Returns `false` without pushing if the push would leave the board.
    fn push_block_out_of_exit(
        &mut self,
        kind: CreatureKind,
        direction: Direction,
        exit: Position,
        pressed: &mut Vec<Button>,
    ) -> bool {
        let block = match self.sliding_actor_at(exit) {
            Some(block) => block,
            None => self.spawn(Creature::new(direction, CreatureKind::Block, exit)),
        };

        let beneath = self.bg.get(exit);
        let mut moved = false;
        if can_enter(kind, direction, beneath, self) && can_leave(direction, beneath, exit, self) {
            let beyond = exit.moved(direction);
            if !beyond.is_valid() {
                self.retire(block);
                return false;
            }
            if can_enter(CreatureKind::Block, direction, self.fg.get(beyond), self) {
                moved = self.try_move(block, Some(direction), false, pressed);
            }
        }
        if !moved {
            moved = self.try_move(block, Some(direction), false, pressed);
        }

        self.retire(block);
        moved
    }
}
