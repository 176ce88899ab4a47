//! The turn driver: try candidates in order, then settle buttons and state.

use crate::core::{Direction, Position};
use crate::creatures::CreatureKind;
use crate::level::{ActorId, Button, ButtonKind, Level};
use crate::tiles::Tile;

impl Level {
    /// Give actor `id` one turn over `candidates`, best first.
    ///
    /// On the first successful move, buttons stepped on fire in reverse
    /// order, brown buttons left behind release their traps, and a monster
    /// that lands on the player kills it. If every candidate fails the
    /// actor's sliding state and facing are put back; a tank that could not
    /// move stops. A block left untracked afterwards gives up its slot.
    pub fn tick(&mut self, id: ActorId, candidates: &[Option<Direction>], sliding_move: bool) -> bool {
        let old = *self.actor(id);
        if !old.kind.is_chip() && !old.is_sliding() {
            self.monsters.direction = Some(old.direction);
        }

        for &candidate in candidates {
            let mut pressed = Vec::new();
            if self.try_move(id, candidate, sliding_move, &mut pressed) {
                for button in pressed.iter().rev() {
                    button.press(self);
                }
                self.release_traps_left_behind(old.position, self.actor(id).position);

                let actor = *self.actor(id);
                if !actor.kind.is_chip() {
                    if self.bg.get(actor.position).is_chip() {
                        self.kill_chip();
                    }
                    if !actor.is_sliding() {
                        self.monsters.direction = candidate;
                    }
                }
                if actor.kind.is_block() {
                    self.retire(id);
                }
                return true;
            }
            let actor = self.actor(id);
            if !actor.kind.is_chip() && !actor.is_sliding() {
                self.monsters.direction = candidate;
            }
        }

        let now_sliding = self.actor(id).sliding;
        self.set_sliding(id, now_sliding, old.sliding);

        let actor = *self.actor(id);
        if actor.kind.is_tank() && !actor.is_sliding() {
            self.actor_mut(id).kind = CreatureKind::TankStationary;
        }

        let actor = *self.actor(id);
        let block_on_random_floor =
            actor.kind.is_block() && self.bg.get(actor.position) == Tile::ForceRandom;
        if !actor.kind.is_chip() && !block_on_random_floor {
            self.actor_mut(id).direction = old.direction;
        } else {
            self.fg.set(actor.position, actor.to_tile());
        }
        if actor.kind.is_block() {
            self.retire(id);
        }
        false
    }

    /// Release brown buttons whose traps no longer hold anything after an
    /// actor moved from `from` to `to`.
    fn release_traps_left_behind(&mut self, from: Position, to: Position) {
        if self.fg.get(from) == Tile::ButtonBrown {
            if let Some(button) = self.button(from, ButtonKind::Brown) {
                let trap_elsewhere = button
                    .target
                    .is_some_and(|trap| self.bg.get(trap) != Tile::Trap && trap != to);
                if trap_elsewhere {
                    button.release(self);
                }
            }
        }
        if self.fg.get(from) == Tile::Trap {
            let wired: Vec<Button> = self
                .brown_buttons()
                .filter(|b| b.target == Some(from) && self.fg.get(b.position) == Tile::ButtonBrown)
                .collect();
            for button in wired {
                button.release(self);
            }
        }
    }

    /// One turn of `id` choosing its own direction.
    pub fn tick_actor(&mut self, id: ActorId) -> bool {
        let candidates = self.direction_priority(id);
        self.tick(id, &candidates, false)
    }

    /// One slide step of `id` carried by the surface beneath it.
    pub fn slide_actor(&mut self, id: ActorId) -> bool {
        let candidates = self.slide_direction_priority(id, true);
        self.tick(id, &candidates, true)
    }

    /// One player step in `direction`.
    ///
    /// Does nothing without a player.
    pub fn move_chip(&mut self, direction: Direction) -> bool {
        match self.chip() {
            Some(chip) if !self.actor(chip).is_dead() => self.tick(chip, &[Some(direction)], false),
            _ => false,
        }
    }
}
