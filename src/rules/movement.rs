//! One directional move attempt and the sliding bookkeeping around it.
//!
//! ## Pipeline
//!
//! ```text
//!   leave check (bg under the mover)
//!     -> effective destination tile (player shadow, see-through remnants)
//!     -> try_enter
//!     -> commit: pop old cell, move, redirect if sliding, draw new cell
//!     -> slip-list membership
//! ```
//!
//! A failed attempt still settles slip-list membership, and a mover that
//! was sliding gets its facing redirected by the surface it is stuck on.

use tracing::error;

use crate::core::{Direction, FaultPolicy};
use crate::creatures::{apply_sliding_tile, CreatureKind};
use crate::level::{ActorId, Button, Level};
use crate::tiles::Tile;

use super::entry::{can_enter, can_leave};

impl Level {
    /// Try to move actor `id` one cell in `direction`.
    ///
    /// `sliding_move` marks a step driven by the slip list rather than by
    /// the actor's own choice. Buttons stepped on are appended to `pressed`.
    pub fn try_move(
        &mut self,
        id: ActorId,
        direction: Option<Direction>,
        sliding_move: bool,
        pressed: &mut Vec<Button>,
    ) -> bool {
        let Some(direction) = direction else {
            return false;
        };
        let actor = self.actor_mut(id);
        let old_direction = actor.direction;
        let was_sliding = actor.sliding;
        let is_monster = actor.kind.is_monster();
        let kind = actor.kind;
        let position = actor.position;
        actor.direction = direction;

        let mut new_position = position.moved(direction);

        if !can_leave(direction, self.bg.get(position), position, self) {
            return false;
        }

        let mut tile = self.fg.get(new_position);
        if !kind.is_chip() && tile.is_chip() {
            tile = self.bg.get(new_position);
        }
        let covers_solid =
            tile.is_transparent() && !can_enter(kind, direction, self.bg.get(new_position), self);

        if !covers_solid && self.try_enter(id, direction, &mut new_position, tile, pressed) {
            self.pop_tile(position);
            self.actor_mut(id).position = new_position;

            let actor = *self.actor(id);
            if actor.sliding && !actor.kind.is_monster() {
                let surface = self.fg.get(new_position);
                let redirected = apply_sliding_tile(direction, surface, self.rng.as_mut());
                self.actor_mut(id).direction = redirected;
            }

            let actor = *self.actor(id);
            if !actor.is_dead() {
                self.insert_tile(new_position, actor.to_tile());
            } else if is_monster {
                self.monsters.dead_count += 1;
            }

            self.set_sliding(id, was_sliding, actor.sliding);
            return true;
        }

        let now_sliding = self.actor(id).sliding;
        self.set_sliding(id, was_sliding, now_sliding);

        let actor = *self.actor(id);
        if was_sliding && !actor.kind.is_monster() {
            let surface = self.bg.get(actor.position);
            let facing = if surface == Tile::ForceRandom && !sliding_move {
                old_direction
            } else {
                apply_sliding_tile(direction, surface, self.rng.as_mut())
            };
            self.actor_mut(id).direction = facing;
        }
        false
    }

    /// Settle slip-list membership after the sliding flag went from `was`
    /// to `is`.
    ///
    /// The player has no slip-list entry; its kind switches between
    /// [`CreatureKind::Chip`] and [`CreatureKind::ChipSliding`] instead. A
    /// block that was sliding and now rests on a trap is requeued at the
    /// back of the slip list and stays sliding.
    pub fn set_sliding(&mut self, id: ActorId, was: bool, is: bool) {
        let actor = *self.actor(id);

        if was && !is {
            if !actor.is_dead() && actor.kind.is_chip() {
                self.actor_mut(id).kind = CreatureKind::Chip;
            } else {
                self.slip_list.remove(id);
            }
        } else if !was && is {
            if actor.kind.is_chip() {
                self.actor_mut(id).kind = CreatureKind::ChipSliding;
            } else if self.slip_list.contains(id) {
                error!(actor = %id, creature = %actor, "actor added to slip list twice");
                if self.config().slip_fault == FaultPolicy::Panic {
                    panic!("{id} added to slip list twice");
                }
            } else {
                self.slip_list.push(id);
            }
        }

        if actor.kind.is_block() && was && self.bg.get(actor.position) == Tile::Trap {
            self.slip_list.remove(id);
            self.slip_list.push(id);
            self.actor_mut(id).sliding = true;
            return;
        }
        self.actor_mut(id).sliding = is;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, Position, RandomSource, ScriptedDraw, ScriptedRng};
    use crate::creatures::Creature;

    fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_none_direction_fails_without_effect() {
        let mut level = Level::default();
        let bug = level.place_monster(Creature::new(Direction::Up, CreatureKind::Bug, at(3, 3)));
        assert!(!level.try_move(bug, None, false, &mut Vec::new()));
        assert_eq!(level.actor(bug).direction, Direction::Up);
    }

    #[test]
    fn test_move_onto_floor() {
        let mut level = Level::default();
        let bug = level.place_monster(Creature::new(Direction::Up, CreatureKind::Bug, at(3, 3)));
        assert!(level.try_move(bug, Some(Direction::Right), false, &mut Vec::new()));

        assert_eq!(level.actor(bug).position, at(4, 3));
        assert_eq!(level.actor(bug).direction, Direction::Right);
        assert_eq!(level.fg.get(at(3, 3)), Tile::Floor);
        assert_eq!(level.fg.get(at(4, 3)), Tile::BugRight);
    }

    #[test]
    fn test_failed_leave_keeps_new_facing() {
        let mut level = Level::default();
        level.fg.set(at(3, 3), Tile::ThinWallUp);
        let glider = level.place_monster(Creature::new(Direction::Left, CreatureKind::Glider, at(3, 3)));

        assert!(!level.try_move(glider, Some(Direction::Up), false, &mut Vec::new()));
        assert_eq!(level.actor(glider).position, at(3, 3));
        assert_eq!(level.actor(glider).direction, Direction::Up);
    }

    #[test]
    fn test_monster_sees_through_player_tile() {
        let mut level = Level::default();
        level.fg.set(at(4, 3), Tile::Wall);
        level.place_chip(Creature::new(Direction::Up, CreatureKind::Chip, at(4, 3)));
        let bug = level.place_monster(Creature::new(Direction::Right, CreatureKind::Bug, at(3, 3)));

        // The wall under the player is what the bug runs into.
        assert!(!level.try_move(bug, Some(Direction::Right), false, &mut Vec::new()));
        assert_eq!(level.actor(bug).position, at(3, 3));
    }

    #[test]
    fn test_remnant_over_solid_cell_blocks() {
        let mut level = Level::default();
        level.bg.set(at(4, 3), Tile::Wall);
        level.fg.set(at(4, 3), Tile::ExitedChip);
        let chip = level.place_chip(Creature::new(Direction::Right, CreatureKind::Chip, at(3, 3)));

        assert!(!level.try_move(chip, Some(Direction::Right), false, &mut Vec::new()));
        assert_eq!(level.actor(chip).position, at(3, 3));
        assert_eq!(level.fg.get(at(4, 3)), Tile::ExitedChip);
    }

    #[test]
    fn test_monster_dying_counts() {
        let mut level = Level::default();
        level.fg.set(at(4, 3), Tile::Water);
        let bug = level.place_monster(Creature::new(Direction::Right, CreatureKind::Bug, at(3, 3)));

        assert!(level.try_move(bug, Some(Direction::Right), false, &mut Vec::new()));
        assert!(level.actor(bug).is_dead());
        assert_eq!(level.monsters.dead_count, 1);
        assert_eq!(level.fg.get(at(4, 3)), Tile::Water);
        assert_eq!(level.fg.get(at(3, 3)), Tile::Floor);
    }

    #[test]
    fn test_stepping_onto_ice_joins_slip_list() {
        let mut level = Level::default();
        level.fg.set(at(4, 3), Tile::Ice);
        let glider = level.place_monster(Creature::new(Direction::Right, CreatureKind::Glider, at(3, 3)));

        assert!(level.try_move(glider, Some(Direction::Right), false, &mut Vec::new()));
        assert!(level.actor(glider).sliding);
        assert!(level.slip_list.contains(glider));
        assert_eq!(level.bg.get(at(4, 3)), Tile::Ice);

        assert!(level.try_move(glider, Some(Direction::Right), true, &mut Vec::new()));
        assert!(!level.actor(glider).sliding);
        assert!(!level.slip_list.contains(glider));
    }

    #[test]
    fn test_player_sliding_uses_kind() {
        let mut level = Level::default();
        level.fg.set(at(3, 2), Tile::ForceLeft);
        let chip = level.place_chip(Creature::new(Direction::Up, CreatureKind::Chip, at(3, 3)));

        assert!(level.try_move(chip, Some(Direction::Up), false, &mut Vec::new()));
        let actor = *level.actor(chip);
        assert_eq!(actor.kind, CreatureKind::ChipSliding);
        assert_eq!(actor.direction, Direction::Left);
        assert!(level.slip_list.is_empty());
        assert_eq!(level.fg.get(at(3, 2)), Tile::ChipLeft);
    }

    #[test]
    fn test_random_force_floor_draws_on_arrival() {
        let rng = ScriptedRng::new([ScriptedDraw::Random4(3)]);
        let mut level = Level::with_rng(&EngineConfig::default(), Box::new(rng));
        level.fg.set(at(3, 2), Tile::ForceRandom);
        let chip = level.place_chip(Creature::new(Direction::Up, CreatureKind::Chip, at(3, 3)));

        assert!(level.try_move(chip, Some(Direction::Up), false, &mut Vec::new()));
        assert_eq!(level.actor(chip).direction, Direction::Right);
        assert_eq!(level.rng.draws(), 1);
    }

    #[test]
    fn test_stuck_slider_keeps_facing_on_random_floor_step() {
        let mut level = Level::default();
        level.fg.set(at(3, 2), Tile::Wall);
        level.fg.set(at(3, 3), Tile::ForceRandom);
        let chip = level.place_chip(Creature::new(Direction::Left, CreatureKind::ChipSliding, at(3, 3)));

        assert!(!level.try_move(chip, Some(Direction::Up), false, &mut Vec::new()));
        assert_eq!(level.actor(chip).direction, Direction::Left);
        assert_eq!(level.rng.draws(), 0);
    }

    #[test]
    fn test_set_sliding_transitions() {
        let mut level = Level::default();
        let glider = level.spawn(Creature::new(Direction::Up, CreatureKind::Glider, at(1, 1)));

        level.set_sliding(glider, false, true);
        assert!(level.slip_list.contains(glider));
        assert!(level.actor(glider).sliding);

        level.set_sliding(glider, true, false);
        assert!(!level.slip_list.contains(glider));
        assert!(!level.actor(glider).sliding);
    }

    #[test]
    fn test_double_insertion_is_logged_and_ignored() {
        let mut level = Level::default();
        let glider = level.spawn(Creature::new(Direction::Up, CreatureKind::Glider, at(1, 1)));
        level.slip_list.push(glider);

        level.set_sliding(glider, false, true);
        assert_eq!(level.slip_list.len(), 1);
    }

    #[test]
    #[should_panic(expected = "added to slip list twice")]
    fn test_double_insertion_panics_when_configured() {
        let config = EngineConfig::default().with_slip_fault(FaultPolicy::Panic);
        let mut level = Level::new(&config);
        let glider = level.spawn(Creature::new(Direction::Up, CreatureKind::Glider, at(1, 1)));
        level.slip_list.push(glider);

        level.set_sliding(glider, false, true);
    }

    #[test]
    fn test_block_on_trap_is_requeued() {
        let mut level = Level::default();
        level.bg.set(at(2, 2), Tile::Trap);
        let block = level.spawn(Creature::new(Direction::Up, CreatureKind::Block, at(2, 2)));
        let other = level.spawn(Creature::new(Direction::Up, CreatureKind::Glider, at(5, 5)));
        level.slip_list.push(block);
        level.slip_list.push(other);

        level.set_sliding(block, true, false);
        assert_eq!(level.slip_list.as_slice(), &[other, block]);
        assert!(level.actor(block).sliding);
    }
}
