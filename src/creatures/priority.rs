//! Direction selection: which ways an actor tries, in order.
//!
//! Both selectors honour the scripted direction slot first. Only the
//! walker and blob draw from the RNG during normal selection, and they keep
//! drawing even when a scripted direction overrides them, so a replay stays
//! in step with the recorded stream.

use smallvec::smallvec;

use crate::core::{Candidates, Direction, Position, RandomSource, Turn};
use crate::tiles::Tile;

use super::creature::Creature;
use super::kind::CreatureKind;

impl Creature {
    /// Candidate directions for this actor's own move, best first.
    ///
    /// `chip_position` is only read by teeth, which chase the player.
    pub fn direction_priority(
        &mut self,
        chip_position: Position,
        rng: &mut dyn RandomSource,
    ) -> Candidates {
        if let Some(scripted) = self.take_scripted_direction() {
            if matches!(self.kind, CreatureKind::Walker | CreatureKind::Blob) {
                rng.random4();
            }
            return smallvec![Some(scripted)];
        }
        if self.is_sliding() {
            return self.direction.turn_all(&[Turn::Forward, Turn::Around]);
        }

        let facing = self.direction;
        match self.kind {
            CreatureKind::Bug => {
                facing.turn_all(&[Turn::Left, Turn::Forward, Turn::Right, Turn::Around])
            }
            CreatureKind::Fireball => {
                facing.turn_all(&[Turn::Forward, Turn::Right, Turn::Left, Turn::Around])
            }
            CreatureKind::PinkBall => facing.turn_all(&[Turn::Forward, Turn::Around]),
            CreatureKind::Glider => {
                facing.turn_all(&[Turn::Forward, Turn::Left, Turn::Right, Turn::Around])
            }
            CreatureKind::Teeth => self.position.seek(chip_position).into_iter().collect(),
            CreatureKind::Walker => {
                let mut turns = [Turn::Left, Turn::Around, Turn::Right];
                rng.random_permutation3(&mut turns);
                facing.turn_all(&[Turn::Forward, turns[0], turns[1], turns[2]])
            }
            CreatureKind::Blob => {
                let mut turns = [Turn::Forward, Turn::Left, Turn::Around, Turn::Right];
                rng.random_permutation4(&mut turns);
                facing.turn_all(&turns)
            }
            CreatureKind::Paramecium => {
                facing.turn_all(&[Turn::Right, Turn::Forward, Turn::Left, Turn::Around])
            }
            CreatureKind::TankMoving => smallvec![Some(facing)],
            CreatureKind::TankStationary
            | CreatureKind::Block
            | CreatureKind::Chip
            | CreatureKind::ChipSliding
            | CreatureKind::Dead => Candidates::new(),
        }
    }

    /// Candidate directions while a sliding surface carries this actor.
    ///
    /// `tile` is the surface under the actor. With `change_on_random_floor`
    /// unset, a random force floor keeps the current facing instead of
    /// drawing a new one.
    pub fn slide_direction_priority(
        &mut self,
        tile: Tile,
        rng: &mut dyn RandomSource,
        change_on_random_floor: bool,
    ) -> Candidates {
        if let Some(scripted) = self.take_scripted_direction() {
            return smallvec![Some(scripted)];
        }

        let facing = self.direction;
        if tile.is_ice() || (self.kind.is_chip() && tile == Tile::Teleport) {
            let forward = apply_sliding_tile(facing, tile, rng);
            let back = apply_sliding_tile(facing.turn(Turn::Around), tile, rng);
            smallvec![Some(forward), Some(back)]
        } else if tile == Tile::Teleport || (tile == Tile::ForceRandom && !change_on_random_floor) {
            smallvec![Some(facing)]
        } else {
            smallvec![Some(apply_sliding_tile(facing, tile, rng))]
        }
    }
}

/// Redirect `direction` by the sliding surface `tile`.
///
/// Force floors push their own way, the random one draws once. Ice corners
/// deflect the two directions that run into their walls. Anything else
/// leaves the direction alone.
pub fn apply_sliding_tile(direction: Direction, tile: Tile, rng: &mut dyn RandomSource) -> Direction {
    use Direction::*;
    match tile {
        Tile::ForceDown => Down,
        Tile::ForceUp => Up,
        Tile::ForceRight => Right,
        Tile::ForceLeft => Left,
        Tile::ForceRandom => Direction::from_ordinal(rng.random4()),
        Tile::IceSouthEast => match direction {
            Up => Right,
            Left => Down,
            other => other,
        },
        Tile::IceNorthEast => match direction {
            Down => Right,
            Left => Up,
            other => other,
        },
        Tile::IceNorthWest => match direction {
            Down => Left,
            Right => Up,
            other => other,
        },
        Tile::IceSouthWest => match direction {
            Up => Left,
            Right => Down,
            other => other,
        },
        _ => direction,
    }
}
