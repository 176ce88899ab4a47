//! Creature kinds.
//!
//! The discriminant doubles as the 4-bit kind field of the persisted
//! encoding and as the tile group index (`0x40 + 4 * code`) for monsters and
//! the player.

use serde::{Deserialize, Serialize};

use crate::core::EncodingError;

/// The closed set of actor kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CreatureKind {
    Bug = 0,
    Fireball = 1,
    PinkBall = 2,
    /// A tank that keeps driving in its facing.
    TankMoving = 3,
    Glider = 4,
    Teeth = 5,
    Walker = 6,
    Blob = 7,
    Paramecium = 8,
    /// A tank that failed to move and waits for a blue button.
    /// Only exists at runtime; storage collapses it to `TankMoving`.
    TankStationary = 9,
    Block = 10,
    Chip = 11,
    /// The player while a sliding surface controls it.
    ChipSliding = 12,
    /// Terminal: a dead actor never acts again.
    Dead = 15,
}

impl CreatureKind {
    /// Decode the 4-bit kind field.
    pub fn from_code(code: u8) -> Result<Self, EncodingError> {
        use CreatureKind::*;
        Ok(match code {
            0 => Bug,
            1 => Fireball,
            2 => PinkBall,
            3 => TankMoving,
            4 => Glider,
            5 => Teeth,
            6 => Walker,
            7 => Blob,
            8 => Paramecium,
            9 => TankStationary,
            10 => Block,
            11 => Chip,
            12 => ChipSliding,
            15 => Dead,
            other => return Err(EncodingError::UnknownCreatureKind(other)),
        })
    }

    /// The 4-bit kind field.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Code shifted into bits 13:10 of the creature encoding.
    #[must_use]
    pub const fn bits(self) -> u16 {
        (self as u16) << 10
    }

    /// The player, sliding or not.
    #[must_use]
    pub const fn is_chip(self) -> bool {
        matches!(self, CreatureKind::Chip | CreatureKind::ChipSliding)
    }

    /// Any of the monster kinds, including a stopped tank.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        (self as u8) <= CreatureKind::TankStationary as u8
    }

    /// The pushable block.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, CreatureKind::Block)
    }

    /// Either tank state.
    #[must_use]
    pub const fn is_tank(self) -> bool {
        matches!(self, CreatureKind::TankMoving | CreatureKind::TankStationary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in (0..=12).chain([15]) {
            assert_eq!(CreatureKind::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_unassigned_codes() {
        assert_eq!(
            CreatureKind::from_code(13),
            Err(EncodingError::UnknownCreatureKind(13))
        );
        assert!(CreatureKind::from_code(14).is_err());
        assert!(CreatureKind::from_code(16).is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(CreatureKind::Chip.is_chip());
        assert!(CreatureKind::ChipSliding.is_chip());
        assert!(!CreatureKind::Dead.is_chip());

        assert!(CreatureKind::Bug.is_monster());
        assert!(CreatureKind::TankStationary.is_monster());
        assert!(!CreatureKind::Block.is_monster());
        assert!(!CreatureKind::Chip.is_monster());
        assert!(!CreatureKind::Dead.is_monster());

        assert!(CreatureKind::Block.is_block());
        assert!(CreatureKind::TankMoving.is_tank());
        assert!(CreatureKind::TankStationary.is_tank());
        assert!(!CreatureKind::Glider.is_tank());
    }
}
