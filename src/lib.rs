//! # chip-rules
//!
//! A deterministic rules engine for the classic tile-grid puzzle ruleset,
//! built for replaying and verifying recorded play-throughs.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random choice goes through one
//!    [`RandomSource`] owned by the level. Same level, same seed, same
//!    inputs: same board, same draw count.
//!
//! 2. **Closed Tile Set**: [`Tile`] is a closed enum and the entry rules
//!    match on it exhaustively. A new tile does not compile until every
//!    rule says what it does.
//!
//! 3. **Handles Over References**: Actors live in one arena inside
//!    [`Level`] and are addressed by [`ActorId`]. The slip list, the monster
//!    list and the player slot all hold handles.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration, errors
//! - `tiles`: The tile enum and its classification predicates
//! - `creatures`: Actor kinds, the actor record, direction selection
//! - `level`: Layers, actor arena, inventory, slip and monster lists, wiring
//! - `rules`: Entry rules, single moves, teleports, turns
//!
//! ## Example
//!
//! ```
//! use chip_rules::{Creature, CreatureKind, Direction, EngineConfig, Level, Position, Tile};
//!
//! let mut level = Level::new(&EngineConfig::default().with_seed(7));
//! level.fg.set(Position::new(3, 2), Tile::Water);
//! let chip = level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, Position::new(3, 3)));
//!
//! assert!(level.move_chip(Direction::Up));
//! assert!(level.actor(chip).is_dead());
//! assert_eq!(level.fg.get(Position::new(3, 2)), Tile::DrownedChip);
//! ```

pub mod core;
pub mod tiles;
pub mod creatures;
pub mod level;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Candidates, Direction, Turn, Position, BOARD_SIZE, CELL_COUNT,
    GameRng, GameRngState, RandomSource, ScriptedDraw, ScriptedRng,
    EngineConfig, FaultPolicy, EncodingError,
};

pub use crate::tiles::{Tile, TILE_COUNT};

pub use crate::creatures::{Creature, CreatureKind};

pub use crate::level::{
    ActorId, Layer, Level, Inventory, KeyColor, Boot,
    SlipList, MonsterList, Button, ButtonKind,
};

pub use crate::rules::{can_enter, can_leave};
