//! Core value types: positions, directions, RNG, configuration, errors.
//!
//! Everything here is independent of the tile rules and can be used on its
//! own, e.g. by a level loader or a replay verifier.

pub mod position;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Position, BOARD_SIZE, CELL_COUNT};
pub use direction::{Candidates, Direction, Turn};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedDraw, ScriptedRng};
pub use config::{EngineConfig, FaultPolicy};
pub use error::EncodingError;
