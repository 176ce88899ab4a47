//! Actors: kinds, the per-actor record and direction selection.

pub mod kind;
pub mod creature;
pub mod priority;

pub use kind::CreatureKind;
pub use creature::Creature;
pub use priority::apply_sliding_tile;
