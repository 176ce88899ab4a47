//! Movement rules for every actor on the board.
//!
//! The rules are written as methods on [`Level`](crate::level::Level), split
//! by concern:
//!
//! - `entry`: whether a tile may be left or entered, and what entering does
//! - `movement`: one step of one actor, plus slip-list bookkeeping
//! - `teleport`: where an actor leaving a portal comes out
//! - `turn`: trying candidate directions in order and settling buttons
//!
//! Nothing here keeps state of its own. Given the same level and the same
//! draws, a turn always has the same outcome.

pub mod entry;
pub mod movement;
pub mod teleport;
pub mod turn;

pub use entry::{can_enter, can_leave};
