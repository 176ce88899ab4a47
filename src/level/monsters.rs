//! The ordered list of monsters processed each tick.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

use super::actor::ActorId;

/// Monsters in processing order, plus per-tick bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterList {
    order: Vec<ActorId>,
    /// Monsters that died while moving.
    pub dead_count: u32,
    /// Direction most recently committed or attempted by a non-sliding
    /// monster. Kept for callers that save or inspect the level state.
    pub direction: Option<Direction>,
}

impl MonsterList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a monster to the processing order.
    pub fn push(&mut self, actor: ActorId) {
        self.order.push(actor);
    }

    /// Monsters in processing order.
    pub fn iter(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.order.iter().copied()
    }

    /// Whether `actor` is listed.
    #[must_use]
    pub fn contains(&self, actor: ActorId) -> bool {
        self.order.contains(&actor)
    }

    /// Number of listed monsters, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no monster is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
