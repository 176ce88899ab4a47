//! Actor handles.
//!
//! The level owns every [`Creature`](crate::creatures::Creature) in one arena.
//! Lists that refer to actors (slip list, monster list, the player slot)
//! hold an `ActorId` into that arena instead of a reference.
//!
//! ```
//! use chip_rules::level::ActorId;
//!
//! let id = ActorId(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(format!("{id}"), "Actor(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Index of an actor in the level's arena.
///
/// Handles to placed actors stay valid for the life of the level: dead
/// actors keep their slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Arena slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}
