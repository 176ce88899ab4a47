//! Registry of non-player actors currently carried by a sliding surface.
//!
//! Order matters: slide steps are resolved front to back, and a block
//! held on a trap is moved to the back each time it is re-examined.

use serde::{Deserialize, Serialize};

use super::actor::ActorId;

/// Ordered set of sliding actors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipList {
    order: Vec<ActorId>,
}

impl SlipList {
    /// Create an empty slip list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the back.
    pub fn push(&mut self, actor: ActorId) {
        self.order.push(actor);
    }

    /// Whether `actor` is present.
    #[must_use]
    pub fn contains(&self, actor: ActorId) -> bool {
        self.order.contains(&actor)
    }

    /// Remove `actor`, keeping the order of the rest.
    ///
    /// Returns whether it was present.
    pub fn remove(&mut self, actor: ActorId) -> bool {
        match self.order.iter().position(|&a| a == actor) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Members front to back.
    pub fn iter(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.order.iter().copied()
    }

    /// Members front to back, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ActorId] {
        &self.order
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is sliding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_contains_remove() {
        let mut list = SlipList::new();
        list.push(ActorId(4));
        list.push(ActorId(1));
        list.push(ActorId(9));

        assert!(list.contains(ActorId(1)));
        assert!(list.remove(ActorId(1)));
        assert!(!list.contains(ActorId(1)));
        assert!(!list.remove(ActorId(1)));
        assert_eq!(list.as_slice(), &[ActorId(4), ActorId(9)]);
    }

    #[test]
    fn test_requeue_moves_to_back() {
        let mut list = SlipList::new();
        list.push(ActorId(0));
        list.push(ActorId(1));

        list.remove(ActorId(0));
        list.push(ActorId(0));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![ActorId(1), ActorId(0)]);
        assert_eq!(list.len(), 2);
    }
}
