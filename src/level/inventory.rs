//! Keys and boots held by the player.

use serde::{Deserialize, Serialize};

/// Door and key colours, in board-code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyColor {
    Blue,
    Red,
    Green,
    Yellow,
}

/// Boot kinds, in board-code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boot {
    /// Walk through water.
    Water,
    /// Walk through fire.
    Fire,
    /// Walk on ice without sliding.
    Ice,
    /// Walk on force floors without sliding.
    Slide,
}

/// Key counters and boot flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    keys: [u16; 4],
    boots: [bool; 4],
}

impl Inventory {
    /// Empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys held of `color`.
    #[must_use]
    pub fn keys(&self, color: KeyColor) -> u16 {
        self.keys[color as usize]
    }

    /// Whether at least one key of `color` is held.
    #[must_use]
    pub fn has_key(&self, color: KeyColor) -> bool {
        self.keys(color) > 0
    }

    /// Pick up one key.
    pub fn add_key(&mut self, color: KeyColor) {
        self.keys[color as usize] = self.keys[color as usize].saturating_add(1);
    }

    /// Spend one key. Returns false if none was held.
    pub fn use_key(&mut self, color: KeyColor) -> bool {
        let count = &mut self.keys[color as usize];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Set a key counter directly, e.g. from a saved game.
    pub fn set_keys(&mut self, color: KeyColor, count: u16) {
        self.keys[color as usize] = count;
    }

    /// Whether `boot` is held.
    #[must_use]
    pub fn has_boots(&self, boot: Boot) -> bool {
        self.boots[boot as usize]
    }

    /// Pick up `boot`.
    pub fn give_boots(&mut self, boot: Boot) {
        self.boots[boot as usize] = true;
    }

    /// Drop every pair of boots.
    pub fn clear_boots(&mut self) {
        self.boots = [false; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let mut inv = Inventory::new();
        assert!(!inv.has_key(KeyColor::Red));
        assert!(!inv.use_key(KeyColor::Red));

        inv.add_key(KeyColor::Red);
        inv.add_key(KeyColor::Red);
        assert_eq!(inv.keys(KeyColor::Red), 2);
        assert_eq!(inv.keys(KeyColor::Blue), 0);

        assert!(inv.use_key(KeyColor::Red));
        assert_eq!(inv.keys(KeyColor::Red), 1);
    }

    #[test]
    fn test_boots() {
        let mut inv = Inventory::new();
        inv.give_boots(Boot::Fire);
        inv.give_boots(Boot::Slide);
        assert!(inv.has_boots(Boot::Fire));
        assert!(!inv.has_boots(Boot::Water));

        inv.clear_boots();
        assert!(!inv.has_boots(Boot::Fire));
        assert!(!inv.has_boots(Boot::Slide));
    }
}
