//! Random draws consumed by the rules.
//!
//! The engine never looks inside the generator. It only relies on the call
//! contract of [`RandomSource`]: which method is called, how often, and in what
//! order. Recorded play-throughs are verified by replaying inputs against the
//! exact same draw sequence, so an extra or missing call desynchronizes every
//! later decision.
//!
//! ## Implementations
//!
//! - [`GameRng`]: seeded ChaCha8 stream with O(1) checkpoints.
//! - [`ScriptedRng`]: replays an explicit queue of draws, for tests and for
//!   verifying a recorded draw log.
//!
//! ```
//! use chip_rules::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.random4(), b.random4());
//! assert_eq!(a.draws(), 1);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::direction::Turn;

/// The draw contract the rules depend on.
pub trait RandomSource {
    /// A uniform integer in `0..=3`.
    fn random4(&mut self) -> u8;

    /// Shuffle three turns in place. Counts as one draw.
    fn random_permutation3(&mut self, turns: &mut [Turn; 3]);

    /// Shuffle four turns in place. Counts as one draw.
    fn random_permutation4(&mut self, turns: &mut [Turn; 4]);

    /// Number of draws consumed so far.
    fn draws(&self) -> u64;
}

/// Deterministic generator backed by ChaCha8.
///
/// Permutations use successive swaps (`n = 2, 3[, 4]`) so the result depends
/// only on the seed and the number of prior draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn below(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            draws: self.draws,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            draws: state.draws,
        }
    }
}

impl RandomSource for GameRng {
    fn random4(&mut self) -> u8 {
        self.draws += 1;
        self.below(4) as u8
    }

    fn random_permutation3(&mut self, turns: &mut [Turn; 3]) {
        self.draws += 1;
        for last in 1..3 {
            let pick = self.below(last + 1);
            turns.swap(pick, last);
        }
    }

    fn random_permutation4(&mut self, turns: &mut [Turn; 4]) {
        self.draws += 1;
        for last in 1..4 {
            let pick = self.below(last + 1);
            turns.swap(pick, last);
        }
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}

/// Serializable RNG checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Draws consumed before the checkpoint
    pub draws: u64,
}

/// One recorded draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptedDraw {
    /// Result of a `random4` call.
    Random4(u8),
    /// Resulting order of a three-element permutation.
    Permutation3([Turn; 3]),
    /// Resulting order of a four-element permutation.
    Permutation4([Turn; 4]),
}

/// Replays a fixed queue of draws.
///
/// Panics when the rules ask for a draw of a different shape than the next one
/// queued, or when the queue runs dry: either means the replay has diverged.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    queue: VecDeque<ScriptedDraw>,
    draws: u64,
}

impl ScriptedRng {
    /// Create a scripted source from draws in call order.
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = ScriptedDraw>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
            draws: 0,
        }
    }

    /// Queue another draw at the end.
    pub fn push(&mut self, draw: ScriptedDraw) {
        self.queue.push_back(draw);
    }

    /// Draws still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn next(&mut self) -> ScriptedDraw {
        self.draws += 1;
        match self.queue.pop_front() {
            Some(draw) => draw,
            None => panic!("scripted RNG exhausted after {} draws", self.draws - 1),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn random4(&mut self) -> u8 {
        match self.next() {
            ScriptedDraw::Random4(value) => value & 0b11,
            other => panic!("replay diverged: expected random4, script has {other:?}"),
        }
    }

    fn random_permutation3(&mut self, turns: &mut [Turn; 3]) {
        match self.next() {
            ScriptedDraw::Permutation3(order) => *turns = order,
            other => panic!("replay diverged: expected permutation3, script has {other:?}"),
        }
    }

    fn random_permutation4(&mut self, turns: &mut [Turn; 4]) {
        match self.next() {
            ScriptedDraw::Permutation4(order) => *turns = order,
            other => panic!("replay diverged: expected permutation4, script has {other:?}"),
        }
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.random4(), rng2.random4());
        }
    }

    #[test]
    fn test_random4_range() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let value = rng.random4();
            assert!(value < 4);
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_permutation_keeps_elements() {
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            let mut turns = [Turn::Forward, Turn::Left, Turn::Around, Turn::Right];
            rng.random_permutation4(&mut turns);
            for t in [Turn::Forward, Turn::Left, Turn::Around, Turn::Right] {
                assert_eq!(turns.iter().filter(|&&x| x == t).count(), 1);
            }
        }
    }

    #[test]
    fn test_draw_counting() {
        let mut rng = GameRng::new(1);
        let mut three = [Turn::Left, Turn::Around, Turn::Right];
        let mut four = [Turn::Forward, Turn::Left, Turn::Around, Turn::Right];

        rng.random4();
        rng.random_permutation3(&mut three);
        rng.random_permutation4(&mut four);

        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.random4();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.random4()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.random4()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.draws(), 110);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            draws: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([
            ScriptedDraw::Random4(2),
            ScriptedDraw::Permutation3([Turn::Right, Turn::Left, Turn::Around]),
        ]);

        assert_eq!(rng.random4(), 2);
        let mut turns = [Turn::Left, Turn::Around, Turn::Right];
        rng.random_permutation3(&mut turns);
        assert_eq!(turns, [Turn::Right, Turn::Left, Turn::Around]);
        assert_eq!(rng.draws(), 2);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "replay diverged")]
    fn test_scripted_shape_mismatch() {
        let mut rng = ScriptedRng::new([ScriptedDraw::Random4(0)]);
        let mut turns = [Turn::Left, Turn::Around, Turn::Right];
        rng.random_permutation3(&mut turns);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_exhausted() {
        let mut rng = ScriptedRng::default();
        rng.random4();
    }
}
