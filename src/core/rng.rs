//! Deterministic die rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: the engine rolls through the `DieSource` trait, so
//!   tests can substitute a scripted sequence for the PRNG
//!
//! ## Usage
//!
//! ```
//! use pig_dice::core::{DiceRng, DieSource};
//!
//! let mut rng = DiceRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut rng2 = DiceRng::new(42);
//! assert_eq!(rng2.roll_die(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_SIDES: u8 = 6;

/// A source of die rolls.
///
/// The engine only ever asks for one thing: the next face of a
/// six-sided die. Production uses [`DiceRng`]; tests use [`ScriptedDie`]
/// when a property needs an exact roll sequence.
pub trait DieSource {
    /// Produce the next die face, in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

/// Deterministic PRNG-backed die.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed, same sequence of faces.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieSource for DiceRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_SIDES)
    }
}

/// Serializable die state for checkpointing a session.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A die that replays a fixed sequence of faces.
///
/// Intended for tests and demos that need exact outcomes. Panics if
/// rolled past the end of the script or if the script contains an
/// invalid face.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDie {
    /// Create a scripted die from a sequence of faces.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(
            faces.iter().all(|&f| (1..=DIE_SIDES).contains(&f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces, next: 0 }
    }

    /// How many scripted faces remain.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len() - self.next
    }
}

impl DieSource for ScriptedDie {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = DiceRng::new(7);
        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DiceRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = DiceRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let mut rng = DiceRng::new(42);
        rng.roll_die();

        let state = rng.state();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DiceRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_die_replays() {
        let mut die = ScriptedDie::new(vec![5, 6, 1]);

        assert_eq!(die.remaining(), 3);
        assert_eq!(die.roll_die(), 5);
        assert_eq!(die.roll_die(), 6);
        assert_eq!(die.roll_die(), 1);
        assert_eq!(die.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Scripted faces must be in 1..=6")]
    fn test_scripted_die_rejects_bad_face() {
        let _ = ScriptedDie::new(vec![3, 7]);
    }
}
