//! Deterministic random number generation for enemy-attack dodge rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Value-like**: Cloning captures the exact stream position, so a
//!   `BattleState` clone replays the same rolls
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use plushie_battle::core::BattleRng;
//!
//! let mut rng = BattleRng::new(42);
//! let roll = rng.roll_percent();
//! assert!((0.0..100.0).contains(&roll));
//!
//! // Same seed, same rolls
//! let mut again = BattleRng::new(42);
//! assert_eq!(roll, again.roll_percent());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG carried inside the battle state.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms. The resolver threads it through every enemy attack so the
/// reducer stays a pure function of `(state, action)`.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll a uniform value in `[0, 100)`.
    ///
    /// Compared against a dodge chance percentage: a roll strictly below
    /// the chance negates the attack.
    pub fn roll_percent(&mut self) -> f64 {
        self.inner.gen_range(0.0..100.0)
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl PartialEq for BattleRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for BattleRng {}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
