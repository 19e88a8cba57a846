//! Configuration for rolling sessions.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::MechResult;
use crate::resolution::Difficulty;

/// Settings shared by every roll in a session.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// Difficulty used when a roll does not name one.
    pub default_difficulty: i32,
    /// RNG seed for reproducible rolls. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            default_difficulty: 10,
            seed: None,
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty.
    pub fn with_default_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Pick the difficulty for a roll, validating it.
    pub fn difficulty(&self, requested: Option<i32>) -> MechResult<Difficulty> {
        Difficulty::new(requested.unwrap_or(self.default_difficulty))
    }

    /// Build the random source for the session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
