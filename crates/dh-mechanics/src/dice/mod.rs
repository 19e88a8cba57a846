//! Dice types and random sources.
//!
//! A duality roll only ever uses two kinds of die: the twelve-sided Hope and
//! Fear dice, and the six-sided bonus die bought with a Hope point. Faces
//! are drawn from a [`RandomSource`] supplied by the caller, never from a
//! global generator.

pub mod source;

pub use source::{RandomSource, ScriptedDice};

use serde::{Deserialize, Serialize};

/// A die used by the duality mechanic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided bonus die.
    D6,
    /// Twelve-sided Hope or Fear die.
    D12,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D12 => 12,
        }
    }

    /// Roll this die once against the given source.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> u32 {
        let value = rng.roll_die(self.sides());
        debug_assert!(
            (1..=self.sides()).contains(&value),
            "random source returned {value} for a {self}"
        );
        value
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
