//! Character identity and trait scores.
//!
//! A sheet carries what a duality roll needs to know about a character:
//! who it is and the modifier each trait contributes. Hope is deliberately
//! absent; it lives in the [`crate::ledger::HopeLedger`].

pub mod traits;

pub use traits::Trait;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A character's trait scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Stable identifier, also the ledger key.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Trait modifiers. Missing traits count as 0.
    #[serde(default)]
    pub traits: BTreeMap<Trait, i32>,
}

impl CharacterSheet {
    /// Create a sheet with every trait at 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            traits: BTreeMap::new(),
        }
    }

    /// Set a trait score.
    pub fn with_trait(mut self, which: Trait, value: i32) -> Self {
        self.traits.insert(which, value);
        self
    }

    /// The modifier a trait adds to a roll (0 if unset).
    pub fn trait_value(&self, which: Trait) -> i32 {
        self.traits.get(&which).copied().unwrap_or(0)
    }
}
