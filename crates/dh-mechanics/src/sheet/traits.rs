//! The six character traits.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// A character trait that can be rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    /// Sprint, leap, maneuver.
    Agility,
    /// Lift, smash, grapple.
    Strength,
    /// Control, hide, tinker.
    Finesse,
    /// Perceive, sense, navigate.
    Instinct,
    /// Charm, perform, deceive.
    Presence,
    /// Recall, analyze, comprehend.
    Knowledge,
}

impl Trait {
    /// All traits, in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Agility,
        Self::Strength,
        Self::Finesse,
        Self::Instinct,
        Self::Presence,
        Self::Knowledge,
    ];

    /// Lowercase name used in files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agility => "agility",
            Self::Strength => "strength",
            Self::Finesse => "finesse",
            Self::Instinct => "instinct",
            Self::Presence => "presence",
            Self::Knowledge => "knowledge",
        }
    }
}

impl FromStr for Trait {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| MechError::UnknownTrait(s.to_string()))
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
