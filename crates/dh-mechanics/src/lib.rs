//! Duality dice mechanics for Daggerheart-style play.
//!
//! Provides the two-d12 duality roll and its five outcomes, the bounded
//! Hope ledger that enhancements draw on and outcomes refill, and the trait
//! roll that ties the two together in the right order.

pub mod config;
pub mod dice;
pub mod error;
pub mod ledger;
pub mod resolution;
pub mod rules;
pub mod sheet;

pub use config::RollConfig;
pub use dice::{Die, RandomSource, ScriptedDice};
pub use error::{MechError, MechResult};
pub use ledger::{HOPE_MAX, HopeLedger, HopeStore, MemoryStore, SharedLedger};
pub use resolution::{Difficulty, DualityOutcome, Enhancements, RollOutcome, resolve};
pub use rules::{RollEffect, TraitRoll, TraitRollReport, roll_trait};
pub use sheet::{CharacterId, CharacterSheet, Trait};
