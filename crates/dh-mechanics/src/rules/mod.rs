//! Trait rolls: the full loop from enhancement purchase to Hope gain.
//!
//! [`roll_trait`] is the only caller that both resolves dice and touches
//! the ledger. It keeps a strict order for each attempt:
//!
//! 1. validate the difficulty
//! 2. deduct the whole enhancement cost in one spend
//! 3. roll
//! 4. credit one Hope if the outcome generates it
//!
//! If step 1 or 2 fails nothing is rolled and no balance changes.

use serde::Serialize;

use crate::dice::RandomSource;
use crate::error::MechResult;
use crate::ledger::HopeLedger;
use crate::resolution::{self, Difficulty, DualityOutcome, Enhancements, RollOutcome};
use crate::sheet::{CharacterId, CharacterSheet, Trait};

/// Hope credited by an outcome that generates Hope.
pub const HOPE_PER_ROLL: u32 = 1;

/// A request to roll one of a character's traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitRoll {
    /// Who is rolling; also the ledger key.
    pub character: CharacterId,
    /// Which trait is being rolled.
    pub trait_name: Trait,
    /// The trait's score, added to the dice.
    pub trait_value: i32,
    /// Target total.
    pub difficulty: i32,
    /// Hope-funded enhancements to buy.
    pub enhancements: Enhancements,
}

impl TraitRoll {
    /// Build a request from a character sheet.
    pub fn for_sheet(sheet: &CharacterSheet, trait_name: Trait, difficulty: i32) -> Self {
        Self {
            character: sheet.id,
            trait_name,
            trait_value: sheet.trait_value(trait_name),
            difficulty,
            enhancements: Enhancements::none(),
        }
    }

    /// Set the enhancements to buy.
    pub fn with_enhancements(mut self, enhancements: Enhancements) -> Self {
        self.enhancements = enhancements;
        self
    }

    /// The modifier passed to the engine: trait plus any Experience bonus.
    pub fn modifier(&self) -> i32 {
        self.trait_value
            .saturating_add(self.enhancements.modifier_bonus())
    }
}

/// A side effect of a trait roll, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollEffect {
    /// Hope was paid for enhancements before rolling.
    HopeSpent {
        /// Points paid.
        amount: u32,
        /// Balance after paying.
        balance: u8,
    },
    /// The outcome credited Hope.
    HopeGained {
        /// Points credited (before clamping).
        amount: u32,
        /// Balance after crediting.
        balance: u8,
    },
    /// The outcome hands the GM a Fear.
    FearGenerated,
}

impl std::fmt::Display for RollEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HopeSpent { amount, balance } => write!(f, "Hope -{amount} (now {balance})"),
            Self::HopeGained { amount, balance } => write!(f, "Hope +{amount} (now {balance})"),
            Self::FearGenerated => write!(f, "GM Fear +1"),
        }
    }
}

/// Everything that happened during one trait roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitRollReport {
    /// The character that rolled.
    pub character: CharacterId,
    /// The trait that was rolled.
    pub trait_name: Trait,
    /// Enhancements that were bought.
    pub enhancements: Enhancements,
    /// The resolved dice.
    pub outcome: RollOutcome,
    /// Rulebook text for the outcome.
    pub description: &'static str,
    /// Hope before any enhancement was paid for.
    pub hope_before: u8,
    /// Hope after the outcome was applied.
    pub hope_after: u8,
    /// Ledger and Fear effects, in the order they happened.
    pub effects: Vec<RollEffect>,
}

impl TraitRollReport {
    /// The outcome category.
    pub fn category(&self) -> DualityOutcome {
        self.outcome.category()
    }
}

/// Perform a trait roll against a ledger.
///
/// Fails with [`crate::MechError::InsufficientHope`] when the character
/// cannot pay for every selected enhancement; in that case no dice are
/// drawn and the balance is unchanged.
pub fn roll_trait<R: RandomSource + ?Sized>(
    ledger: &mut HopeLedger,
    request: &TraitRoll,
    rng: &mut R,
) -> MechResult<TraitRollReport> {
    let id = request.character;
    let difficulty = Difficulty::new(request.difficulty)?;
    let hope_before = ledger.hope(id);
    let mut effects = Vec::new();

    let cost = request.enhancements.cost();
    if cost > 0 {
        let balance = ledger.spend(id, cost)?;
        effects.push(RollEffect::HopeSpent {
            amount: cost,
            balance,
        });
    }

    let outcome = resolution::resolve(
        request.modifier(),
        difficulty.value(),
        request.enhancements,
        rng,
    )?;

    let category = outcome.category();
    if category.generates_hope() {
        let balance = ledger.gain(id, HOPE_PER_ROLL);
        effects.push(RollEffect::HopeGained {
            amount: HOPE_PER_ROLL,
            balance,
        });
    }
    if category.generates_fear() {
        effects.push(RollEffect::FearGenerated);
    }

    let hope_after = ledger.hope(id);
    tracing::info!(
        character = %id,
        trait_name = %request.trait_name,
        outcome = %category,
        hope_before,
        hope_after,
        "trait roll resolved"
    );

    Ok(TraitRollReport {
        character: id,
        trait_name: request.trait_name,
        enhancements: request.enhancements,
        description: category.description(),
        outcome,
        hope_before,
        hope_after,
        effects,
    })
}
