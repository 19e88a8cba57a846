//! The duality roll itself: draw the dice, total them, classify the result.

use serde::Serialize;

use crate::dice::{Die, RandomSource};
use crate::error::{MechError, MechResult};
use crate::resolution::{DualityOutcome, Enhancements};

/// A validated difficulty: any positive integer.
///
/// There is no upper bound; a huge difficulty just makes the roll
/// impossible short of a critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Difficulty(i32);

impl Difficulty {
    /// Validate a raw difficulty.
    pub fn new(value: i32) -> MechResult<Self> {
        if value <= 0 {
            return Err(MechError::InvalidArgument(format!(
                "difficulty must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The numeric target.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Difficulty {
    type Error = MechError;

    fn try_from(value: i32) -> MechResult<Self> {
        Self::new(value)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fully resolved result of one duality roll.
///
/// Built only by [`resolve`]; the fields are read through accessors so a
/// report can never disagree with its own dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    hope_die: u32,
    fear_die: u32,
    bonus_die: Option<u32>,
    modifier: i32,
    total: i32,
    difficulty: i32,
    is_critical: bool,
    is_success: bool,
    category: DualityOutcome,
}

impl RollOutcome {
    fn from_dice(
        hope_die: u32,
        fear_die: u32,
        bonus_die: Option<u32>,
        modifier: i32,
        difficulty: Difficulty,
    ) -> Self {
        let dice = hope_die + fear_die + bonus_die.unwrap_or(0);
        let total = modifier.saturating_add(dice as i32);
        let is_critical = hope_die == fear_die;
        let is_success = total >= difficulty.value();
        Self {
            hope_die,
            fear_die,
            bonus_die,
            modifier,
            total,
            difficulty: difficulty.value(),
            is_critical,
            is_success,
            category: DualityOutcome::classify(hope_die, fear_die, is_success),
        }
    }

    /// Face of the Hope d12.
    pub fn hope_die(&self) -> u32 {
        self.hope_die
    }

    /// Face of the Fear d12.
    pub fn fear_die(&self) -> u32 {
        self.fear_die
    }

    /// Face of the d6 bought with Hope, if one was rolled.
    pub fn bonus_die(&self) -> Option<u32> {
        self.bonus_die
    }

    /// Modifier that was added to the dice.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Sum of every die plus the modifier.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// The target the total was compared against.
    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// True when the Hope and Fear dice match.
    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    /// True when the total met the difficulty.
    ///
    /// This is the numeric comparison only: a critical can still have a
    /// total below the difficulty.
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// The outcome category.
    pub fn category(&self) -> DualityOutcome {
        self.category
    }

    /// Rulebook text for the outcome category.
    pub fn description(&self) -> &'static str {
        self.category.description()
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[hope {}, fear {}", self.hope_die, self.fear_die)?;
        if let Some(bonus) = self.bonus_die {
            write!(f, ", bonus {bonus}")?;
        }
        if self.modifier >= 0 {
            write!(f, "] +{}", self.modifier)?;
        } else {
            write!(f, "] {}", self.modifier)?;
        }
        write!(
            f,
            " = {} vs {}: {}",
            self.total, self.difficulty, self.category
        )
    }
}

/// Resolve a duality roll.
///
/// `modifier` must already include any Experience bonus. The difficulty is
/// validated before any die is drawn. The Hope die is drawn first, then the
/// Fear die, then the bonus d6 when `enhancements.spend_hope` is set.
pub fn resolve<R: RandomSource + ?Sized>(
    modifier: i32,
    difficulty: i32,
    enhancements: Enhancements,
    rng: &mut R,
) -> MechResult<RollOutcome> {
    let difficulty = Difficulty::new(difficulty)?;

    let hope_die = Die::D12.roll(rng);
    let fear_die = Die::D12.roll(rng);
    let bonus_die = enhancements.spend_hope.then(|| Die::D6.roll(rng));

    let outcome = RollOutcome::from_dice(hope_die, fear_die, bonus_die, modifier, difficulty);
    tracing::debug!(
        hope_die,
        fear_die,
        bonus_die = ?bonus_die,
        modifier,
        total = outcome.total,
        difficulty = outcome.difficulty,
        outcome = %outcome.category,
        "resolved duality roll"
    );
    Ok(outcome)
}
