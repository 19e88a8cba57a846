//! Hope-funded enhancements to a duality roll.
//!
//! Each enhancement costs one Hope point. Both can be bought for the same
//! roll, in which case the whole cost is deducted in one go.

use serde::{Deserialize, Serialize};

/// Flat bonus granted by using an Experience.
pub const EXPERIENCE_BONUS: i32 = 2;

/// Hope cost of each active enhancement.
pub const ENHANCEMENT_COST: u32 = 1;

/// Which enhancements are active for a roll attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancements {
    /// Use an Experience for +2 to the modifier.
    pub use_experience: bool,
    /// Spend Hope to add a d6 to the total.
    pub spend_hope: bool,
}

impl Enhancements {
    /// No enhancements.
    pub fn none() -> Self {
        Self::default()
    }

    /// Enable the Experience bonus.
    pub fn with_experience(mut self) -> Self {
        self.use_experience = true;
        self
    }

    /// Enable the Hope bonus die.
    pub fn with_hope_die(mut self) -> Self {
        self.spend_hope = true;
        self
    }

    /// Total Hope cost of the selection.
    pub fn cost(self) -> u32 {
        u32::from(self.use_experience) * ENHANCEMENT_COST
            + u32::from(self.spend_hope) * ENHANCEMENT_COST
    }

    /// Bonus the selection adds to the modifier before resolution.
    pub fn modifier_bonus(self) -> i32 {
        if self.use_experience {
            EXPERIENCE_BONUS
        } else {
            0
        }
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(self) -> bool {
        !self.use_experience && !self.spend_hope
    }
}
