//! Duality roll resolution.
//!
//! A duality roll throws a Hope d12 and a Fear d12 together, adds a
//! modifier, and compares the total to a difficulty. The result falls into
//! one of five outcomes:
//! - **Critical success**: both dice show the same face, whatever the total
//! - **Success with Hope / Fear**: the total meets the difficulty
//! - **Failure with Hope / Fear**: the total falls short
//!
//! The Hope/Fear half of the name is decided by whichever die is higher.

pub mod duality;
pub mod enhancement;

pub use duality::{Difficulty, RollOutcome, resolve};
pub use enhancement::Enhancements;

use serde::{Deserialize, Serialize};

/// The outcome category of a duality roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DualityOutcome {
    /// Hope and Fear dice matched.
    CriticalSuccess,
    /// Met the difficulty with the Hope die higher.
    SuccessWithHope,
    /// Met the difficulty with the Fear die higher.
    SuccessWithFear,
    /// Missed the difficulty with the Hope die higher.
    FailureWithHope,
    /// Missed the difficulty with the Fear die higher.
    FailureWithFear,
}

impl DualityOutcome {
    /// Every outcome, in rulebook order.
    pub const ALL: [Self; 5] = [
        Self::CriticalSuccess,
        Self::SuccessWithHope,
        Self::SuccessWithFear,
        Self::FailureWithHope,
        Self::FailureWithFear,
    ];

    /// Classify a pair of dice and a success flag.
    ///
    /// Matching dice are always a critical success, even when the total
    /// missed the difficulty.
    pub fn classify(hope_die: u32, fear_die: u32, is_success: bool) -> Self {
        if hope_die == fear_die {
            return Self::CriticalSuccess;
        }
        let hope_higher = hope_die > fear_die;
        match (is_success, hope_higher) {
            (true, true) => Self::SuccessWithHope,
            (true, false) => Self::SuccessWithFear,
            (false, true) => Self::FailureWithHope,
            (false, false) => Self::FailureWithFear,
        }
    }

    /// Returns true if the roller gains a Hope from this outcome.
    pub fn generates_hope(self) -> bool {
        match self {
            Self::CriticalSuccess | Self::SuccessWithHope | Self::FailureWithHope => true,
            Self::SuccessWithFear | Self::FailureWithFear => false,
        }
    }

    /// Returns true if the opposing side (the GM) gains a Fear.
    pub fn generates_fear(self) -> bool {
        match self {
            Self::SuccessWithFear | Self::FailureWithFear => true,
            Self::CriticalSuccess | Self::SuccessWithHope | Self::FailureWithHope => false,
        }
    }

    /// Returns true for the three successful outcomes.
    pub fn is_success(self) -> bool {
        match self {
            Self::CriticalSuccess | Self::SuccessWithHope | Self::SuccessWithFear => true,
            Self::FailureWithHope | Self::FailureWithFear => false,
        }
    }

    /// The rulebook text for this outcome.
    pub fn description(self) -> &'static str {
        match self {
            Self::CriticalSuccess => {
                "Critical Success! You get what you wanted and a little extra. You gain a Hope and clear a Stress."
            }
            Self::SuccessWithHope => {
                "Success with Hope! You get what you wanted and you gain a Hope."
            }
            Self::SuccessWithFear => {
                "Success with Fear! You get what you want, but it comes with a consequence. The GM gains a Fear."
            }
            Self::FailureWithHope => {
                "Failure with Hope! You probably don't get what you want and there are consequences, but you gain a Hope."
            }
            Self::FailureWithFear => {
                "Failure with Fear! You don't get what you wanted and things go very badly. The GM gains a Fear."
            }
        }
    }

    /// The kebab-case tag used in serialized output.
    pub fn tag(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "critical-success",
            Self::SuccessWithHope => "success-with-hope",
            Self::SuccessWithFear => "success-with-fear",
            Self::FailureWithHope => "failure-with-hope",
            Self::FailureWithFear => "failure-with-fear",
        }
    }
}

impl std::fmt::Display for DualityOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::SuccessWithHope => write!(f, "Success with Hope"),
            Self::SuccessWithFear => write!(f, "Success with Fear"),
            Self::FailureWithHope => write!(f, "Failure with Hope"),
            Self::FailureWithFear => write!(f, "Failure with Fear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn outcome_display() {
        assert_eq!(DualityOutcome::CriticalSuccess.to_string(), "Critical Success");
        assert_eq!(DualityOutcome::SuccessWithHope.to_string(), "Success with Hope");
        assert_eq!(DualityOutcome::SuccessWithFear.to_string(), "Success with Fear");
        assert_eq!(DualityOutcome::FailureWithHope.to_string(), "Failure with Hope");
        assert_eq!(DualityOutcome::FailureWithFear.to_string(), "Failure with Fear");
    }

    #[test]
    fn classify_each_branch() {
        assert_eq!(
            DualityOutcome::classify(9, 4, true),
            DualityOutcome::SuccessWithHope
        );
        assert_eq!(
            DualityOutcome::classify(4, 9, true),
            DualityOutcome::SuccessWithFear
        );
        assert_eq!(
            DualityOutcome::classify(9, 4, false),
            DualityOutcome::FailureWithHope
        );
        assert_eq!(
            DualityOutcome::classify(3, 8, false),
            DualityOutcome::FailureWithFear
        );
        assert_eq!(
            DualityOutcome::classify(7, 7, false),
            DualityOutcome::CriticalSuccess
        );
    }

    #[test]
    fn hope_and_fear_partition_outcomes() {
        let hope: Vec<_> = DualityOutcome::ALL
            .into_iter()
            .filter(|o| o.generates_hope())
            .collect();
        assert_eq!(
            hope,
            vec![
                DualityOutcome::CriticalSuccess,
                DualityOutcome::SuccessWithHope,
                DualityOutcome::FailureWithHope,
            ]
        );
        for outcome in DualityOutcome::ALL {
            assert_ne!(outcome.generates_hope(), outcome.generates_fear());
        }
    }

    #[test]
    fn descriptions_match_outcome() {
        for outcome in DualityOutcome::ALL {
            assert!(outcome.description().starts_with(&format!("{outcome}!")));
        }
    }

    #[test]
    fn serializes_as_kebab_tag() {
        for outcome in DualityOutcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.tag()));
        }
    }

    proptest! {
        #[test]
        fn matching_dice_are_always_critical(face in 1u32..=12, success in any::<bool>()) {
            prop_assert_eq!(
                DualityOutcome::classify(face, face, success),
                DualityOutcome::CriticalSuccess
            );
        }

        #[test]
        fn suffix_follows_higher_die(
            hope in 1u32..=12,
            fear in 1u32..=12,
            success in any::<bool>(),
        ) {
            prop_assume!(hope != fear);
            let outcome = DualityOutcome::classify(hope, fear, success);
            prop_assert_eq!(outcome.is_success(), success);
            prop_assert_eq!(outcome.generates_hope(), hope > fear);
            prop_assert_eq!(outcome.generates_fear(), hope < fear);
        }
    }
}
