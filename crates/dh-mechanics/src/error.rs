//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// An input was outside the domain an operation accepts
    /// (e.g. a non-positive difficulty or a zero-point spend).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A spend asked for more Hope than the character holds.
    #[error("not enough Hope: need {needed}, have {available}")]
    InsufficientHope {
        /// Hope points requested.
        needed: u32,
        /// Hope points on hand when the spend was rejected.
        available: u8,
    },

    /// A trait name did not match any of the six character traits.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// A persistence collaborator failed to load or store a balance.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
