//! Error types for specification construction.
//!
//! Evaluation never fails: an unsatisfied specification is reported through
//! [`SatisfactionResult`](crate::SatisfactionResult), not through this type.

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, SpecError>;

/// Errors raised when a specification or result cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("a leaf specification needs a non-blank failure reason")]
    BlankReason,

    #[error("a satisfied result cannot carry reasons (got {count})")]
    SatisfiedWithReasons { count: usize },
}
