//! The outcome of evaluating a specification.
//!
//! A [`SatisfactionResult`] is a satisfied flag plus the ordered reasons the
//! evaluated condition was violated. Reasons appear in evaluation order, so a
//! conjunction of two failing operands reports the left side first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Satisfied flag plus the reasons for any violation.
///
/// A satisfied result never carries reasons. An unsatisfied one may carry
/// zero, one or many.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResult")]
pub struct SatisfactionResult {
    satisfied: bool,
    reasons: Vec<String>,
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct RawResult {
    satisfied: bool,
    #[serde(default)]
    reasons: Vec<String>,
}

impl TryFrom<RawResult> for SatisfactionResult {
    type Error = SpecError;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        if raw.satisfied && !raw.reasons.is_empty() {
            return Err(SpecError::SatisfiedWithReasons {
                count: raw.reasons.len(),
            });
        }
        Ok(Self {
            satisfied: raw.satisfied,
            reasons: raw.reasons,
        })
    }
}

impl SatisfactionResult {
    /// A satisfied result with no reasons.
    pub fn satisfied() -> Self {
        Self {
            satisfied: true,
            reasons: Vec::new(),
        }
    }

    /// An unsatisfied result carrying `reasons` in the given order.
    ///
    /// An empty sequence is allowed and means no reason was given.
    pub fn not_satisfied<I, S>(reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            satisfied: false,
            reasons: reasons.into_iter().map(Into::into).collect(),
        }
    }

    /// An unsatisfied result with exactly one reason.
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            satisfied: false,
            reasons: vec![reason.into()],
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Reasons for the violation, in evaluation order.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }

    /// Concatenate the reasons of two unsatisfied results, left first.
    pub(crate) fn merge(mut self, right: SatisfactionResult) -> Self {
        debug_assert!(!self.satisfied && !right.satisfied);
        self.reasons.extend(right.reasons);
        self
    }
}

impl From<SatisfactionResult> for bool {
    fn from(result: SatisfactionResult) -> bool {
        result.satisfied
    }
}

impl fmt::Display for SatisfactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.satisfied {
            return write!(f, "satisfied");
        }
        write!(f, "not satisfied")?;
        if !self.reasons.is_empty() {
            write!(f, ": {}", self.reasons.join("; "))?;
        }
        Ok(())
    }
}
