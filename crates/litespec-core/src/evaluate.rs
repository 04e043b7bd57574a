//! The evaluation capability shared by every specification.

use crate::result::SatisfactionResult;

/// Anything that can judge a value and explain a violation.
///
/// [`Specification`](crate::Specification) implements this, and so can a
/// hand-written rule type. Wrap such a type with
/// [`Specification::from_rule`](crate::Specification::from_rule) to compose it
/// with other specifications.
///
/// Implementations are expected to be deterministic and free of side effects
/// with respect to `item`.
pub trait Evaluate<T: ?Sized> {
    /// Judge `item`.
    fn evaluate(&self, item: &T) -> SatisfactionResult;

    /// Judge `item`, discarding the reasons.
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.evaluate(item).is_satisfied()
    }
}

impl<T: ?Sized, E: Evaluate<T> + ?Sized> Evaluate<T> for &E {
    fn evaluate(&self, item: &T) -> SatisfactionResult {
        (**self).evaluate(item)
    }
}
