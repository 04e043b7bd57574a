//! Specifications: reusable, composable conditions over a value type.
//!
//! A [`Specification`] wraps a shared evaluation function. Composing two
//! specifications never inspects their structure at evaluation time; each
//! combinator builds a new closure over its operands' functions, so a
//! composed specification is a tree of nested calls.
//!
//! The identity specification is recognised by its [`SpecKind`] tag and
//! dropped from conjunctions; a disjunction containing it collapses to it.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::combinator;
use crate::error::{Result, SpecError};
use crate::evaluate::Evaluate;
use crate::filter::Matching;
use crate::result::SatisfactionResult;

/// Shared evaluation function behind every specification.
pub(crate) type EvalFn<T> = dyn Fn(&T) -> SatisfactionResult + Send + Sync;

/// How a specification was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    /// Always satisfied; the neutral element of composition.
    Identity,
    /// Built directly from a function or rule.
    Leaf,
    /// Both operands evaluated, reasons of failing sides concatenated.
    Conjunction,
    /// Right operand evaluated only when the left one is satisfied.
    ShortCircuitConjunction,
    /// Right operand evaluated only when the left one fails.
    Disjunction,
    /// Inverted, failing with a caller-supplied reason.
    Negation,
    /// Inverted, failing without a reason.
    Complement,
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecKind::Identity => write!(f, "identity"),
            SpecKind::Leaf => write!(f, "leaf"),
            SpecKind::Conjunction => write!(f, "and"),
            SpecKind::ShortCircuitConjunction => write!(f, "and-also"),
            SpecKind::Disjunction => write!(f, "or"),
            SpecKind::Negation => write!(f, "not"),
            SpecKind::Complement => write!(f, "complement"),
        }
    }
}

/// A named, reusable condition over values of type `T`.
///
/// Cloning is cheap: clones share the same evaluation function.
pub struct Specification<T: ?Sized> {
    kind: SpecKind,
    eval: Arc<EvalFn<T>>,
}

impl<T: ?Sized> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Specification<T> {
    pub(crate) fn from_parts(kind: SpecKind, eval: Arc<EvalFn<T>>) -> Self {
        Self { kind, eval }
    }

    pub(crate) fn eval_fn(&self) -> Arc<EvalFn<T>> {
        Arc::clone(&self.eval)
    }

    /// Create a specification from a function producing a full result.
    ///
    /// Use this for rules that run several checks and report their own
    /// reasons.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> SatisfactionResult + Send + Sync + 'static,
    {
        Self::from_parts(SpecKind::Leaf, Arc::new(f))
    }

    /// Create a specification from a boolean predicate.
    ///
    /// When the predicate is false the result carries exactly `reason`.
    pub fn predicate<F>(f: F, reason: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let reason = reason.into();
        Self::new(move |item: &T| {
            if f(item) {
                SatisfactionResult::satisfied()
            } else {
                SatisfactionResult::because(reason.clone())
            }
        })
    }

    /// Like [`predicate`](Self::predicate), but refuses a blank reason.
    pub fn try_predicate<F>(f: F, reason: impl Into<String>) -> Result<Self>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(SpecError::BlankReason);
        }
        Ok(Self::predicate(f, reason))
    }

    /// Wrap a hand-written rule type.
    pub fn from_rule<R>(rule: R) -> Self
    where
        R: Evaluate<T> + Send + Sync + 'static,
    {
        Self::new(move |item: &T| rule.evaluate(item))
    }

    /// The specification every value satisfies.
    pub fn identity() -> Self {
        Self::from_parts(SpecKind::Identity, Arc::new(|_: &T| SatisfactionResult::satisfied()))
    }

    /// Conjoin all `specs` with [`and`](Self::and).
    ///
    /// An empty input yields the identity.
    pub fn all_of<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = Specification<T>>,
    {
        specs
            .into_iter()
            .fold(Self::identity(), |acc, spec| acc.and(&spec))
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    pub fn is_identity(&self) -> bool {
        self.kind == SpecKind::Identity
    }

    /// Judge `item`.
    pub fn evaluate(&self, item: &T) -> SatisfactionResult {
        (self.eval)(item)
    }

    /// Judge `item`, discarding the reasons.
    pub fn is_satisfied_by(&self, item: &T) -> bool {
        self.evaluate(item).is_satisfied()
    }

    /// Borrow this specification as a plain predicate.
    pub fn as_predicate(&self) -> impl Fn(&T) -> bool + '_ {
        move |item: &T| self.is_satisfied_by(item)
    }

    /// Turn this specification into a plain predicate.
    pub fn into_predicate(self) -> impl Fn(&T) -> bool + Send + Sync + 'static {
        move |item: &T| (self.eval)(item).is_satisfied()
    }

    /// Lazily keep the items of `items` that satisfy this specification.
    pub fn filter<I>(&self, items: I) -> Matching<'_, I::IntoIter, T>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<T>,
    {
        Matching::new(items.into_iter(), self)
    }

    /// Both must hold; both are always evaluated.
    ///
    /// When both fail, the left reasons come first. Conjoining with the
    /// identity returns the other operand unchanged.
    pub fn and(&self, other: &Specification<T>) -> Specification<T> {
        if let Some(kept) = self.drop_identity(other, SpecKind::Conjunction) {
            return kept;
        }
        combinator::conjunction(self, other)
    }

    /// Both must hold; `other` is evaluated only when `self` holds.
    ///
    /// A failure reports the reasons of the failing side only.
    pub fn and_also(&self, other: &Specification<T>) -> Specification<T> {
        if let Some(kept) = self.drop_identity(other, SpecKind::ShortCircuitConjunction) {
            return kept;
        }
        combinator::short_circuit_conjunction(self, other)
    }

    /// Either must hold; `other` is evaluated only when `self` fails.
    ///
    /// When both fail, the left reasons come first. If either operand is
    /// the identity, that operand is returned.
    pub fn or(&self, other: &Specification<T>) -> Specification<T> {
        if self.is_identity() {
            trace!(op = %SpecKind::Disjunction, "left operand is identity, collapsing");
            return self.clone();
        }
        if other.is_identity() {
            trace!(op = %SpecKind::Disjunction, "right operand is identity, collapsing");
            return other.clone();
        }
        combinator::disjunction(self, other)
    }

    /// Invert this specification.
    ///
    /// When `self` holds the result fails with exactly `reason`. When `self`
    /// fails the result holds and the inner reasons are discarded.
    pub fn not(&self, reason: impl Into<String>) -> Specification<T> {
        combinator::negation(self, reason.into())
    }

    fn drop_identity(&self, other: &Specification<T>, op: SpecKind) -> Option<Specification<T>> {
        if self.is_identity() {
            trace!(op = %op, "dropping identity left operand");
            return Some(other.clone());
        }
        if other.is_identity() {
            trace!(op = %op, "dropping identity right operand");
            return Some(self.clone());
        }
        None
    }
}

impl<T: ?Sized + 'static> Default for Specification<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: ?Sized + 'static> Evaluate<T> for Specification<T> {
    fn evaluate(&self, item: &T) -> SatisfactionResult {
        Specification::evaluate(self, item)
    }
}

// References only, so the inherent `not(reason)` still resolves on owned
// values when `std::ops::Not` is in scope.
impl<T: ?Sized + 'static> std::ops::Not for &Specification<T> {
    type Output = Specification<T>;

    /// Invert without a reason: fails with no reasons when the inner
    /// specification holds.
    fn not(self) -> Specification<T> {
        combinator::complement(self)
    }
}

impl<T: ?Sized + 'static> std::ops::BitAnd for Specification<T> {
    type Output = Specification<T>;

    fn bitand(self, rhs: Specification<T>) -> Specification<T> {
        self.and(&rhs)
    }
}

impl<'a, T: ?Sized + 'static> std::ops::BitAnd<&'a Specification<T>> for &'a Specification<T> {
    type Output = Specification<T>;

    fn bitand(self, rhs: &'a Specification<T>) -> Specification<T> {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> std::ops::BitOr for Specification<T> {
    type Output = Specification<T>;

    fn bitor(self, rhs: Specification<T>) -> Specification<T> {
        self.or(&rhs)
    }
}

impl<'a, T: ?Sized + 'static> std::ops::BitOr<&'a Specification<T>> for &'a Specification<T> {
    type Output = Specification<T>;

    fn bitor(self, rhs: &'a Specification<T>) -> Specification<T> {
        self.or(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odd() -> Specification<i32> {
        Specification::predicate(|i: &i32| i % 2 != 0, "Not an odd integer.")
    }

    fn ones() -> Specification<i32> {
        Specification::predicate(|i: &i32| *i == 1, "Not a 1.")
    }

    fn threes() -> Specification<i32> {
        Specification::predicate(|i: &i32| *i == 3, "Not a 3.")
    }

    #[test]
    fn predicate_reports_its_reason() {
        let spec = odd();
        assert_eq!(spec.kind(), SpecKind::Leaf);
        assert!(spec.evaluate(&1).is_satisfied());
        assert_eq!(spec.evaluate(&2).reasons(), ["Not an odd integer."]);
    }

    #[test]
    fn try_predicate_rejects_blank_reason() {
        let err = Specification::<i32>::try_predicate(|_| true, "  ").unwrap_err();
        assert_eq!(err, SpecError::BlankReason);
        assert!(Specification::<i32>::try_predicate(|_| true, "ok").is_ok());
    }

    #[test]
    fn custom_rule_with_several_checks() {
        let spec = Specification::new(|s: &str| {
            if s.is_empty() {
                return SatisfactionResult::because("Must not be empty.");
            }
            if s.len() > 3 {
                return SatisfactionResult::because("Too long.");
            }
            SatisfactionResult::satisfied()
        });
        assert!(spec.is_satisfied_by("abc"));
        assert_eq!(spec.evaluate("").reasons(), ["Must not be empty."]);
        assert_eq!(spec.evaluate("abcd").reasons(), ["Too long."]);
    }

    #[test]
    fn identity_is_always_satisfied() {
        let id = Specification::<i32>::identity();
        assert!(id.is_identity());
        for i in -3..3 {
            assert_eq!(id.evaluate(&i), SatisfactionResult::satisfied());
        }
        assert!(Specification::<i32>::default().is_identity());
    }

    #[test]
    fn and_drops_identity_operand() {
        let id = Specification::identity();
        assert_eq!(id.and(&odd()).kind(), SpecKind::Leaf);
        assert_eq!(odd().and(&id).kind(), SpecKind::Leaf);
        assert!(id.and(&id).is_identity());
        assert_eq!(odd().and(&ones()).kind(), SpecKind::Conjunction);
    }

    #[test]
    fn and_also_drops_identity_operand() {
        let id = Specification::identity();
        assert_eq!(id.and_also(&odd()).kind(), SpecKind::Leaf);
        assert_eq!(odd().and_also(&id).kind(), SpecKind::Leaf);
        assert_eq!(
            odd().and_also(&ones()).kind(),
            SpecKind::ShortCircuitConjunction
        );
    }

    #[test]
    fn or_collapses_to_identity() {
        let id = Specification::identity();
        assert!(id.or(&odd()).is_identity());
        assert!(odd().or(&id).is_identity());
        assert_eq!(odd().or(&ones()).kind(), SpecKind::Disjunction);
    }

    #[test]
    fn not_keeps_identity() {
        let negated = Specification::<i32>::identity().not("Nothing may pass.");
        assert_eq!(negated.kind(), SpecKind::Negation);
        assert_eq!(negated.evaluate(&7).reasons(), ["Nothing may pass."]);
    }

    #[test]
    fn not_with_reason_resolves_with_ops_not_in_scope() {
        use std::ops::Not;

        let negated = ones().not("Was a 1.");
        assert_eq!(negated.kind(), SpecKind::Negation);
        assert_eq!(negated.evaluate(&1).reasons(), ["Was a 1."]);

        let by_ref = &ones();
        assert_eq!(by_ref.not("Was a 1.").kind(), SpecKind::Negation);
        assert_eq!(Not::not(by_ref).kind(), SpecKind::Complement);
    }

    #[test]
    fn all_of_empty_is_identity() {
        assert!(Specification::<i32>::all_of(Vec::new()).is_identity());
    }

    #[test]
    fn all_of_conjoins_every_spec() {
        let spec = Specification::all_of(vec![odd(), ones(), threes()]);
        assert_eq!(
            spec.evaluate(&2).reasons(),
            ["Not an odd integer.", "Not a 1.", "Not a 3."]
        );
        assert_eq!(spec.evaluate(&3).reasons(), ["Not a 1."]);
    }

    #[test]
    fn complement_operator_has_no_reason() {
        let evens = !&odd();
        assert!(evens.is_satisfied_by(&2));
        let r = evens.evaluate(&1);
        assert!(!r.is_satisfied());
        assert!(r.reasons().is_empty());
        assert_eq!((!&ones()).kind(), SpecKind::Complement);
    }

    #[test]
    fn bit_operators_compose() {
        let spec = odd() & (ones() | threes());
        let kept: Vec<i32> = (1..=10).filter(|i| spec.is_satisfied_by(i)).collect();
        assert_eq!(kept, vec![1, 3]);

        let (o, t) = (ones(), threes());
        assert_eq!((&o & &t).kind(), SpecKind::Conjunction);
        assert_eq!((&o | &t).kind(), SpecKind::Disjunction);
    }

    #[test]
    fn boolean_views() {
        let spec = odd();
        let borrowed: Vec<i32> = (1..=6).filter(|i| spec.as_predicate()(i)).collect();
        assert_eq!(borrowed, vec![1, 3, 5]);

        let owned = spec.into_predicate();
        assert!(owned(&9));
        assert!(!owned(&10));
    }

    #[test]
    fn unsized_subject() {
        let short = Specification::<str>::predicate(|s| s.len() < 4, "Too long.");
        assert!(short.is_satisfied_by("abc"));
        assert!(!short.is_satisfied_by("abcd"));
    }

    #[test]
    fn debug_shows_kind() {
        let text = format!("{:?}", odd().or(&ones()));
        assert!(text.contains("Disjunction"), "{text}");
    }

    #[test]
    fn shared_across_threads() {
        let spec = odd().and(&ones().or(&threes()));
        std::thread::scope(|s| {
            let handles: Vec<_> = (1..=10)
                .map(|i| {
                    let spec = &spec;
                    s.spawn(move || (i, spec.is_satisfied_by(&i)))
                })
                .collect();
            let mut kept: Vec<i32> = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|(_, ok)| *ok)
                .map(|(i, _)| i)
                .collect();
            kept.sort_unstable();
            assert_eq!(kept, vec![1, 3]);
        });
    }
}
