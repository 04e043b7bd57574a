//! Combinator factories.
//!
//! Each factory captures its operands' evaluation functions in a new
//! closure. Identity elimination happens in the public entry points on
//! [`Specification`]; these factories always build a node.

use std::sync::Arc;

use crate::result::SatisfactionResult;
use crate::specification::{SpecKind, Specification};

/// Evaluate both sides; concatenate reasons when both fail.
pub(crate) fn conjunction<T: ?Sized + 'static>(
    left: &Specification<T>,
    right: &Specification<T>,
) -> Specification<T> {
    let (lhs, rhs) = (left.eval_fn(), right.eval_fn());
    Specification::from_parts(
        SpecKind::Conjunction,
        Arc::new(move |item: &T| {
            let left = lhs(item);
            let right = rhs(item);
            match (left.is_satisfied(), right.is_satisfied()) {
                (true, true) => SatisfactionResult::satisfied(),
                (false, true) => left,
                (true, false) => right,
                (false, false) => left.merge(right),
            }
        }),
    )
}

/// Stop at the first failing side.
pub(crate) fn short_circuit_conjunction<T: ?Sized + 'static>(
    left: &Specification<T>,
    right: &Specification<T>,
) -> Specification<T> {
    let (lhs, rhs) = (left.eval_fn(), right.eval_fn());
    Specification::from_parts(
        SpecKind::ShortCircuitConjunction,
        Arc::new(move |item: &T| {
            let left = lhs(item);
            if !left.is_satisfied() {
                return left;
            }
            rhs(item)
        }),
    )
}

/// Stop at the first satisfied side; concatenate reasons when both fail.
pub(crate) fn disjunction<T: ?Sized + 'static>(
    left: &Specification<T>,
    right: &Specification<T>,
) -> Specification<T> {
    let (lhs, rhs) = (left.eval_fn(), right.eval_fn());
    Specification::from_parts(
        SpecKind::Disjunction,
        Arc::new(move |item: &T| {
            let left = lhs(item);
            if left.is_satisfied() {
                return left;
            }
            let right = rhs(item);
            if right.is_satisfied() {
                return right;
            }
            left.merge(right)
        }),
    )
}

/// Fail with `reason` when the inner specification holds.
pub(crate) fn negation<T: ?Sized + 'static>(
    inner: &Specification<T>,
    reason: String,
) -> Specification<T> {
    let eval = inner.eval_fn();
    Specification::from_parts(
        SpecKind::Negation,
        Arc::new(move |item: &T| {
            if eval(item).is_satisfied() {
                SatisfactionResult::because(reason.clone())
            } else {
                SatisfactionResult::satisfied()
            }
        }),
    )
}

/// Fail without a reason when the inner specification holds.
pub(crate) fn complement<T: ?Sized + 'static>(inner: &Specification<T>) -> Specification<T> {
    let eval = inner.eval_fn();
    Specification::from_parts(
        SpecKind::Complement,
        Arc::new(move |item: &T| {
            if eval(item).is_satisfied() {
                SatisfactionResult::not_satisfied(Vec::<String>::new())
            } else {
                SatisfactionResult::satisfied()
            }
        }),
    )
}
