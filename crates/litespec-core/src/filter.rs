//! Lazy filtering of sequences by a specification.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use tracing::trace;

use crate::specification::Specification;

/// Iterator over the items of `I` that satisfy a specification.
///
/// Each call to `next` evaluates only as many items as it has to.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Matching<'s, I, T: ?Sized> {
    iter: I,
    spec: &'s Specification<T>,
}

impl<I: Clone, T: ?Sized> Clone for Matching<'_, I, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            spec: self.spec,
        }
    }
}

impl<'s, I, T: ?Sized> Matching<'s, I, T> {
    pub(crate) fn new(iter: I, spec: &'s Specification<T>) -> Self {
        Self { iter, spec }
    }
}

impl<I, T> Iterator for Matching<'_, I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if self.spec.is_satisfied_by(item.borrow()) {
                return Some(item);
            }
            trace!(kind = %self.spec.kind(), "item rejected");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> FusedIterator for Matching<'_, I, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
{
}

/// Adds [`matching`](MatchingExt::matching) to every sequence.
pub trait MatchingExt: IntoIterator + Sized {
    /// Lazily keep the items that satisfy `spec`.
    fn matching<T>(self, spec: &Specification<T>) -> Matching<'_, Self::IntoIter, T>
    where
        T: ?Sized + 'static,
        Self::Item: Borrow<T>,
    {
        Matching::new(self.into_iter(), spec)
    }
}

impl<I: IntoIterator> MatchingExt for I {}
