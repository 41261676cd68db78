//! Set algebra over sequences.
//!
//! Each operator returns an iterator that does its work as it is pulled,
//! keeping the hash sets it needs as private state. Output is always in
//! first-occurrence order of the inputs.
//!
//! `except` and `intersect` read their second sequence completely when they
//! are called; the first sequence is only read on demand.

use std::iter::FusedIterator;

use crate::comparer::{DefaultComparer, EqualityComparer};
use crate::set::ComparerSet;

/// Each element of `source` the first time it is seen.
pub fn distinct<I>(source: I) -> Distinct<I::IntoIter, DefaultComparer>
where
    I: IntoIterator,
    I::Item: Clone + Eq + std::hash::Hash,
{
    distinct_by(source, DefaultComparer)
}

/// Like [`distinct`], with equality decided by `comparer`.
pub fn distinct_by<I, C>(source: I, comparer: C) -> Distinct<I::IntoIter, C>
where
    I: IntoIterator,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    Distinct::new(source.into_iter(), comparer)
}

/// The elements of `first` that don't occur in `second`, each once.
pub fn except<I, J>(first: I, second: J) -> Except<I::IntoIter, DefaultComparer>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone + Eq + std::hash::Hash,
{
    except_by(first, second, DefaultComparer)
}

/// Like [`except`], with equality decided by `comparer`.
pub fn except_by<I, J, C>(first: I, second: J, comparer: C) -> Except<I::IntoIter, C>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    Except::new(first.into_iter(), second, comparer)
}

/// The elements of `first` that also occur in `second`, each once.
pub fn intersect<I, J>(first: I, second: J) -> Intersect<I::IntoIter, DefaultComparer>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Eq + std::hash::Hash,
{
    intersect_by(first, second, DefaultComparer)
}

/// Like [`intersect`], with equality decided by `comparer`.
pub fn intersect_by<I, J, C>(first: I, second: J, comparer: C) -> Intersect<I::IntoIter, C>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    C: EqualityComparer<I::Item>,
{
    Intersect::new(first.into_iter(), second, comparer)
}

/// The distinct elements of `first`, followed by the distinct elements of
/// `second` that weren't in `first`.
pub fn union<I, J>(first: I, second: J) -> Union<I::IntoIter, J::IntoIter, DefaultComparer>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone + Eq + std::hash::Hash,
{
    union_by(first, second, DefaultComparer)
}

/// Like [`union`], with equality decided by `comparer`.
pub fn union_by<I, J, C>(first: I, second: J, comparer: C) -> Union<I::IntoIter, J::IntoIter, C>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    Union::new(first.into_iter(), second.into_iter(), comparer)
}

/// Iterator returned by [`distinct`] and [`distinct_by`].
#[derive(Debug, Clone)]
pub struct Distinct<I, C>
where
    I: Iterator,
{
    iter: I,
    seen: ComparerSet<I::Item>,
    comparer: C,
}

impl<I, C> Distinct<I, C>
where
    I: Iterator,
{
    fn new(iter: I, comparer: C) -> Self {
        Self {
            iter,
            seen: ComparerSet::new(),
            comparer,
        }
    }
}

impl<I, C> Iterator for Distinct<I, C>
where
    I: Iterator,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert(item.clone(), &self.comparer) {
                return Some(item);
            }
        }
        log::trace!("distinct: exhausted after {} distinct values", self.seen.len());
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every remaining item may be a duplicate of something seen
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, C> FusedIterator for Distinct<I, C>
where
    I: FusedIterator,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
}

/// Iterator returned by [`except`] and [`except_by`].
///
/// Starts out with the second sequence as its exclusion set. Every value
/// it lets through is added to that set too, so a value repeated in the
/// first sequence only comes out once.
#[derive(Debug, Clone)]
pub struct Except<I, C>
where
    I: Iterator,
{
    iter: I,
    excluded: ComparerSet<I::Item>,
    comparer: C,
}

impl<I, C> Except<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    fn new(iter: I, second: impl IntoIterator<Item = I::Item>, comparer: C) -> Self {
        let excluded = ComparerSet::from_iter_with(second, &comparer);
        log::trace!("except: excluding {} values", excluded.len());
        Self {
            iter,
            excluded,
            comparer,
        }
    }
}

impl<I, C> Iterator for Except<I, C>
where
    I: Iterator,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.excluded.insert(item.clone(), &self.comparer) {
                return Some(item);
            }
        }
        log::trace!("except: exhausted with {} excluded values", self.excluded.len());
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, C> FusedIterator for Except<I, C>
where
    I: FusedIterator,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
}

/// Iterator returned by [`intersect`] and [`intersect_by`].
///
/// Holds the values of the second sequence that haven't been produced yet.
/// A value leaves that set when it is produced, which is what keeps a
/// value repeated in the first sequence from coming out twice.
#[derive(Debug, Clone)]
pub struct Intersect<I, C>
where
    I: Iterator,
{
    iter: I,
    pending: ComparerSet<I::Item>,
    comparer: C,
}

impl<I, C> Intersect<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    fn new(iter: I, second: impl IntoIterator<Item = I::Item>, comparer: C) -> Self {
        let pending = ComparerSet::from_iter_with(second, &comparer);
        log::trace!("intersect: {} candidate values", pending.len());
        Self {
            iter,
            pending,
            comparer,
        }
    }
}

impl<I, C> Iterator for Intersect<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            // nothing left that could match; don't drain the source
            return None;
        }
        for item in self.iter.by_ref() {
            if self.pending.remove(&item, &self.comparer) {
                return Some(item);
            }
        }
        log::trace!("intersect: exhausted with {} unmatched values", self.pending.len());
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        let pending = self.pending.len();
        (0, Some(upper.map_or(pending, |upper| upper.min(pending))))
    }
}

impl<I, C> FusedIterator for Intersect<I, C>
where
    I: FusedIterator,
    C: EqualityComparer<I::Item>,
{
}

/// Iterator returned by [`union`] and [`union_by`].
///
/// One seen-set is shared across both inputs.
#[derive(Debug, Clone)]
pub struct Union<I, J, C>
where
    I: Iterator,
{
    first: Option<I>,
    second: J,
    seen: ComparerSet<I::Item>,
    comparer: C,
}

impl<I, J, C> Union<I, J, C>
where
    I: Iterator,
{
    fn new(first: I, second: J, comparer: C) -> Self {
        Self {
            first: Some(first),
            second,
            seen: ComparerSet::new(),
            comparer,
        }
    }
}

impl<I, J, C> Iterator for Union<I, J, C>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            for item in first.by_ref() {
                if self.seen.insert(item.clone(), &self.comparer) {
                    return Some(item);
                }
            }
            // first is done; never poll it again
            self.first = None;
        }
        for item in self.second.by_ref() {
            if self.seen.insert(item.clone(), &self.comparer) {
                return Some(item);
            }
        }
        log::trace!("union: exhausted after {} distinct values", self.seen.len());
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, second_upper) = self.second.size_hint();
        let first_upper = match &self.first {
            Some(first) => first.size_hint().1,
            None => Some(0),
        };
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (0, upper)
    }
}

impl<I, J, C> FusedIterator for Union<I, J, C>
where
    I: Iterator,
    J: FusedIterator<Item = I::Item>,
    I::Item: Clone,
    C: EqualityComparer<I::Item>,
{
}
