use std::hash::Hash;

use crate::algebra::{self, Distinct, Except, Intersect, Union};
use crate::comparer::{DefaultComparer, EqualityComparer};
use crate::error;
use crate::positional;
use crate::quantifier;

/// Method-style access to the operators, for chaining.
///
/// Implemented for every iterator. Names that `Iterator` already uses
/// (`all`, `any`, `count`, `last`, `filter`, `skip_while`) get a
/// `_match`/`_where` form here so both traits can be in scope together.
///
/// ```
/// use seqop::SequenceExt;
///
/// let result = vec![1, 2, 3, 4, 5, 5]
///     .into_iter()
///     .except(vec![4, 5, 6])
///     .union(vec![9, 1])
///     .collect::<Vec<_>>();
/// assert_eq!(result, vec![1, 2, 3, 9]);
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// Each element the first time it is seen.
    fn distinct(self) -> Distinct<Self, DefaultComparer>
    where
        Self::Item: Clone + Eq + Hash,
    {
        algebra::distinct(self)
    }

    fn distinct_by<C>(self, comparer: C) -> Distinct<Self, C>
    where
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        algebra::distinct_by(self, comparer)
    }

    /// Elements not in `other`, each once. `other` is read right away.
    fn except<J>(self, other: J) -> Except<Self, DefaultComparer>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Clone + Eq + Hash,
    {
        algebra::except(self, other)
    }

    fn except_by<J, C>(self, other: J, comparer: C) -> Except<Self, C>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        algebra::except_by(self, other, comparer)
    }

    /// Elements also in `other`, each once. `other` is read right away.
    fn intersect<J>(self, other: J) -> Intersect<Self, DefaultComparer>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        algebra::intersect(self, other)
    }

    fn intersect_by<J, C>(self, other: J, comparer: C) -> Intersect<Self, C>
    where
        J: IntoIterator<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        algebra::intersect_by(self, other, comparer)
    }

    /// Distinct elements of this sequence, then of `other`.
    fn union<J>(self, other: J) -> Union<Self, J::IntoIter, DefaultComparer>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Clone + Eq + Hash,
    {
        algebra::union(self, other)
    }

    fn union_by<J, C>(self, other: J, comparer: C) -> Union<Self, J::IntoIter, C>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        algebra::union_by(self, other, comparer)
    }

    fn all_match(self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        quantifier::all(self, predicate)
    }

    fn any_match(self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        quantifier::any(self, predicate)
    }

    fn contains_item(self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        quantifier::contains(self, item)
    }

    fn first_where(self, predicate: impl FnMut(&Self::Item) -> bool) -> error::Result<Self::Item> {
        quantifier::first(self, predicate)
    }

    fn last_where(self, predicate: impl FnMut(&Self::Item) -> bool) -> error::Result<Self::Item> {
        quantifier::last(self, predicate)
    }

    /// The only element satisfying `predicate`, or an error if there are
    /// none or several.
    fn single(self, predicate: impl FnMut(&Self::Item) -> bool) -> error::Result<Self::Item> {
        quantifier::single(self, predicate)
    }

    fn count_where(self, predicate: impl FnMut(&Self::Item) -> bool) -> usize {
        positional::count(self, predicate)
    }

    fn element_at<N: TryInto<usize>>(self, index: N) -> error::Result<Self::Item> {
        positional::element_at(self, index)
    }

    fn sequence_equal<J>(self, other: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        positional::sequence_equal(self, other)
    }

    fn sequence_equal_by<J, C>(self, other: J, comparer: C) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        positional::sequence_equal_by(self, other, comparer)
    }
}

impl<I: Iterator> SequenceExt for I {}
