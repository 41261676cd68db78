use std::iter::FusedIterator;

use crate::comparer::EqualityComparer;
use crate::error;

/// The element at zero-based `index`, found by walking from the start.
///
/// `index` can be any integer type; one that is negative (or otherwise
/// doesn't fit a `usize`) is out of range just like one past the end.
///
/// ```
/// use seqop::{element_at, Error};
///
/// assert_eq!(element_at([1, 2, 3], 2), Ok(3));
/// assert_eq!(element_at([1, 2, 3], 3), Err(Error::IndexOutOfRange));
/// assert_eq!(element_at([1, 2, 3], -1), Err(Error::IndexOutOfRange));
/// ```
pub fn element_at<T, N>(source: impl IntoIterator<Item = T>, index: N) -> error::Result<T>
where
    N: TryInto<usize>,
{
    let index: usize = index.try_into().map_err(|_| {
        log::debug!("element_at: index not representable as a position");
        error::Error::IndexOutOfRange
    })?;
    source.into_iter().nth(index).ok_or_else(|| {
        log::debug!("element_at: no element at index {}", index);
        error::Error::IndexOutOfRange
    })
}

/// The number of elements satisfying `predicate`. Always reads the whole
/// sequence.
pub fn count<T>(source: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> usize {
    let mut n = 0;
    for item in source {
        if predicate(&item) {
            n += 1;
        }
    }
    n
}

/// Whether both sequences have the same length and equal elements at
/// every position.
pub fn sequence_equal<T, I, J>(first: I, second: J) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    walk_pairwise(first, second, |a, b| a == b)
}

/// Like [`sequence_equal`], with equality decided by `comparer`.
pub fn sequence_equal_by<T, I, J, C>(first: I, second: J, comparer: C) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    C: EqualityComparer<T>,
{
    walk_pairwise(first, second, |a, b| comparer.equals(a, b))
}

// Both iterators are owned by this frame, so they are dropped on every way
// out: a mismatch, a length difference, running to the end, or a panic
// unwinding out of `eq` or out of either iterator.
fn walk_pairwise<T, I, J>(first: I, second: J, mut eq: impl FnMut(&T, &T) -> bool) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => {
                if !eq(&a, &b) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Skip elements while `predicate` holds, then yield the first element
/// for which it doesn't and everything after it.
pub fn skip_while<I, P>(source: I, predicate: P) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    SkipWhile {
        iter: source.into_iter(),
        predicate: Some(predicate),
    }
}

/// Yield the elements for which `predicate` holds, in order.
///
/// This is the `Where` operator; `where` is reserved in Rust.
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: source.into_iter(),
        predicate,
    }
}

/// Iterator returned by [`skip_while`].
///
/// The predicate is dropped the moment it first returns false; from then
/// on elements pass straight through. Running out of input while still
/// skipping keeps it, so a source that resumes is still tested.
#[derive(Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: Option<P>,
}

impl<I: std::fmt::Debug, P> std::fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("skipping", &self.predicate.is_some())
            .finish()
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(predicate) = &mut self.predicate else {
            return self.iter.next();
        };
        for item in self.iter.by_ref() {
            if !predicate(&item) {
                self.predicate = None;
                return Some(item);
            }
        }
        // still skipping; the predicate stays for a source that resumes
        log::trace!("skip_while: exhausted while skipping");
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.predicate.is_some() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for SkipWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Iterator returned by [`filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I: std::fmt::Debug, P> std::fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        log::trace!("filter: exhausted");
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use rstest::rstest;

    use super::*;
    use crate::comparer::CaseInsensitive;
    use crate::error::Error;

    // Iterator over a vector that counts how often it has been dropped.
    struct Tracked {
        items: std::vec::IntoIter<i32>,
        drops: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(items: Vec<i32>, drops: &Rc<Cell<usize>>) -> Self {
            Self {
                items: items.into_iter(),
                drops: drops.clone(),
            }
        }
    }

    impl Iterator for Tracked {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.items.next()
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[rstest]
    #[case(0, Ok(1))]
    #[case(2, Ok(3))]
    #[case(3, Err(Error::IndexOutOfRange))]
    #[case(-1, Err(Error::IndexOutOfRange))]
    fn test_element_at(#[case] index: i64, #[case] expected: Result<i32, Error>) {
        assert_eq!(element_at(vec![1, 2, 3], index), expected);
    }

    #[test]
    fn test_element_at_empty() {
        assert_eq!(
            element_at(Vec::<i32>::new(), 0usize),
            Err(Error::IndexOutOfRange)
        );
    }

    #[test]
    fn test_element_at_reads_only_up_to_index() {
        let pulled = Cell::new(0);
        let source = (10..).inspect(|_| pulled.set(pulled.get() + 1));
        assert_eq!(element_at(source, 4u8), Ok(14));
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(vec![1, 2, 3, 4, 5, 5], |n| *n > 2), 4);
        assert_eq!(count(Vec::<i32>::new(), |_| true), 0);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![1, 2, 3], true)]
    #[case(vec![], vec![], true)]
    #[case(vec![1, 2, 3], vec![1, 2], false)]
    #[case(vec![1, 2], vec![1, 2, 3], false)]
    #[case(vec![1, 2, 3], vec![1, 9, 3], false)]
    fn test_sequence_equal(#[case] a: Vec<i32>, #[case] b: Vec<i32>, #[case] expected: bool) {
        assert_eq!(sequence_equal(a, b), expected);
    }

    #[test]
    fn test_sequence_equal_by() {
        assert!(sequence_equal_by(["A", "b"], ["a", "B"], CaseInsensitive));
        assert!(!sequence_equal_by(["A", "b"], ["a", "c"], CaseInsensitive));
    }

    #[test]
    fn test_sequence_equal_stops_at_mismatch() {
        // an infinite source compared against a finite one terminates
        assert!(!sequence_equal(0.., vec![0, 1, 7]));
        assert!(!sequence_equal(0.., vec![0, 1, 2]));
    }

    #[test]
    fn test_sequence_equal_releases_on_completion() {
        let drops = Rc::new(Cell::new(0));
        let equal = sequence_equal(
            Tracked::new(vec![1, 2], &drops),
            Tracked::new(vec![1, 2], &drops),
        );
        assert!(equal);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_sequence_equal_releases_on_mismatch() {
        let drops = Rc::new(Cell::new(0));
        let equal = sequence_equal(
            Tracked::new(vec![1, 2, 3, 4], &drops),
            Tracked::new(vec![1, 5, 3, 4], &drops),
        );
        assert!(!equal);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_sequence_equal_releases_on_panic() {
        struct Exploding;
        impl EqualityComparer<i32> for Exploding {
            fn equals(&self, a: &i32, _b: &i32) -> bool {
                if *a == 2 {
                    panic!("comparer failed");
                }
                true
            }
            fn hash<H: std::hash::Hasher>(&self, _value: &i32, _state: &mut H) {}
        }

        let drops = Rc::new(Cell::new(0));
        let result = catch_unwind(AssertUnwindSafe(|| {
            sequence_equal_by(
                Tracked::new(vec![1, 2, 3], &drops),
                Tracked::new(vec![1, 2, 3], &drops),
                Exploding,
            )
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_skip_while() {
        let result = skip_while(vec![1, 2, 3, 4, 5, 5], |n| *n < 3).collect::<Vec<_>>();
        assert_eq!(result, vec![3, 4, 5, 5]);
    }

    #[test]
    fn test_skip_while_does_not_retest() {
        let result = skip_while(vec![1, 5, 1, 2], |n| *n < 3).collect::<Vec<_>>();
        assert_eq!(result, vec![5, 1, 2]);
    }

    #[test]
    fn test_skip_while_predicate_calls() {
        let calls = Cell::new(0);
        let iter = skip_while(vec![1, 2, 9, 1, 1, 1], |n| {
            calls.set(calls.get() + 1);
            *n < 3
        });
        assert_eq!(iter.count(), 4);
        assert_eq!(calls.get(), 3);
    }

    // Yields its items with a gap: `None` after the first one.
    struct Resuming {
        items: std::vec::IntoIter<Option<i32>>,
    }

    impl Iterator for Resuming {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.items.next().flatten()
        }
    }

    #[test]
    fn test_skip_while_keeps_testing_after_source_gap() {
        let source = Resuming {
            items: vec![Some(1), None, Some(1), Some(4), Some(1)].into_iter(),
        };
        let mut iter = skip_while(source, |n| *n < 3);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_skip_while_gap_matches_std() {
        let items = vec![Some(1), None, Some(1)];
        let mut ours = skip_while(
            Resuming {
                items: items.clone().into_iter(),
            },
            |n| *n < 3,
        );
        let mut expected = Resuming {
            items: items.into_iter(),
        }
        .skip_while(|n| *n < 3);
        assert_eq!(ours.next(), expected.next());
        assert_eq!(ours.next(), expected.next());
        assert_eq!(ours.next(), None);
    }

    #[test]
    fn test_skip_while_everything() {
        assert_eq!(skip_while(vec![1, 2], |_| true).next(), None);
    }

    #[test]
    fn test_skip_while_lazy_on_infinite() {
        let result = skip_while(0.., |n| *n < 10).take(2).collect::<Vec<_>>();
        assert_eq!(result, vec![10, 11]);
    }

    #[test]
    fn test_skip_while_size_hint() {
        let mut iter = skip_while(vec![1, 5, 6], |n| *n < 3);
        assert_eq!(iter.size_hint(), (0, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
    }

    #[test]
    fn test_filter() {
        let result = filter(vec![1, 2, 3, 4, 5, 5], |n| n % 2 == 1).collect::<Vec<_>>();
        assert_eq!(result, vec![1, 3, 5, 5]);
    }

    #[test]
    fn test_filter_lazy_on_infinite() {
        let result = filter(1.., |n| n % 4 == 0).take(3).collect::<Vec<_>>();
        assert_eq!(result, vec![4, 8, 12]);
    }
}
