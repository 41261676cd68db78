// Quantifiers and scan-based search. All of these are eager: they pull
// from the source until the answer is known and return it directly.

use crate::comparer::EqualityComparer;
use crate::error;

/// Whether every element satisfies `predicate`. True for an empty
/// sequence; stops at the first element that fails.
pub fn all<T>(source: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> bool {
    for item in source {
        if !predicate(&item) {
            return false;
        }
    }
    true
}

/// Whether any element satisfies `predicate`. False for an empty
/// sequence; stops at the first element that passes.
pub fn any<T>(source: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> bool {
    for item in source {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Whether `item` occurs in the sequence under natural equality.
pub fn contains<T: PartialEq>(source: impl IntoIterator<Item = T>, item: &T) -> bool {
    any(source, |candidate| candidate == item)
}

/// Whether `item` occurs in the sequence under `comparer`.
pub fn contains_by<T, C: EqualityComparer<T>>(
    source: impl IntoIterator<Item = T>,
    item: &T,
    comparer: C,
) -> bool {
    any(source, |candidate| comparer.equals(candidate, item))
}

/// The first element satisfying `predicate`.
///
/// Fails with [`Error::NotFound`](crate::Error::NotFound) when nothing
/// matches.
pub fn first<T>(
    source: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> error::Result<T> {
    for item in source {
        if predicate(&item) {
            return Ok(item);
        }
    }
    log::debug!("first: no element matched");
    Err(error::Error::NotFound)
}

/// The last element satisfying `predicate`.
///
/// A one-pass sequence can't be read from the end, so this always
/// consumes the whole source, holding on to the latest match only.
pub fn last<T>(
    source: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> error::Result<T> {
    let mut found = None;
    for item in source {
        if predicate(&item) {
            found = Some(item);
        }
    }
    found.ok_or_else(|| {
        log::debug!("last: no element matched");
        error::Error::NotFound
    })
}

/// The only element satisfying `predicate`.
///
/// Fails with [`Error::NotFound`](crate::Error::NotFound) if there is no
/// match and with [`Error::MultipleMatches`](crate::Error::MultipleMatches)
/// as soon as a second match turns up.
pub fn single<T>(
    source: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> error::Result<T> {
    let mut matches = source.into_iter().filter(|item| predicate(item));
    if let Some(one) = matches.next() {
        if matches.next().is_none() {
            Ok(one)
        } else {
            log::debug!("single: more than one element matched");
            Err(error::Error::MultipleMatches)
        }
    } else {
        log::debug!("single: no element matched");
        Err(error::Error::NotFound)
    }
}
