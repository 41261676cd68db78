use std::hash::{BuildHasher, Hasher};

use ahash::{HashMap, HashMapExt, RandomState};

use crate::comparer::EqualityComparer;

/// A hash set whose notion of equality is supplied from outside.
///
/// Values are bucketed by the hash the comparer computes for them; inside
/// a bucket they're told apart by the comparer's `equals`. The comparer is
/// passed in on each call rather than stored, so an iterator can own both
/// the comparer and one or more sets without borrowing from itself.
///
/// This is the set the hash-based operators are built on, exposed for
/// callers that need the same comparer-driven membership test.
///
/// ```
/// use seqop::{CaseInsensitive, ComparerSet};
///
/// let mut set = ComparerSet::new();
/// assert!(set.insert("Rust", &CaseInsensitive));
/// assert!(!set.insert("rust", &CaseInsensitive));
/// assert!(set.contains(&"RUST", &CaseInsensitive));
/// assert!(set.remove(&"rUsT", &CaseInsensitive));
/// assert!(set.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ComparerSet<T> {
    buckets: HashMap<u64, Vec<T>>,
    state: RandomState,
    len: usize,
}

impl<T> ComparerSet<T> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            state: RandomState::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(capacity),
            state: RandomState::new(),
            len: 0,
        }
    }

    /// Build a set out of every value of `iter`, keeping the first of any
    /// run of equal values.
    pub fn from_iter_with<C: EqualityComparer<T>>(
        iter: impl IntoIterator<Item = T>,
        comparer: &C,
    ) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = Self::with_capacity(lower);
        for value in iter {
            set.insert(value, comparer);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn hash_of<C: EqualityComparer<T>>(&self, value: &T, comparer: &C) -> u64 {
        let mut hasher = self.state.build_hasher();
        comparer.hash(value, &mut hasher);
        hasher.finish()
    }

    pub fn contains<C: EqualityComparer<T>>(&self, value: &T, comparer: &C) -> bool {
        let hash = self.hash_of(value, comparer);
        self.buckets
            .get(&hash)
            .is_some_and(|bucket| bucket.iter().any(|v| comparer.equals(v, value)))
    }

    /// Insert `value`; returns `false` (and drops `value`) if an equal
    /// value was already present.
    pub fn insert<C: EqualityComparer<T>>(&mut self, value: T, comparer: &C) -> bool {
        let hash = self.hash_of(&value, comparer);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|v| comparer.equals(v, &value)) {
            return false;
        }
        bucket.push(value);
        self.len += 1;
        true
    }

    /// Remove the value equal to `value`; returns whether one was present.
    pub fn remove<C: EqualityComparer<T>>(&mut self, value: &T, comparer: &C) -> bool {
        let hash = self.hash_of(value, comparer);
        let Some(bucket) = self.buckets.get_mut(&hash) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|v| comparer.equals(v, value)) else {
            return false;
        };
        bucket.swap_remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&hash);
        }
        self.len -= 1;
        true
    }
}

impl<T> Default for ComparerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
