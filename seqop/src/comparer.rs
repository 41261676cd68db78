use std::hash::{Hash, Hasher};

/// An equality relation over `T` together with a hash that is consistent
/// with it: if `equals(a, b)` then `a` and `b` must hash the same.
///
/// The hash-based operators (`distinct`, `except`, `intersect`, `union`)
/// rely on that consistency; the scanning operators (`contains_by`,
/// `sequence_equal_by`) only use `equals`.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

impl<T: ?Sized, C: EqualityComparer<T>> EqualityComparer<T> for &C {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash(value, state)
    }
}

/// The natural equality of a type: its `Eq` and `Hash` implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparer;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultComparer {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state)
    }
}

/// Compares values by a key projected out of them.
///
/// ```
/// use seqop::{distinct_by, KeyComparer};
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = KeyComparer::new(|w: &&str| w.as_bytes()[0]);
/// let firsts = distinct_by(words, by_initial).collect::<Vec<_>>();
/// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyComparer<F> {
    key: F,
}

impl<F> KeyComparer<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> EqualityComparer<T> for KeyComparer<F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state)
    }
}

/// ASCII case-insensitive comparison of strings.
///
/// Non-ASCII characters compare by code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> EqualityComparer<T> for CaseInsensitive {
    fn equals(&self, a: &T, b: &T) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        // must agree with eq_ignore_ascii_case, so hash the folded bytes
        let s = value.as_ref();
        state.write_usize(s.len());
        for b in s.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}
