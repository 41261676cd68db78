//! Query-style operators over sequences.
//!
//! A sequence is anything that implements [`IntoIterator`]: it is read once,
//! front to back, and may be infinite. Operators come in two kinds:
//!
//! - eager ones ([`all`], [`any`], [`contains`], [`first`], [`last`],
//!   [`single`], [`element_at`], [`count`], [`sequence_equal`]) read as much
//!   of their input as they need and return a value or an [`Error`];
//! - lazy ones ([`distinct`], [`except`], [`intersect`], [`union`],
//!   [`skip_while`], [`filter`]) return an iterator that reads its input only
//!   as it is itself pulled.
//!
//! Operators that compare elements take an optional [`EqualityComparer`]
//! through their `_by` form. Without one they use the type's own `Eq` and
//! `Hash` ([`DefaultComparer`]).
//!
//! ```
//! use seqop::{count, except, intersect, skip_while, union};
//!
//! let first = [1, 2, 3, 4, 5, 5];
//! let second = [4, 5, 6];
//! assert_eq!(except(first, second).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(intersect(first, second).collect::<Vec<_>>(), vec![4, 5]);
//! assert_eq!(union(first, second).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(count(first, |n| *n > 2), 4);
//! assert_eq!(skip_while(first, |n| *n < 3).collect::<Vec<_>>(), vec![3, 4, 5, 5]);
//! ```

mod algebra;
mod comparer;
pub mod error;
mod ext;
mod positional;
mod quantifier;
mod set;

pub use algebra::{
    distinct, distinct_by, except, except_by, intersect, intersect_by, union, union_by, Distinct,
    Except, Intersect, Union,
};
pub use comparer::{CaseInsensitive, DefaultComparer, EqualityComparer, KeyComparer};
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use positional::{
    count, element_at, filter, sequence_equal, sequence_equal_by, skip_while, Filter, SkipWhile,
};
pub use quantifier::{all, any, contains, contains_by, first, last, single};
pub use set::ComparerSet;
