use clap::Args;
use seqop::{CaseInsensitive, DefaultComparer, EqualityComparer, SequenceExt};

use crate::common::{render_list, Numbers, Predicate, Words};
use crate::error::Result;

/// Arguments of the operators that run a predicate over integers.
#[derive(Debug, Args)]
pub(crate) struct PredicateArgs {
    /// Comma-separated integers, e.g. 1,2,3
    #[arg(allow_hyphen_values = true)]
    pub(crate) sequence: Numbers,
    /// Predicate: <N, <=N, >N, >=N, ==N, !=N, even or odd
    #[arg(long = "where", short = 'w', allow_hyphen_values = true)]
    pub(crate) predicate: Predicate,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum PredicateOp {
    All,
    Any,
    First,
    Last,
    Single,
    Count,
    SkipWhile,
    Where,
}

impl PredicateArgs {
    pub(crate) fn run(&self, op: PredicateOp) -> Result<String> {
        let sequence = self.sequence.0.iter().copied();
        let p = |n: &i64| self.predicate.test(n);
        log::debug!("{:?} over {} values with {:?}", op, self.sequence.0.len(), self.predicate);
        let output = match op {
            PredicateOp::All => seqop::all(sequence, p).to_string(),
            PredicateOp::Any => seqop::any(sequence, p).to_string(),
            PredicateOp::First => seqop::first(sequence, p)?.to_string(),
            PredicateOp::Last => seqop::last(sequence, p)?.to_string(),
            PredicateOp::Single => seqop::single(sequence, p)?.to_string(),
            PredicateOp::Count => seqop::count(sequence, p).to_string(),
            PredicateOp::SkipWhile => render_list(seqop::skip_while(sequence, p)),
            PredicateOp::Where => render_list(seqop::filter(sequence, p)),
        };
        Ok(output)
    }
}

#[derive(Debug, Args)]
pub(crate) struct ContainsArgs {
    /// Comma-separated words
    #[arg(allow_hyphen_values = true)]
    pub(crate) sequence: Words,
    /// The word to look for
    #[arg(allow_hyphen_values = true)]
    pub(crate) item: String,
    /// Compare words ignoring ASCII case
    #[arg(long)]
    pub(crate) ignore_case: bool,
}

impl ContainsArgs {
    pub(crate) fn run(&self) -> String {
        let sequence = self.sequence.0.iter().cloned();
        let item = self.item.trim().to_string();
        if self.ignore_case {
            seqop::contains_by(sequence, &item, CaseInsensitive).to_string()
        } else {
            seqop::contains(sequence, &item).to_string()
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DistinctArgs {
    /// Comma-separated words
    #[arg(allow_hyphen_values = true)]
    pub(crate) sequence: Words,
    /// Compare words ignoring ASCII case
    #[arg(long)]
    pub(crate) ignore_case: bool,
}

impl DistinctArgs {
    pub(crate) fn run(&self) -> String {
        let sequence = self.sequence.0.iter().cloned();
        if self.ignore_case {
            render_list(sequence.distinct_by(CaseInsensitive))
        } else {
            render_list(sequence.distinct())
        }
    }
}

/// Arguments of the operators that combine two sequences of words.
#[derive(Debug, Args)]
pub(crate) struct PairArgs {
    /// First sequence, comma-separated words
    #[arg(allow_hyphen_values = true)]
    pub(crate) first: Words,
    /// Second sequence, comma-separated words
    #[arg(allow_hyphen_values = true)]
    pub(crate) second: Words,
    /// Compare words ignoring ASCII case
    #[arg(long)]
    pub(crate) ignore_case: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum PairOp {
    Except,
    Intersect,
    Union,
    SequenceEqual,
}

impl PairArgs {
    pub(crate) fn run(&self, op: PairOp) -> String {
        if self.ignore_case {
            self.run_with(op, CaseInsensitive)
        } else {
            self.run_with(op, DefaultComparer)
        }
    }

    fn run_with<C: EqualityComparer<String>>(&self, op: PairOp, comparer: C) -> String {
        let first = self.first.0.iter().cloned();
        let second = self.second.0.iter().cloned();
        match op {
            PairOp::Except => render_list(first.except_by(second, comparer)),
            PairOp::Intersect => render_list(first.intersect_by(second, comparer)),
            PairOp::Union => render_list(first.union_by(second, comparer)),
            PairOp::SequenceEqual => first.sequence_equal_by(second, comparer).to_string(),
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ElementAtArgs {
    /// Comma-separated words
    #[arg(allow_hyphen_values = true)]
    pub(crate) sequence: Words,
    /// Zero-based position
    #[arg(allow_negative_numbers = true)]
    pub(crate) index: i64,
}

impl ElementAtArgs {
    pub(crate) fn run(&self) -> Result<String> {
        let element = seqop::element_at(self.sequence.0.iter(), self.index)?;
        Ok(element.clone())
    }
}

/// Run the operators over a fixed pair of sequences and describe each
/// result, one per line.
pub(crate) fn demo() -> Vec<String> {
    let s: Vec<i64> = vec![1, 2, 3, 4, 5, 5];
    let other: Vec<i64> = vec![4, 5, 6];
    let describe = |what: &str, result: String| format!("{what}: {result}");
    let single = |p: fn(&i64) -> bool| match seqop::single(s.iter().copied(), p) {
        Ok(n) => n.to_string(),
        Err(e) => format!("error {}", e.code()),
    };
    vec![
        describe("sequence", render_list(s.iter())),
        describe("other", render_list(other.iter())),
        describe("all > 0", seqop::all(s.iter(), |n| **n > 0).to_string()),
        describe("any > 5", seqop::any(s.iter(), |n| **n > 5).to_string()),
        describe("contains 3", seqop::contains(s.iter().copied(), &3).to_string()),
        describe("distinct", render_list(seqop::distinct(s.iter().copied()))),
        describe(
            "except",
            render_list(seqop::except(s.iter().copied(), other.iter().copied())),
        ),
        describe(
            "intersect",
            render_list(seqop::intersect(s.iter().copied(), other.iter().copied())),
        ),
        describe(
            "union",
            render_list(seqop::union(s.iter().copied(), other.iter().copied())),
        ),
        describe("count > 2", seqop::count(s.iter(), |n| **n > 2).to_string()),
        describe(
            "skip while < 3",
            render_list(seqop::skip_while(s.iter().copied(), |n| *n < 3)),
        ),
        describe(
            "where odd",
            render_list(seqop::filter(s.iter().copied(), |n| n % 2 != 0)),
        ),
        describe("single == 4", single(|n: &i64| *n == 4)),
        describe("single > 3", single(|n: &i64| *n > 3)),
        describe("single > 10", single(|n: &i64| *n > 10)),
        describe(
            "element at 3",
            match seqop::element_at(s.iter().copied(), 3) {
                Ok(n) => n.to_string(),
                Err(e) => format!("error {}", e.code()),
            },
        ),
        describe(
            "sequence equal to itself",
            seqop::sequence_equal(s.iter(), s.iter()).to_string(),
        ),
    ]
}
