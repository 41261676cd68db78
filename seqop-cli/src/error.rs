use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid number in sequence: {0:?}")]
    InvalidNumber(String),
    #[error("Invalid predicate: {0:?} (expected <N, <=N, >N, >=N, ==N, !=N, even or odd)")]
    InvalidPredicate(String),
    #[error("{}: {}", .0.code(), .0.message())]
    Operator(#[from] seqop::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
