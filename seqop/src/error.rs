use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Sequence operator error
///
/// Raised synchronously by the eager operators at the point of detection.
/// There is no default-value fallback: a caller that wants one checks
/// with `any` first, or inspects the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
pub enum Error {
    /// No matching element.
    ///
    /// `first`, `last` or `single` was called and no element of the
    /// sequence satisfied the predicate.
    NotFound,
    /// More than one matching element.
    ///
    /// `single` was called and two or more elements of the sequence
    /// satisfied the predicate.
    MultipleMatches,
    /// Index out of range.
    ///
    /// `element_at` was called with an index that is negative, or that is
    /// greater than or equal to the length of the sequence.
    IndexOutOfRange,
}

impl Error {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_variant_name() {
        assert_eq!(Error::NotFound.code(), "NotFound");
        assert_eq!(Error::MultipleMatches.code(), "MultipleMatches");
        assert_eq!(Error::IndexOutOfRange.code(), "IndexOutOfRange");
    }

    #[test]
    fn test_message_and_note() {
        let e = Error::IndexOutOfRange;
        assert_eq!(e.message(), "Index out of range.");
        assert!(e.note().starts_with("`element_at` was called"));
    }
}
