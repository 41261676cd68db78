use std::fmt::Debug;
use std::str::FromStr;

use crate::error::Error;

/// A comma-separated list of integers, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Numbers(pub(crate) Vec<i64>);

impl FromStr for Numbers {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Numbers(Vec::new()));
        }
        s.split(',')
            .map(|piece| {
                let piece = piece.trim();
                piece
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidNumber(piece.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Numbers)
    }
}

/// A comma-separated list of words. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Words(pub(crate) Vec<String>);

impl FromStr for Words {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Words(Vec::new()));
        }
        Ok(Words(s.split(',').map(|w| w.trim().to_string()).collect()))
    }
}

/// A predicate over integers: a comparison against a constant, or parity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Predicate {
    Lt(i64),
    Le(i64),
    Gt(i64),
    Ge(i64),
    Eq(i64),
    Ne(i64),
    Even,
    Odd,
}

impl Predicate {
    pub(crate) fn test(&self, n: &i64) -> bool {
        match *self {
            Predicate::Lt(v) => *n < v,
            Predicate::Le(v) => *n <= v,
            Predicate::Gt(v) => *n > v,
            Predicate::Ge(v) => *n >= v,
            Predicate::Eq(v) => *n == v,
            Predicate::Ne(v) => *n != v,
            Predicate::Even => n % 2 == 0,
            Predicate::Odd => n % 2 != 0,
        }
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "even" => return Ok(Predicate::Even),
            "odd" => return Ok(Predicate::Odd),
            _ => {}
        }
        // two-character operators first, so "<=" isn't read as "<"
        let operators: [(&str, fn(i64) -> Predicate); 6] = [
            ("<=", Predicate::Le),
            (">=", Predicate::Ge),
            ("==", Predicate::Eq),
            ("!=", Predicate::Ne),
            ("<", Predicate::Lt),
            (">", Predicate::Gt),
        ];
        for (op, make) in operators {
            if let Some(rest) = s.strip_prefix(op) {
                let value = rest
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidPredicate(s.to_string()))?;
                return Ok(make(value));
            }
        }
        Err(Error::InvalidPredicate(s.to_string()))
    }
}

/// Render a finished sequence on one line.
pub(crate) fn render_list<T: Debug>(items: impl IntoIterator<Item = T>) -> String {
    format!("{:?}", items.into_iter().collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,2,3", vec![1, 2, 3])]
    #[case(" 4 , -5 ,6 ", vec![4, -5, 6])]
    #[case("", vec![])]
    fn test_parse_numbers(#[case] input: &str, #[case] expected: Vec<i64>) {
        assert_eq!(input.parse::<Numbers>().unwrap(), Numbers(expected));
    }

    #[test]
    fn test_parse_numbers_invalid() {
        let err = "1,x,3".parse::<Numbers>().unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(s) if s == "x"));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(
            "a, B ,c".parse::<Words>().unwrap(),
            Words(vec!["a".to_string(), "B".to_string(), "c".to_string()])
        );
    }

    #[rstest]
    #[case("<3", Predicate::Lt(3))]
    #[case("<= 3", Predicate::Le(3))]
    #[case(">-2", Predicate::Gt(-2))]
    #[case(">=0", Predicate::Ge(0))]
    #[case("==4", Predicate::Eq(4))]
    #[case("!=4", Predicate::Ne(4))]
    #[case("even", Predicate::Even)]
    #[case(" odd ", Predicate::Odd)]
    fn test_parse_predicate(#[case] input: &str, #[case] expected: Predicate) {
        assert_eq!(input.parse::<Predicate>().unwrap(), expected);
    }

    #[rstest]
    #[case("3")]
    #[case("<")]
    #[case("~3")]
    fn test_parse_predicate_invalid(#[case] input: &str) {
        assert!(input.parse::<Predicate>().is_err());
    }

    #[test]
    fn test_predicate() {
        assert!(Predicate::Le(3).test(&3));
        assert!(!Predicate::Lt(3).test(&3));
        assert!(Predicate::Odd.test(&-3));
        assert!(Predicate::Even.test(&-4));
    }

    #[test]
    fn test_render_list() {
        assert_eq!(render_list(vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(render_list(Vec::<i64>::new()), "[]");
        assert_eq!(render_list(vec!["a"]), "[\"a\"]");
    }
}
