//! Textual tree descriptions accepted on the command line.
//!
//! - `fixture:K`  random fixture for multiplier K
//! - `-` or empty  empty tree
//! - `5,3,8,1`     values inserted in order into a binary search tree

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::DomainError;

const FIXTURE_PREFIX: &str = "fixture:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSource {
    Empty,
    Fixture(i64),
    Values(Vec<i64>),
}

impl FromStr for TreeSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(Self::Empty);
        }

        let invalid = |message: String| DomainError::InvalidSource {
            input: s.to_string(),
            message,
        };

        if let Some(k) = trimmed.strip_prefix(FIXTURE_PREFIX) {
            return k
                .trim()
                .parse::<i64>()
                .map(Self::Fixture)
                .map_err(|e| invalid(format!("fixture multiplier: {e}")));
        }

        trimmed
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, part)| {
                part.parse::<i64>()
                    .map_err(|e| invalid(format!("value #{} '{}': {}", i + 1, part, e)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Values)
    }
}

impl fmt::Display for TreeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "-"),
            Self::Fixture(k) => write!(f, "{FIXTURE_PREFIX}{k}"),
            Self::Values(values) => write!(f, "{}", values.iter().join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", TreeSource::Empty)]
    #[case("-", TreeSource::Empty)]
    #[case("  ", TreeSource::Empty)]
    #[case("fixture:1", TreeSource::Fixture(1))]
    #[case("fixture: 3", TreeSource::Fixture(3))]
    #[case("7", TreeSource::Values(vec![7]))]
    #[case("5, 3,8,-1", TreeSource::Values(vec![5, 3, 8, -1]))]
    fn given_valid_text_when_parsing_then_returns_source(
        #[case] input: &str,
        #[case] expected: TreeSource,
    ) {
        assert_eq!(input.parse::<TreeSource>().unwrap(), expected);
    }

    #[rstest]
    #[case("fixture:x")]
    #[case("1,,2")]
    #[case("1,two,3")]
    fn given_invalid_text_when_parsing_then_returns_error(#[case] input: &str) {
        let err = input.parse::<TreeSource>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidSource { .. }));
        assert!(err.to_string().contains(input), "got: {err}");
    }

    #[test]
    fn given_source_when_displayed_then_parses_back() {
        for source in [
            TreeSource::Empty,
            TreeSource::Fixture(2),
            TreeSource::Values(vec![3, 1, 2]),
        ] {
            assert_eq!(source.to_string().parse::<TreeSource>().unwrap(), source);
        }
    }
}
