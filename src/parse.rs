//! # Span Parsing
//!
//! Implements `FromStr` for the textual span forms that `Display`
//! produces:
//! - `"1..=5"`: bounded, both ends inclusive
//! - `"1.."`: unbounded
//!
//! `"5..=1"` parses to an empty span, not an error. The exclusive form
//! `"1..5"` is rejected: spans have no exclusive upper bound.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::span::Span;

/// Error produced when parsing a span from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSpanError {
    /// Input has no `..` between the bounds
    MissingSeparator,
    /// Text follows `..` without the `=` marker, e.g. `"1..5"`
    ExclusiveUpperBound,
    /// Lower bound is not a valid integer
    InvalidFrom(ParseIntError),
    /// Upper bound is not a valid integer
    InvalidTo(ParseIntError),
}

impl fmt::Display for ParseSpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSpanError::MissingSeparator => {
                write!(f, "expected `..` or `..=` between the bounds")
            }
            ParseSpanError::ExclusiveUpperBound => {
                write!(f, "bounded spans are inclusive: use `..=` before the upper bound")
            }
            ParseSpanError::InvalidFrom(err) => write!(f, "invalid lower bound: {}", err),
            ParseSpanError::InvalidTo(err) => write!(f, "invalid upper bound: {}", err),
        }
    }
}

impl std::error::Error for ParseSpanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseSpanError::InvalidFrom(err) | ParseSpanError::InvalidTo(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for Span {
    type Err = ParseSpanError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (from, rest) = input
            .split_once("..")
            .ok_or(ParseSpanError::MissingSeparator)?;
        let from = from.parse().map_err(ParseSpanError::InvalidFrom)?;
        match rest.strip_prefix('=') {
            Some(to) => {
                let to = to.parse().map_err(ParseSpanError::InvalidTo)?;
                Ok(Span::new(from, to))
            }
            None if rest.is_empty() => Ok(Span::unbounded(from)),
            None => Err(ParseSpanError::ExclusiveUpperBound),
        }
    }
}
