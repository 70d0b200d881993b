//! # Integer Span Descriptors
//!
//! Implements the immutable `{from, to}` pair that describes a sequence
//! of successive integers:
//! - Inclusive bounds on both ends
//! - `Upper::Unbounded` as the never-exhausting upper sentinel
//! - `from > to` is an empty span, not an error
//! - Every `cursor()` call begins an independent iteration pass
//!
//! A span participates in `for` loops and `collect()` through
//! `IntoIterator`; iterating the same span twice always replays the full
//! sequence because the descriptor itself never changes.

use std::fmt;
use std::ops::{RangeFrom, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

/// Upper bound of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upper {
    /// Inclusive upper bound
    At(i64),
    /// The unbounded sentinel: cursors over this bound never exhaust
    Unbounded,
}

impl Upper {
    /// Returns true if this is the unbounded sentinel
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Upper::Unbounded)
    }
}

/// An immutable integer span from `from` up to and including `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive lower bound
    pub from: i64,
    /// Inclusive upper bound, possibly unbounded
    pub to: Upper,
}

impl Span {
    /// Create a bounded span; `from > to` yields an empty span
    pub fn new(from: i64, to: i64) -> Self {
        Span {
            from,
            to: Upper::At(to),
        }
    }

    /// Create a span with no upper bound
    pub fn unbounded(from: i64) -> Self {
        Span {
            from,
            to: Upper::Unbounded,
        }
    }

    /// Begin one iteration pass; every call returns a fresh cursor
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.from, self.to)
    }

    /// Returns true if the span never exhausts
    pub fn is_unbounded(&self) -> bool {
        self.to.is_unbounded()
    }

    /// Returns true if the span contains no values
    pub fn is_empty(&self) -> bool {
        match self.to {
            Upper::At(to) => self.from > to,
            Upper::Unbounded => false,
        }
    }

    /// Returns true if `value` lies within the span's bounds
    pub fn contains(&self, value: i64) -> bool {
        value >= self.from
            && match self.to {
                Upper::At(to) => value <= to,
                Upper::Unbounded => true,
            }
    }

    /// Number of values the span produces, or None when unbounded
    ///
    /// Computed in wide arithmetic: the span covering the whole `i64`
    /// domain holds 2^64 values, one more than `u64` can count.
    pub fn len(&self) -> Option<u128> {
        match self.to {
            Upper::Unbounded => None,
            Upper::At(to) if self.from > to => Some(0),
            Upper::At(to) => Some((to as i128 - self.from as i128 + 1) as u128),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Upper::At(to) => write!(f, "{}..={}", self.from, to),
            Upper::Unbounded => write!(f, "{}..", self.from),
        }
    }
}

impl From<RangeInclusive<i64>> for Span {
    fn from(range: RangeInclusive<i64>) -> Self {
        Span::new(*range.start(), *range.end())
    }
}

impl From<RangeFrom<i64>> for Span {
    fn from(range: RangeFrom<i64>) -> Self {
        Span::unbounded(range.start)
    }
}

impl IntoIterator for Span {
    type Item = i64;
    type IntoIter = Cursor;

    fn into_iter(self) -> Cursor {
        self.cursor()
    }
}

impl<'a> IntoIterator for &'a Span {
    type Item = i64;
    type IntoIter = Cursor;

    fn into_iter(self) -> Cursor {
        self.cursor()
    }
}
