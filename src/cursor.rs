//! # Iteration Cursors
//!
//! Implements the mutable state of one iteration pass over a span:
//! - `step()` pulls the next value, advancing the cursor
//! - Two states per cursor: Active (initial) and Exhausted (terminal)
//! - Exhausted cursors answer `Done` forever; unbounded cursors never
//!   reach Exhausted
//!
//! Cursors are plain owned data. A span hands out a fresh cursor per
//! pass, so any number of passes can run side by side, including on
//! different threads, without touching each other.

use std::iter::FusedIterator;

use crate::span::Upper;
use crate::step::Step;

/// One iteration pass over a span
#[derive(Debug, Clone)]
pub struct Cursor {
    current: i64,
    to: Upper,
    exhausted: bool,
}

impl Cursor {
    pub(crate) fn new(from: i64, to: Upper) -> Self {
        Cursor {
            current: from,
            to,
            exhausted: false,
        }
    }

    /// Pull the next value, or the terminal signal once the pass is over
    ///
    /// `Done` is idempotent: once returned, every later call returns it
    /// again. An unbounded cursor never returns `Done`; past `i64::MAX`
    /// (2^63 steps in) it saturates and keeps yielding `i64::MAX`.
    pub fn step(&mut self) -> Step {
        if self.exhausted {
            return Step::Done;
        }
        if let Upper::At(to) = self.to {
            if self.current > to {
                self.exhausted = true;
                return Step::Done;
            }
        }
        let value = self.current;
        match self.current.checked_add(1) {
            Some(next) => self.current = next,
            // value is i64::MAX: a bounded pass just produced its final
            // value, an unbounded pass saturates at the domain edge
            None => {
                if let Upper::At(_) = self.to {
                    self.exhausted = true;
                }
            }
        }
        Step::Value(value)
    }

    /// Returns true once the cursor has reached its terminal state
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for Cursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.step().value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.to {
            Upper::Unbounded => (usize::MAX, None),
            Upper::At(to) if self.current > to => (0, Some(0)),
            Upper::At(to) => {
                let remaining = (to as i128 - self.current as i128 + 1) as u128;
                if remaining <= usize::MAX as u128 {
                    (remaining as usize, Some(remaining as usize))
                } else {
                    (usize::MAX, None)
                }
            }
        }
    }
}

impl FusedIterator for Cursor {}
