//! # Step Results
//!
//! Implements the tagged result of one cursor step:
//! - `Step::Value(n)`: a value is available, iteration continues
//! - `Step::Done`: the pass is exhausted, no value available
//!
//! `Done` is a normal terminal signal, not an error. Conversions to and
//! from `Option<i64>` bridge the explicit protocol and the `Iterator`
//! trait.

use serde::{Deserialize, Serialize};

/// Result of one step: a produced value, or the terminal signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// A value is available and iteration continues
    Value(i64),
    /// Iteration is exhausted
    Done,
}

impl Step {
    /// Returns true if the step produced a value
    pub fn is_value(&self) -> bool {
        matches!(self, Step::Value(_))
    }

    /// Returns true if the step hit the terminal signal
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Extracts the produced value, or None if the step was Done
    pub fn value(self) -> Option<i64> {
        match self {
            Step::Value(v) => Some(v),
            Step::Done => None,
        }
    }

    /// Returns the produced value, or the provided default on Done
    pub fn unwrap_or(self, default: i64) -> i64 {
        match self {
            Step::Value(v) => v,
            Step::Done => default,
        }
    }

    /// Applies a function to the produced value, passing Done through
    pub fn map<F: FnOnce(i64) -> i64>(self, op: F) -> Step {
        match self {
            Step::Value(v) => Step::Value(op(v)),
            Step::Done => Step::Done,
        }
    }
}

impl From<Step> for Option<i64> {
    fn from(step: Step) -> Self {
        step.value()
    }
}

impl From<Option<i64>> for Step {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(v) => Step::Value(v),
            None => Step::Done,
        }
    }
}
