//! # NumSpan - Lazy Integer Sequences
//!
//! Integer spans with explicit iteration cursors, bounded or unbounded.
//! A span is an immutable `{from, to}` descriptor; every iteration pass
//! gets its own cursor, pulled one value at a time.
//!
//! ## Iteration Protocol
//!
//! ```text
//! Span { from, to }
//!     ↓ [cursor()]
//! Cursor (one pass, owns `current`)
//!     ↓ [step()]
//! Step::Value(n), Step::Value(n + 1), ... Step::Done
//! ```
//!
//! Spans also participate in native iteration through `IntoIterator`,
//! so `for` loops and `collect()` work directly. Unbounded spans never
//! report `Done`; the consumer bounds them with `take()` or `break`.
//!
//! ## Usage
//!
//! ```
//! use numspan::{Span, Step};
//!
//! // the explicit protocol
//! let span = Span::new(1, 5);
//! let mut cursor = span.cursor();
//! assert_eq!(cursor.step(), Step::Value(1));
//! assert_eq!(cursor.step(), Step::Value(2));
//!
//! // native iteration: every pass gets a fresh cursor
//! let doubled: Vec<i64> = span.into_iter().map(|n| n * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! // unbounded spans never exhaust; the consumer cuts them off
//! let first: Vec<i64> = Span::unbounded(10).into_iter().take(3).collect();
//! assert_eq!(first, vec![10, 11, 12]);
//! ```

// Descriptors & Protocol
pub mod cursor;
pub mod span;
pub mod step;

// Textual Form
pub mod parse;

// Infinite Sources
pub mod random;

pub use cursor::Cursor;
pub use parse::ParseSpanError;
pub use random::RandomIter;
pub use span::{Span, Upper};
pub use step::Step;
