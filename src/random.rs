//! # Pseudorandom Sequences
//!
//! Infinite iterator over pseudorandom numbers:
//! - Linear Congruential Generator (LCG) with the classic glibc constants
//! - Deterministic streams from an explicit seed
//! - Clock-seeded streams for convenience
//!
//! The generator state is owned by the iterator, so independent streams
//! never interfere. Like an unbounded span, the stream never exhausts;
//! the consumer bounds it with `take()` or an explicit break.

use std::time::{SystemTime, UNIX_EPOCH};

/// The classic glibc LCG multiplier/increment pair
const RAND_A: u64 = 1103515245;
const RAND_C: u64 = 12345;

/// Infinite iterator yielding pseudorandom values in `0..32768`
#[derive(Debug, Clone)]
pub struct RandomIter {
    state: u64,
}

impl RandomIter {
    /// Create a stream from an explicit seed; equal seeds replay the
    /// same stream
    pub fn new(seed: u64) -> Self {
        RandomIter { state: seed }
    }

    /// Create a stream seeded from the system clock
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        RandomIter::new(seed)
    }

    /// Advance the generator and take its next 15-bit output
    fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(RAND_A).wrapping_add(RAND_C);
        ((self.state / 65536) % 32768) as u32
    }
}

impl Iterator for RandomIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
