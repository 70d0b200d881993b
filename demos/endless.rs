//! Unbounded sequences: the consumer decides when to stop.
//!
//! Run with: cargo run --example endless

use numspan::{RandomIter, Span};

fn main() {
    // an unbounded span never reports Done; break out by hand
    for value in Span::unbounded(1) {
        if value > 5 {
            break;
        }
        println!("counted: {}", value);
    }

    // or cut the sequence down with take()
    let window: Vec<i64> = Span::unbounded(100).into_iter().take(4).collect();
    println!("window: {:?}", window);

    // the same shape works for infinite pseudorandom streams
    for value in RandomIter::from_entropy().take(4) {
        println!("random: {}", value);
    }
}
