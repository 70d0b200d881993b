//! Walkthrough of the span iteration protocol.
//!
//! Run with: cargo run --example iterate_span

use numspan::{Span, Step};

fn main() {
    // arrays are iterable out of the box; spans opt in through IntoIterator
    let arr = [1, 2, 3];
    for value in arr {
        println!("array value: {}", value);
    }

    let span = Span::new(1, 5);
    println!("\nspan {}:", span);
    for value in &span {
        println!("  {}", value);
    }

    // materialize the whole sequence at once
    let collected: Vec<i64> = span.into_iter().collect();
    println!("\ncollected: {:?}", collected);

    // under the hood: one cursor per pass, stepped by hand
    let mut cursor = span.cursor();
    loop {
        match cursor.step() {
            Step::Value(value) => println!("step -> {}", value),
            Step::Done => {
                println!("step -> done");
                break;
            }
        }
    }
}
