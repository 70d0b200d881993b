//! Integration tests for the step protocol

use numspan::{Span, Step};

#[test]
fn test_bounded_step_scenario() {
    let mut cursor = Span::new(1, 5).cursor();
    assert_eq!(cursor.step(), Step::Value(1));
    assert_eq!(cursor.step(), Step::Value(2));
    assert_eq!(cursor.step(), Step::Value(3));
    assert_eq!(cursor.step(), Step::Value(4));
    assert_eq!(cursor.step(), Step::Value(5));
    assert_eq!(cursor.step(), Step::Done);
    assert_eq!(cursor.step(), Step::Done);
}

#[test]
fn test_ascending_sequence_and_count() {
    for (from, to) in [(1, 5), (-3, 3), (0, 0), (-10, -5)] {
        let span = Span::new(from, to);
        let mut cursor = span.cursor();
        let mut produced = Vec::new();
        while let Step::Value(value) = cursor.step() {
            produced.push(value);
        }
        let expected: Vec<i64> = (from..=to).collect();
        assert_eq!(produced, expected, "span {}", span);
        assert_eq!(produced.len() as u128, span.len().unwrap());
        assert_eq!(cursor.step(), Step::Done);
    }
}

#[test]
fn test_empty_span_first_step_is_done() {
    let mut cursor = Span::new(5, 1).cursor();
    assert_eq!(cursor.step(), Step::Done);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_interleaved_cursors_are_independent() {
    let span = Span::new(1, 3);
    let mut a = span.cursor();
    let mut b = span.cursor();

    assert_eq!(a.step(), Step::Value(1));
    assert_eq!(b.step(), Step::Value(1));
    assert_eq!(a.step(), Step::Value(2));
    assert_eq!(b.step(), Step::Value(2));
    assert_eq!(a.step(), Step::Value(3));
    assert_eq!(a.step(), Step::Done);
    // exhausting one pass leaves the other untouched
    assert_eq!(b.step(), Step::Value(3));
    assert_eq!(b.step(), Step::Done);
}

#[test]
fn test_step_helpers_drive_a_manual_loop() {
    let mut cursor = Span::new(1, 4).cursor();
    let mut sum = 0;
    loop {
        let step = cursor.step();
        if step.is_done() {
            break;
        }
        sum += step.unwrap_or(0);
    }
    assert_eq!(sum, 10);
}

#[test]
fn test_single_value_span() {
    let mut cursor = Span::new(7, 7).cursor();
    assert_eq!(cursor.step(), Step::Value(7));
    assert_eq!(cursor.step(), Step::Done);
}
