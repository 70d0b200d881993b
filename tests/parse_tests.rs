//! Integration tests for the textual span form

use numspan::{ParseSpanError, Span};

#[test]
fn test_parse_then_iterate() {
    let span: Span = "2..=4".parse().unwrap();
    let values: Vec<i64> = span.into_iter().collect();
    assert_eq!(values, vec![2, 3, 4]);
}

#[test]
fn test_parse_unbounded_then_take() {
    let span: Span = "100..".parse().unwrap();
    let values: Vec<i64> = span.into_iter().take(3).collect();
    assert_eq!(values, vec![100, 101, 102]);
}

#[test]
fn test_parsed_empty_span_yields_nothing() {
    let span: Span = "5..=1".parse().unwrap();
    assert_eq!(span.cursor().count(), 0);
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = "abc".parse::<Span>().unwrap_err();
    assert_eq!(err.to_string(), "expected `..` or `..=` between the bounds");

    let err = "1..5".parse::<Span>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "bounded spans are inclusive: use `..=` before the upper bound"
    );

    assert!(matches!(
        "z..".parse::<Span>().unwrap_err(),
        ParseSpanError::InvalidFrom(_)
    ));
}

#[test]
fn test_error_exposes_its_source() {
    use std::error::Error;

    let err = "1..=zzz".parse::<Span>().unwrap_err();
    assert!(err.source().is_some());

    let err = "1..5".parse::<Span>().unwrap_err();
    assert!(err.source().is_none());
}

#[test]
fn test_display_and_parse_agree() {
    for text in ["1..=5", "-3..=3", "7.."] {
        let span: Span = text.parse().unwrap();
        assert_eq!(span.to_string(), text);
    }
}
