use super::*;

#[test]
fn test_span_len_and_empty() {
    let span = Span::new(4, 10);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert!(Span::DUMMY.is_empty());
    assert!(Span::DUMMY.is_dummy());
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(5, 12));
    assert_eq!(merged, Span::new(5, 20));
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(1, 3)), "1..3");
}

#[test]
fn test_span_ordering_by_start() {
    assert!(Span::new(1, 50) < Span::new(2, 3));
}
