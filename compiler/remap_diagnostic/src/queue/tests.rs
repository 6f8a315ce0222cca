use pretty_assertions::assert_eq;
use remap_ir::Span;

use super::*;

fn error_at(start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1003)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_flush_sorts_by_primary_span() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let _ = queue.emit_error(error_at(20, "second"));
    queue.add(Diagnostic::warning(ErrorCode::W1002).with_message("spanless"));
    let _ = queue.emit_error(error_at(5, "first"));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "spanless"]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn test_counts_by_severity() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());

    queue.add(Diagnostic::warning(ErrorCode::W1001).with_message("w"));
    assert!(queue.has_errors().is_none());
    assert_eq!(queue.warning_count(), 1);

    let _ = queue.emit_error(error_at(0, "e"));
    assert!(queue.has_errors().is_some());
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_deduplicates_identical_diagnostics() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(3, "same")));
    assert!(!queue.add(error_at(3, "same")));
    assert!(queue.add(error_at(4, "same")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(3, "same")));
    assert!(queue.add(error_at(3, "same")));
    assert_eq!(queue.peek().count(), 2);
}

#[test]
fn test_error_limit_appends_too_many_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(error_at(0, "a")));
    assert!(queue.add(error_at(1, "b")));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(2, "c")));
    assert!(queue.add(Diagnostic::warning(ErrorCode::W1001).with_message("still kept")));

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 4);
    assert_eq!(flushed[3].code, ErrorCode::E9002);
    assert_eq!(flushed[3].message, "aborting after 2 errors");
}
