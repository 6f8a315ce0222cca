use pretty_assertions::assert_eq;
use remap_ir::{DirectiveKind, TypeRef};

use super::*;
use crate::MethodState;

#[test]
fn abstract_method_required() {
    let interner = StringInterner::new();
    let problem = DelegationProblem::AbstractMethodRequired {
        span: Span::new(5, 30),
        method: interner.intern("convert"),
        body: BodyKind::Default,
    };
    let diag = problem.into_diagnostic(&interner);

    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert_eq!(diag.message, "delegating method `convert` must be abstract");
    assert_eq!(diag.primary_span(), Some(Span::new(5, 30)));
    assert_eq!(diag.labels[0].message, "`convert` already has a default body");
    assert!(!problem.is_warning());
    assert!(!problem.is_fatal());
}

#[test]
fn conflicting_directives_lists_each_directive() {
    let interner = StringInterner::new();
    let problem = DelegationProblem::ConflictingDirectives {
        span: Span::new(0, 10),
        method: interner.intern("convert"),
        directives: DirectiveKind::Mapping.flag() | DirectiveKind::BeanMapping.flag(),
    };
    let diag = problem.into_diagnostic(&interner);

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.labels[0].message, "found `@Mapping`, `@BeanMapping`");
    assert_eq!(diag.suggestions, vec!["remove `@Mapping`, `@BeanMapping`".to_owned()]);
}

#[test]
fn no_delegate_found_names_the_method() {
    let interner = StringInterner::new();
    let problem = DelegationProblem::NoDelegateFound {
        span: Span::new(40, 90),
        method: interner.intern("mapPersonToDto"),
        unit: interner.intern("PersonMapper"),
        qualifier: Some(Qualifier::ByName(interner.intern("personMapping"))),
        attribute_span: Span::new(40, 57),
    };
    let diag = problem.into_diagnostic(&interner);

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.message, "no delegate found for `mapPersonToDto`");
    assert_eq!(diag.primary_span(), Some(Span::new(40, 90)));
    let secondary: Vec<_> = diag.secondary_labels().map(|l| l.span).collect();
    assert_eq!(secondary, vec![Span::new(40, 57)]);
    assert_eq!(
        diag.notes,
        vec!["candidates were restricted by qualifier name `personMapping`".to_owned()]
    );
    assert!(problem.is_fatal());
    assert_eq!(problem.method(), interner.intern("mapPersonToDto"));
}

#[test]
fn no_delegate_found_without_qualifier_has_no_note() {
    let interner = StringInterner::new();
    let problem = DelegationProblem::NoDelegateFound {
        span: Span::DUMMY,
        method: interner.intern("convert"),
        unit: interner.intern("PersonMapper"),
        qualifier: None,
        attribute_span: Span::DUMMY,
    };
    assert!(problem.into_diagnostic(&interner).notes.is_empty());

    let typed = DelegationProblem::NoDelegateFound {
        span: Span::DUMMY,
        method: interner.intern("convert"),
        unit: interner.intern("PersonMapper"),
        qualifier: Some(Qualifier::ByType(TypeRef::new(interner.intern("Detailed")))),
        attribute_span: Span::DUMMY,
    };
    assert_eq!(
        typed.into_diagnostic(&interner).notes,
        vec!["candidates were restricted by qualifier type `Detailed`".to_owned()]
    );
}

#[test]
fn warnings() {
    let interner = StringInterner::new();
    let same_unit = DelegationProblem::SameUnitDelegate {
        span: Span::new(1, 2),
        method: interner.intern("convert"),
        delegate: interner.intern("toDto"),
    };
    let diag = same_unit.into_diagnostic(&interner);
    assert!(same_unit.is_warning());
    assert!(diag.is_warning());
    assert_eq!(diag.code, ErrorCode::W1001);
    assert_eq!(diag.message, "`convert` delegates to `toDto` in the same mapper");

    let ambiguous = DelegationProblem::AmbiguousDelegate {
        span: Span::new(1, 2),
        method: interner.intern("convert"),
        chosen: interner.intern("first"),
        others: vec![interner.intern("second"), interner.intern("third")],
    };
    let diag = ambiguous.into_diagnostic(&interner);
    assert!(ambiguous.is_warning());
    assert_eq!(diag.code, ErrorCode::W1002);
    assert_eq!(diag.notes, vec!["also compatible: `second`, `third`".to_owned()]);
}

#[test]
fn internal_error_wraps_transition() {
    let interner = StringInterner::new();
    let problem = DelegationProblem::Internal {
        span: Span::new(0, 1),
        method: interner.intern("convert"),
        error: TransitionError {
            from: MethodState::Rendered,
            to: MethodState::Resolving,
        },
    };
    let diag = problem.into_diagnostic(&interner);
    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(
        diag.message,
        "internal error while generating `convert`: illegal method state transition: rendered -> resolving"
    );
    assert!(problem.is_fatal());
    assert_eq!(problem.span(), Span::new(0, 1));
}
