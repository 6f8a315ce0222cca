#![allow(clippy::unwrap_used, reason = "tests unwrap builder results")]

use remap_ir::{MethodDecl, ModelBuilder, Span, StringInterner};

use super::*;

#[test]
fn first_name_wins_over_types() {
    let interner = StringInterner::new();
    let first = interner.intern("first");
    let attrs = DelegateAttrs::new(Span::DUMMY)
        .qualified_by(TypeRef::new(interner.intern("Detailed")))
        .qualified_by_name(first)
        .qualified_by_name(interner.intern("second"));

    assert_eq!(Qualifier::from_attrs(&attrs), Some(Qualifier::ByName(first)));
}

#[test]
fn first_type_without_names() {
    let interner = StringInterner::new();
    let detailed = TypeRef::new(interner.intern("Detailed"));
    let attrs = DelegateAttrs::new(Span::DUMMY)
        .qualified_by(detailed)
        .qualified_by(TypeRef::new(interner.intern("Brief")));

    assert_eq!(Qualifier::from_attrs(&attrs), Some(Qualifier::ByType(detailed)));
    assert_eq!(Qualifier::from_attrs(&DelegateAttrs::default()), None);
}

#[test]
fn name_matching_modes() {
    let interner = StringInterner::new();
    let mut builder = ModelBuilder::new(&interner);
    let unit = builder.add_unit("AddressMapper").unwrap();
    let by_identifier = builder.add_method(unit, MethodDecl::new("detailed")).unwrap();
    let by_tag = builder
        .add_method(unit, MethodDecl::new("toDetailedAddressDto").named("detailed"))
        .unwrap();
    let neither = builder.add_method(unit, MethodDecl::new("toAddressDto")).unwrap();
    let model = builder.finish();

    let qualifier = Qualifier::ByName(interner.intern("detailed"));
    let admitted = |matching: QualifierMatching| {
        [by_identifier, by_tag, neither]
            .map(|id| qualifier.admits(model.method(id), matching))
    };

    assert_eq!(admitted(QualifierMatching::Identifier), [true, false, false]);
    assert_eq!(admitted(QualifierMatching::NamedTag), [false, true, false]);
    assert_eq!(admitted(QualifierMatching::IdentifierOrTag), [true, true, false]);
}

#[test]
fn type_qualifier_admits_everything() {
    let interner = StringInterner::new();
    let mut builder = ModelBuilder::new(&interner);
    let unit = builder.add_unit("AddressMapper").unwrap();
    let id = builder.add_method(unit, MethodDecl::new("anything")).unwrap();
    let model = builder.finish();

    let qualifier = Qualifier::ByType(TypeRef::new(interner.intern("Detailed")));
    assert!(qualifier.admits(model.method(id), QualifierMatching::NamedTag));
}

#[test]
fn describe_for_messages() {
    let interner = StringInterner::new();
    let by_name = Qualifier::ByName(interner.intern("detailed"));
    let by_type = Qualifier::ByType(TypeRef::new(interner.intern("Detailed")));
    assert_eq!(by_name.describe(&interner), "name `detailed`");
    assert_eq!(by_type.describe(&interner), "type `Detailed`");
}
