use super::*;

#[test]
fn default_is_lenient() {
    let config = DelegationConfig::default();
    assert_eq!(config.qualifier_matching, QualifierMatching::IdentifierOrTag);
    assert_eq!(config.ambiguity, AmbiguityPolicy::FirstMatch);
    assert!(!config.warn_same_unit);
    assert_eq!(config.diagnostics, DiagnosticConfig::unlimited());
}

#[test]
fn strict_enables_every_warning() {
    let config = DelegationConfig::strict();
    assert_eq!(config.ambiguity, AmbiguityPolicy::Warn);
    assert!(config.warn_same_unit);
    assert_eq!(config.diagnostics.error_limit, 0);
    assert!(!config.diagnostics.deduplicate);
}

#[test]
fn builders_override_fields() {
    let config = DelegationConfig::default()
        .with_qualifier_matching(QualifierMatching::NamedTag)
        .with_ambiguity(AmbiguityPolicy::Warn)
        .with_diagnostics(DiagnosticConfig::default());
    assert_eq!(config.qualifier_matching, QualifierMatching::NamedTag);
    assert_eq!(config.ambiguity, AmbiguityPolicy::Warn);
    assert_eq!(config.diagnostics.error_limit, 10);
}
