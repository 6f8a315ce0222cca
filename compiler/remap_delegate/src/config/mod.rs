//! Configuration for the delegation pass.

use remap_diagnostic::DiagnosticConfig;

/// How a name qualifier selects candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum QualifierMatching {
    /// The candidate's identifier equals the qualifier name.
    Identifier,
    /// The candidate's naming tag equals the qualifier name.
    NamedTag,
    /// Either of the above.
    #[default]
    IdentifierOrTag,
}

/// What to do when more than one candidate of the winning pass matches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AmbiguityPolicy {
    /// Take the first match in declaration order.
    #[default]
    FirstMatch,
    /// Take the first match and warn, listing the others.
    Warn,
}

/// Configuration for a [`DelegationPass`](crate::DelegationPass).
///
/// Every rejected method gets its own diagnostic by default: the queue has
/// no error limit and does not deduplicate. A limit is opt-in through
/// [`with_diagnostics`](Self::with_diagnostics).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelegationConfig {
    pub qualifier_matching: QualifierMatching,
    pub ambiguity: AmbiguityPolicy,
    /// Warn when a delegate is found in the delegating method's own unit.
    pub warn_same_unit: bool,
    /// Limits and deduplication for the diagnostic queue.
    pub diagnostics: DiagnosticConfig,
}

impl Default for DelegationConfig {
    fn default() -> Self {
        DelegationConfig {
            qualifier_matching: QualifierMatching::default(),
            ambiguity: AmbiguityPolicy::default(),
            warn_same_unit: false,
            diagnostics: DiagnosticConfig::unlimited(),
        }
    }
}

impl DelegationConfig {
    /// Every warning enabled.
    pub fn strict() -> Self {
        DelegationConfig {
            ambiguity: AmbiguityPolicy::Warn,
            warn_same_unit: true,
            ..DelegationConfig::default()
        }
    }

    #[must_use]
    pub fn with_qualifier_matching(mut self, matching: QualifierMatching) -> Self {
        self.qualifier_matching = matching;
        self
    }

    #[must_use]
    pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

#[cfg(test)]
mod tests;
