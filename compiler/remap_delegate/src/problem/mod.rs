//! Delegation problem definitions.
//!
//! Problems describe what went wrong in structured form; `into_diagnostic`
//! turns them into user-facing diagnostics. Each variant carries the data
//! its message needs, as interned names.

use remap_diagnostic::{Diagnostic, ErrorCode};
use remap_ir::{BodyKind, DirectiveSet, Name, Span, StringInterner};

use crate::{Qualifier, TransitionError};

/// Problems found while generating delegating methods.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DelegationProblem {
    /// The delegating method already has a body.
    AbstractMethodRequired {
        span: Span,
        method: Name,
        body: BodyKind,
    },

    /// The delegating method carries directives that prescribe a body.
    ConflictingDirectives {
        span: Span,
        method: Name,
        /// Only the conflicting subset.
        directives: DirectiveSet,
    },

    /// Neither the used units nor the declaring unit offer a delegate.
    NoDelegateFound {
        span: Span,
        method: Name,
        /// Declaring unit.
        unit: Name,
        qualifier: Option<Qualifier>,
        /// Location of the delegate annotation.
        attribute_span: Span,
    },

    /// The delegate was found in the delegating method's own unit.
    SameUnitDelegate {
        span: Span,
        method: Name,
        delegate: Name,
    },

    /// More than one candidate matched; the first was used.
    AmbiguousDelegate {
        span: Span,
        method: Name,
        chosen: Name,
        /// The other matches, in search order.
        others: Vec<Name>,
    },

    /// The pipeline tried an illegal lifecycle transition.
    Internal {
        span: Span,
        method: Name,
        error: TransitionError,
    },
}

impl DelegationProblem {
    /// Get the primary span of this problem.
    pub fn span(&self) -> Span {
        match self {
            DelegationProblem::AbstractMethodRequired { span, .. }
            | DelegationProblem::ConflictingDirectives { span, .. }
            | DelegationProblem::NoDelegateFound { span, .. }
            | DelegationProblem::SameUnitDelegate { span, .. }
            | DelegationProblem::AmbiguousDelegate { span, .. }
            | DelegationProblem::Internal { span, .. } => *span,
        }
    }

    /// The delegating method the problem is about.
    pub fn method(&self) -> Name {
        match self {
            DelegationProblem::AbstractMethodRequired { method, .. }
            | DelegationProblem::ConflictingDirectives { method, .. }
            | DelegationProblem::NoDelegateFound { method, .. }
            | DelegationProblem::SameUnitDelegate { method, .. }
            | DelegationProblem::AmbiguousDelegate { method, .. }
            | DelegationProblem::Internal { method, .. } => *method,
        }
    }

    /// Check if this problem is a warning (vs error).
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            DelegationProblem::SameUnitDelegate { .. } | DelegationProblem::AmbiguousDelegate { .. }
        )
    }

    /// Check if this problem abandons the enclosing unit, not just the method.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DelegationProblem::NoDelegateFound { .. } | DelegationProblem::Internal { .. }
        )
    }

    /// Convert this problem into a diagnostic.
    ///
    /// Uses the interner to resolve interned `Name` fields to display strings.
    #[cold]
    pub fn into_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        match self {
            DelegationProblem::AbstractMethodRequired { span, method, body } => {
                let method = interner.lookup(*method);
                let found = match body {
                    BodyKind::Default => "a default body",
                    BodyKind::Concrete | BodyKind::Abstract => "a body",
                };
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(format!("delegating method `{method}` must be abstract"))
                    .with_label(*span, format!("`{method}` already has {found}"))
                    .with_note("only unimplemented methods can delegate")
                    .with_suggestion("remove the body, or remove the delegate annotation")
            }

            DelegationProblem::ConflictingDirectives {
                span,
                method,
                directives,
            } => {
                let method = interner.lookup(*method);
                let list = directives
                    .kinds()
                    .map(|kind| format!("`{kind}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                Diagnostic::error(ErrorCode::E1002)
                    .with_message(format!(
                        "delegating method `{method}` cannot carry mapping directives"
                    ))
                    .with_label(*span, format!("found {list}"))
                    .with_note("a delegating method's body is a single call to its delegate")
                    .with_suggestion(format!("remove {list}"))
            }

            DelegationProblem::NoDelegateFound {
                span,
                method,
                unit,
                qualifier,
                attribute_span,
            } => {
                let method = interner.lookup(*method);
                let unit = interner.lookup(*unit);
                let missing = match qualifier {
                    Some(Qualifier::ByName(_)) => "no matching method",
                    _ => "no compatible method",
                };
                let mut diag = Diagnostic::error(ErrorCode::E1003)
                    .with_message(format!("no delegate found for `{method}`"))
                    .with_label(
                        *span,
                        format!("{missing} in `{unit}` or the mappers it uses"),
                    )
                    .with_secondary_label(*attribute_span, "delegation requested here");
                if let Some(qualifier) = qualifier {
                    diag = diag.with_note(format!(
                        "candidates were restricted by qualifier {}",
                        qualifier.describe(interner)
                    ));
                }
                diag.with_suggestion(
                    "declare a public method with the same parameter types and return type",
                )
            }

            DelegationProblem::SameUnitDelegate {
                span,
                method,
                delegate,
            } => {
                let method = interner.lookup(*method);
                let delegate = interner.lookup(*delegate);
                Diagnostic::warning(ErrorCode::W1001)
                    .with_message(format!(
                        "`{method}` delegates to `{delegate}` in the same mapper"
                    ))
                    .with_label(*span, "resolved within the declaring mapper")
            }

            DelegationProblem::AmbiguousDelegate {
                span,
                method,
                chosen,
                others,
            } => {
                let method = interner.lookup(*method);
                let chosen = interner.lookup(*chosen);
                let others = others
                    .iter()
                    .map(|n| format!("`{}`", interner.lookup(*n)))
                    .collect::<Vec<_>>()
                    .join(", ");
                Diagnostic::warning(ErrorCode::W1002)
                    .with_message(format!(
                        "`{method}` has more than one compatible delegate; using `{chosen}`"
                    ))
                    .with_label(*span, format!("delegates to `{chosen}`"))
                    .with_note(format!("also compatible: {others}"))
                    .with_suggestion("add a name qualifier to pick one explicitly")
            }

            DelegationProblem::Internal {
                span,
                method,
                error,
            } => {
                let method = interner.lookup(*method);
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("internal error while generating `{method}`: {error}"))
                    .with_label(*span, "while generating this method")
            }
        }
    }
}

#[cfg(test)]
mod tests;
