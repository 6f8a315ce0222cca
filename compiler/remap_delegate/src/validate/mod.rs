//! Preconditions a delegating method must meet before resolution.

use remap_ir::{MapperModel, MethodId};

use crate::DelegationProblem;

/// Check that a delegating method may delegate at all.
///
/// The abstract check runs first, so at most one problem is reported per
/// method. Both problems point at the method's declaration.
pub fn validate(model: &MapperModel, id: MethodId) -> Result<(), DelegationProblem> {
    let method = model.method(id);

    if !method.is_abstract() {
        return Err(DelegationProblem::AbstractMethodRequired {
            span: method.span,
            method: method.name,
            body: method.body,
        });
    }

    let conflicting = method.directives.conflicting();
    if !conflicting.is_empty() {
        return Err(DelegationProblem::ConflictingDirectives {
            span: method.span,
            method: method.name,
            directives: conflicting,
        });
    }

    Ok(())
}
