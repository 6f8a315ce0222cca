//! Resolved delegation targets.

use smallvec::SmallVec;

use remap_ir::{Method, MethodId, Name, UsedUnit};

/// Where the delegate lives, relative to the delegating method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The delegating method's own unit; called without a receiver.
    SameUnit,
    /// A used unit; called through its access variable.
    OtherUnit(UsedUnit),
}

/// One call argument: the delegating method's parameter at the same position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterBinding {
    pub source: Name,
}

/// The resolved outcome of delegation for one method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodReference {
    pub target: MethodId,
    pub target_name: Name,
    pub owner: Owner,
    /// One per target parameter, in parameter order.
    pub bindings: SmallVec<[ParameterBinding; 4]>,
}

impl MethodReference {
    /// Access variable of the owning unit, for cross-unit calls.
    pub fn access_variable(&self) -> Option<Name> {
        match self.owner {
            Owner::SameUnit => None,
            Owner::OtherUnit(used) => Some(used.access_variable),
        }
    }

    pub fn is_same_unit(&self) -> bool {
        matches!(self.owner, Owner::SameUnit)
    }

    /// Argument names in call order.
    pub fn call_site(&self) -> SmallVec<[Name; 4]> {
        self.bindings.iter().map(|b| b.source).collect()
    }
}

/// Materialize a chosen candidate into a [`MethodReference`].
///
/// Binds each target parameter to the delegating method's parameter at the
/// same index. Target parameters past the delegating method's arity stay
/// unbound, which only happens for a name-qualified delegate.
pub fn build(delegating: &Method, target_id: MethodId, target: &Method, owner: Owner) -> MethodReference {
    let bindings = target
        .params
        .iter()
        .zip(&delegating.params)
        .map(|(_, source)| ParameterBinding {
            source: source.name,
        })
        .collect();

    MethodReference {
        target: target_id,
        target_name: target.name,
        owner,
        bindings,
    }
}
