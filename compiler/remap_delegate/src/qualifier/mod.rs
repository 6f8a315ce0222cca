//! Qualifiers narrowing delegate candidates.

use remap_ir::{DelegateAttrs, Method, Name, StringLookup, TypeRef};

use crate::QualifierMatching;

/// A candidate filter requested by the delegating method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// Select candidates by name (see [`QualifierMatching`]).
    ByName(Name),
    /// Type qualifier. Carried through unresolved; candidates are selected
    /// by signature compatibility alone.
    ByType(TypeRef),
}

impl Qualifier {
    /// The qualifier a delegate annotation requests, if any.
    ///
    /// Only the first name entry is used. Without a name entry, the first
    /// type entry becomes a [`Qualifier::ByType`].
    pub fn from_attrs(attrs: &DelegateAttrs) -> Option<Self> {
        attrs
            .qualified_by_name
            .first()
            .map(|name| Qualifier::ByName(*name))
            .or_else(|| attrs.qualified_by.first().map(|ty| Qualifier::ByType(*ty)))
    }

    /// Check the name filter of this qualifier against a candidate.
    ///
    /// A name match is sufficient on its own; the resolver does not also
    /// require signature compatibility for [`Qualifier::ByName`].
    pub fn admits(&self, candidate: &Method, matching: QualifierMatching) -> bool {
        match *self {
            Qualifier::ByName(name) => {
                let by_identifier = candidate.name == name;
                let by_tag = candidate.named == Some(name);
                match matching {
                    QualifierMatching::Identifier => by_identifier,
                    QualifierMatching::NamedTag => by_tag,
                    QualifierMatching::IdentifierOrTag => by_identifier || by_tag,
                }
            }
            Qualifier::ByType(_) => true,
        }
    }

    /// Human-readable form for diagnostics: ``name `x` `` or ``type `T` ``.
    pub fn describe(&self, interner: &dyn StringLookup) -> String {
        match *self {
            Qualifier::ByName(name) => format!("name `{}`", interner.lookup(name)),
            Qualifier::ByType(ty) => format!("type `{}`", interner.lookup(ty.name())),
        }
    }
}

#[cfg(test)]
mod tests;
