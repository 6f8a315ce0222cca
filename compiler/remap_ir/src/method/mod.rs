//! Declared conversion methods.

use crate::{DirectiveSet, Name, Span, TypeRef, UnitId};

/// A method parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    /// Parameter name as written at the declaration.
    pub name: Name,
    /// Parameter type.
    pub ty: TypeRef,
}

impl Param {
    /// Create a new parameter.
    pub const fn new(name: Name, ty: TypeRef) -> Self {
        Param { name, ty }
    }
}

/// What kind of member a unit declares.
///
/// Only methods can be delegation targets; constructors are carried so the
/// cross-unit search can skip them the way the front-end reports them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MemberKind {
    #[default]
    Method,
    Constructor,
}

/// Declared visibility of a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    /// Check if generated code in another unit may call the member.
    #[inline]
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Whether the declaration already has a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BodyKind {
    /// Abstract class method, or interface method without a default body.
    #[default]
    Abstract,
    /// Interface method with a default body.
    Default,
    /// Concrete method with a body.
    Concrete,
}

impl BodyKind {
    /// Check if the generator is free to synthesize the body.
    #[inline]
    pub fn is_abstract(self) -> bool {
        matches!(self, BodyKind::Abstract)
    }
}

/// Attribute view of the delegate annotation on a method.
///
/// Presence of this view on a [`Method`] is what makes the method a
/// delegating method.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DelegateAttrs {
    /// Type-based qualifiers, in annotation order.
    pub qualified_by: Vec<TypeRef>,
    /// Name-based qualifiers, in annotation order.
    pub qualified_by_name: Vec<Name>,
    /// Location of the annotation (`Span::DUMMY` if unknown).
    pub span: Span,
}

impl DelegateAttrs {
    /// A delegate annotation without qualifiers.
    pub fn new(span: Span) -> Self {
        DelegateAttrs {
            qualified_by: Vec::new(),
            qualified_by_name: Vec::new(),
            span,
        }
    }

    /// Add a name qualifier.
    #[must_use]
    pub fn qualified_by_name(mut self, name: Name) -> Self {
        self.qualified_by_name.push(name);
        self
    }

    /// Add a type qualifier.
    #[must_use]
    pub fn qualified_by(mut self, ty: TypeRef) -> Self {
        self.qualified_by.push(ty);
        self
    }

    /// Check if any qualifier was given.
    pub fn is_qualified(&self) -> bool {
        !self.qualified_by.is_empty() || !self.qualified_by_name.is_empty()
    }
}

/// A declared conversion method.
///
/// Created once by [`ModelBuilder`](crate::ModelBuilder) and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method {
    /// Method identifier.
    pub name: Name,
    /// Parameters in declaration order. The order is both the compatibility
    /// key and the call-argument order.
    pub params: Vec<Param>,
    /// Return type (`TypeRef::VOID` for update methods).
    pub return_type: TypeRef,
    /// Declaring mapper unit.
    pub unit: UnitId,
    /// Qualifier tag from a naming annotation on this method.
    pub named: Option<Name>,
    /// Delegate annotation, if this is a delegating method.
    pub delegate: Option<DelegateAttrs>,
    /// Whether the method overrides a supertype method.
    pub overrides: bool,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub body: BodyKind,
    /// Mapping directives found on the declaration.
    pub directives: DirectiveSet,
    /// Declaration site.
    pub span: Span,
}

impl Method {
    /// Check if this method is marked as delegating.
    #[inline]
    pub fn is_delegating(&self) -> bool {
        self.delegate.is_some()
    }

    /// Check if this member is a method (not a constructor).
    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method)
    }

    /// Check if the declaration is unimplemented.
    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.body.is_abstract()
    }

    /// Check if the declaration carries a directive that conflicts with
    /// delegation.
    #[inline]
    pub fn has_conflicting_directive(&self) -> bool {
        !self.directives.conflicting().is_empty()
    }

    /// Number of parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = Name> + '_ {
        self.params.iter().map(|p| p.name)
    }
}
