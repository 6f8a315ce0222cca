//! Interned type identity.

use std::fmt;

use crate::Name;

/// A type as the front-end rendered it, interned.
///
/// Equality is exact nominal equality of the rendered type string
/// (`com.acme.Person`, `java.util.List<com.acme.Person>`, `int`). There is no
/// subtyping, widening or variance: two types are compatible only when they
/// are the same `TypeRef`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeRef(Name);

impl TypeRef {
    /// The `void` return type of update methods.
    pub const VOID: TypeRef = TypeRef(Name::VOID);

    /// Wrap an interned type name.
    #[inline]
    pub const fn new(name: Name) -> Self {
        TypeRef(name)
    }

    /// The interned type name.
    #[inline]
    pub const fn name(self) -> Name {
        self.0
    }

    /// Check if this is `void`.
    #[inline]
    pub fn is_void(self) -> bool {
        self == Self::VOID
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_void() {
            write!(f, "TypeRef::VOID")
        } else {
            write!(f, "TypeRef({})", self.0.raw())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn void_is_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(TypeRef::new(interner.intern("void")), TypeRef::VOID);
        assert!(TypeRef::VOID.is_void());
    }

    #[test]
    fn equality_is_nominal() {
        let interner = StringInterner::new();
        let list = TypeRef::new(interner.intern("java.util.List<Person>"));
        let collection = TypeRef::new(interner.intern("java.util.Collection<Person>"));
        assert_ne!(list, collection);
        assert_eq!(list, TypeRef::new(interner.intern("java.util.List<Person>")));
    }
}
