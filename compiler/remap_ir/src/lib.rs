//! Remap IR - mapper unit and method model
//!
//! This crate holds the read-only model that the delegation engine works on:
//! - Spans for declaration sites
//! - Names for interned identifiers, `TypeRef` for interned type identities
//! - Methods and mapper units, stored in a [`MapperModel`] arena
//! - The delegate attribute view and mapping directive sets
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers → `Name(u32)`, types → `TypeRef(Name)`
//! - **Arena Everything**: units and methods are addressed by `UnitId` / `MethodId`,
//!   never by shared pointers
//! - **Build Once**: the model is assembled by [`ModelBuilder`] and is immutable
//!   afterwards, so every consumer can borrow it freely
//!
//! Type equality is nominal: two `TypeRef`s are equal iff the front-end
//! rendered the same type string for them.

mod directive;
mod ids;
mod interner;
mod method;
mod model;
mod name;
mod span;
mod type_ref;

pub use directive::{DirectiveKind, DirectiveSet};
pub use ids::{MethodId, UnitId};
pub use interner::{InternError, StringInterner, StringLookup};
pub use method::{BodyKind, DelegateAttrs, MemberKind, Method, Param, Visibility};
pub use model::{
    access_variable_for, MapperModel, MapperUnit, MethodDecl, ModelBuilder, ModelError, UsedUnit,
};
pub use name::Name;
pub use span::Span;
pub use type_ref::TypeRef;
