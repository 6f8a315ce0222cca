//! Mapper units and the model arena.
//!
//! The front-end assembles a [`MapperModel`] through [`ModelBuilder`] once
//! per compile unit. Units and methods are stored in flat vectors and
//! addressed by [`UnitId`] / [`MethodId`]; a unit lists its members and its
//! used units by handle only.
//!
//! # Ordering
//!
//! Declaration order is preserved everywhere. The order of a unit's `uses`
//! is the priority order for cross-unit delegate search, and the order of its
//! `methods` is the order candidates are tried in.

use rustc_hash::FxHashMap;

use crate::{
    BodyKind, DelegateAttrs, DirectiveKind, DirectiveSet, MemberKind, Method, MethodId, Name,
    Param, Span, StringInterner, TypeRef, UnitId, Visibility,
};

/// A used (dependency) unit, as seen from the unit that uses it.
///
/// Non-owning: the referenced unit lives in the same [`MapperModel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UsedUnit {
    /// The dependency unit.
    pub unit: UnitId,
    /// Local variable through which generated code reaches the dependency.
    pub access_variable: Name,
}

/// One mapping-unit declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapperUnit {
    /// Simple name (`AddressMapper`).
    pub name: Name,
    /// Qualified type (`com.acme.AddressMapper`).
    pub ty: TypeRef,
    /// Declared members, in declaration order.
    pub methods: Vec<MethodId>,
    /// Used units, in declaration order (search priority).
    pub uses: Vec<UsedUnit>,
    /// Declaration site.
    pub span: Span,
}

/// Arena holding every unit and method of one compile unit.
///
/// Immutable once built; all lookups are by handle.
#[derive(Clone, Debug, Default)]
pub struct MapperModel {
    units: Vec<MapperUnit>,
    methods: Vec<Method>,
    /// Simple name → unit.
    units_by_name: FxHashMap<Name, UnitId>,
}

impl MapperModel {
    /// Get a unit by handle.
    #[inline]
    pub fn unit(&self, id: UnitId) -> &MapperUnit {
        &self.units[id.index()]
    }

    /// Get a method by handle.
    #[inline]
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    /// Find a unit by its simple name.
    pub fn unit_by_name(&self, name: Name) -> Option<UnitId> {
        self.units_by_name.get(&name).copied()
    }

    /// All units, in declaration order.
    pub fn units(&self) -> impl Iterator<Item = (UnitId, &MapperUnit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(i, unit)| (UnitId::new(to_u32(i)), unit))
    }

    /// Members of a unit, in declaration order.
    pub fn methods_of(&self, unit: UnitId) -> impl Iterator<Item = (MethodId, &Method)> {
        self.unit(unit)
            .methods
            .iter()
            .map(|&id| (id, self.method(id)))
    }

    /// Delegating methods of a unit, in declaration order.
    pub fn delegating_methods(&self, unit: UnitId) -> impl Iterator<Item = MethodId> + '_ {
        self.methods_of(unit)
            .filter(|(_, method)| method.is_delegating())
            .map(|(id, _)| id)
    }

    /// Number of units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of methods across all units.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

/// Structural errors found while assembling a model.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A handle that this builder never issued.
    #[error("unknown mapper unit handle {raw}")]
    UnknownUnit { raw: u32 },

    /// Two units share a simple name.
    #[error("mapper unit `{unit}` is declared more than once")]
    DuplicateUnit { unit: String },

    /// A unit lists itself as a used unit.
    #[error("mapper unit `{unit}` cannot use itself")]
    SelfUse { unit: String },

    /// A unit lists the same used unit twice.
    #[error("mapper unit `{unit}` uses `{used}` more than once")]
    DuplicateUse { unit: String, used: String },

    /// Two used units of one unit share an access variable.
    #[error("access variable `{variable}` is bound twice in mapper unit `{unit}`")]
    DuplicateAccessVariable { unit: String, variable: String },
}

/// Access variable for a used unit with the given simple name.
///
/// Decapitalizes the first character (`AddressMapper` → `addressMapper`),
/// keeping names whose first two characters are upper case
/// (`URLMapper` stays `URLMapper`). An empty name yields `mapper`.
pub fn access_variable_for(simple_name: &str) -> String {
    let mut chars = simple_name.chars();
    let Some(first) = chars.next() else {
        return "mapper".to_owned();
    };
    if chars.next().is_some_and(char::is_uppercase) && first.is_uppercase() {
        return simple_name.to_owned();
    }
    let mut out = String::with_capacity(simple_name.len());
    out.extend(first.to_lowercase());
    out.push_str(&simple_name[first.len_utf8()..]);
    out
}

/// Declaration of the delegate annotation inside a [`MethodDecl`].
#[derive(Clone, Debug, Default)]
struct DelegateDecl<'a> {
    qualified_by: Vec<&'a str>,
    qualified_by_name: Vec<&'a str>,
    span: Span,
}

/// A method declaration as the front-end reports it, before interning.
///
/// # Example
///
/// ```text
/// let decl = MethodDecl::new("convertAddress")
///     .param("address", "Address")
///     .returns("AddressDto")
///     .delegating();
/// ```
#[derive(Clone, Debug)]
pub struct MethodDecl<'a> {
    name: &'a str,
    params: Vec<(&'a str, &'a str)>,
    return_type: &'a str,
    named: Option<&'a str>,
    delegate: Option<DelegateDecl<'a>>,
    overrides: bool,
    kind: MemberKind,
    visibility: Visibility,
    body: BodyKind,
    directives: DirectiveSet,
    span: Span,
}

impl<'a> MethodDecl<'a> {
    /// Start a public abstract method returning `void`.
    pub fn new(name: &'a str) -> Self {
        MethodDecl {
            name,
            params: Vec::new(),
            return_type: "void",
            named: None,
            delegate: None,
            overrides: false,
            kind: MemberKind::Method,
            visibility: Visibility::Public,
            body: BodyKind::Abstract,
            directives: DirectiveSet::empty(),
            span: Span::DUMMY,
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, name: &'a str, ty: &'a str) -> Self {
        self.params.push((name, ty));
        self
    }

    /// Set the return type.
    #[must_use]
    pub fn returns(mut self, ty: &'a str) -> Self {
        self.return_type = ty;
        self
    }

    /// Tag the method with a naming qualifier.
    #[must_use]
    pub fn named(mut self, tag: &'a str) -> Self {
        self.named = Some(tag);
        self.directives |= DirectiveKind::Named.flag();
        self
    }

    /// Mark the method as delegating.
    #[must_use]
    pub fn delegating(mut self) -> Self {
        self.delegate.get_or_insert_with(DelegateDecl::default);
        self
    }

    /// Mark the method as delegating with a name qualifier.
    #[must_use]
    pub fn qualified_by_name(mut self, name: &'a str) -> Self {
        self.delegate
            .get_or_insert_with(DelegateDecl::default)
            .qualified_by_name
            .push(name);
        self
    }

    /// Mark the method as delegating with a type qualifier.
    #[must_use]
    pub fn qualified_by(mut self, ty: &'a str) -> Self {
        self.delegate
            .get_or_insert_with(DelegateDecl::default)
            .qualified_by
            .push(ty);
        self
    }

    /// Location of the delegate annotation; marks the method as delegating.
    #[must_use]
    pub fn delegate_span(mut self, span: Span) -> Self {
        self.delegate.get_or_insert_with(DelegateDecl::default).span = span;
        self
    }

    #[must_use]
    pub fn overrides(mut self) -> Self {
        self.overrides = true;
        self
    }

    #[must_use]
    pub fn constructor(mut self) -> Self {
        self.kind = MemberKind::Constructor;
        self
    }

    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn body(mut self, body: BodyKind) -> Self {
        self.body = body;
        self
    }

    /// Record a mapping directive on the declaration.
    #[must_use]
    pub fn directive(mut self, kind: DirectiveKind) -> Self {
        self.directives |= kind.flag();
        self
    }

    /// Declaration site.
    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Assembles a [`MapperModel`], interning names as it goes.
///
/// Structural mistakes are reported eagerly as [`ModelError`]s so the
/// front-end can point at the offending declaration.
pub struct ModelBuilder<'a> {
    interner: &'a StringInterner,
    model: MapperModel,
}

impl<'a> ModelBuilder<'a> {
    /// Create an empty builder.
    pub fn new(interner: &'a StringInterner) -> Self {
        ModelBuilder {
            interner,
            model: MapperModel::default(),
        }
    }

    /// Declare a unit from its qualified type name.
    ///
    /// The simple name is the last `.`-separated segment.
    pub fn add_unit(&mut self, qualified_name: &str) -> Result<UnitId, ModelError> {
        self.add_unit_at(qualified_name, Span::DUMMY)
    }

    /// Declare a unit with a known declaration site.
    pub fn add_unit_at(&mut self, qualified_name: &str, span: Span) -> Result<UnitId, ModelError> {
        let simple = simple_name(qualified_name);
        let name = self.interner.intern(simple);
        if self.model.units_by_name.contains_key(&name) {
            return Err(ModelError::DuplicateUnit {
                unit: simple.to_owned(),
            });
        }

        let id = UnitId::new(to_u32(self.model.units.len()));
        self.model.units.push(MapperUnit {
            name,
            ty: TypeRef::new(self.interner.intern(qualified_name)),
            methods: Vec::new(),
            uses: Vec::new(),
            span,
        });
        self.model.units_by_name.insert(name, id);
        Ok(id)
    }

    /// Declare that `unit` uses `used`, reached through the default access
    /// variable (see [`access_variable_for`]).
    pub fn add_use(&mut self, unit: UnitId, used: UnitId) -> Result<(), ModelError> {
        self.check_unit(used)?;
        let simple = self.interner.lookup(self.model.unit(used).name);
        let variable = access_variable_for(simple);
        self.add_use_as(unit, used, &variable)
    }

    /// Declare that `unit` uses `used`, reached through `access_variable`.
    pub fn add_use_as(
        &mut self,
        unit: UnitId,
        used: UnitId,
        access_variable: &str,
    ) -> Result<(), ModelError> {
        self.check_unit(unit)?;
        self.check_unit(used)?;

        let unit_name = || self.interner.lookup(self.model.unit(unit).name).to_owned();
        if unit == used {
            return Err(ModelError::SelfUse { unit: unit_name() });
        }

        let access_variable = self.interner.intern(access_variable);
        let existing = &self.model.unit(unit).uses;
        if existing.iter().any(|u| u.unit == used) {
            return Err(ModelError::DuplicateUse {
                unit: unit_name(),
                used: self.interner.lookup(self.model.unit(used).name).to_owned(),
            });
        }
        if existing.iter().any(|u| u.access_variable == access_variable) {
            return Err(ModelError::DuplicateAccessVariable {
                unit: unit_name(),
                variable: self.interner.lookup(access_variable).to_owned(),
            });
        }

        self.model.units[unit.index()].uses.push(UsedUnit {
            unit: used,
            access_variable,
        });
        Ok(())
    }

    /// Declare a member of `unit`.
    pub fn add_method(&mut self, unit: UnitId, decl: MethodDecl<'_>) -> Result<MethodId, ModelError> {
        self.check_unit(unit)?;

        let interner = self.interner;
        let ty = |s: &str| TypeRef::new(interner.intern(s));
        let delegate = decl.delegate.map(|d| DelegateAttrs {
            qualified_by: d.qualified_by.into_iter().map(ty).collect(),
            qualified_by_name: d
                .qualified_by_name
                .into_iter()
                .map(|n| interner.intern(n))
                .collect(),
            span: d.span,
        });

        let method = Method {
            name: interner.intern(decl.name),
            params: decl
                .params
                .into_iter()
                .map(|(name, t)| Param::new(interner.intern(name), ty(t)))
                .collect(),
            return_type: ty(decl.return_type),
            unit,
            named: decl.named.map(|n| interner.intern(n)),
            delegate,
            overrides: decl.overrides,
            kind: decl.kind,
            visibility: decl.visibility,
            body: decl.body,
            directives: decl.directives,
            span: decl.span,
        };

        let id = MethodId::new(to_u32(self.model.methods.len()));
        self.model.methods.push(method);
        self.model.units[unit.index()].methods.push(id);
        Ok(id)
    }

    /// Finish building.
    pub fn finish(self) -> MapperModel {
        self.model
    }

    fn check_unit(&self, id: UnitId) -> Result<(), ModelError> {
        if id.index() < self.model.units.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownUnit { raw: id.raw() })
        }
    }
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Convert an arena length to a handle index.
///
/// # Panics
/// Panics if the arena exceeds `u32::MAX` entries.
#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("mapper model exceeded u32::MAX entries"))
}
