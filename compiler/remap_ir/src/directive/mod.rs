//! Mapping directives recognized on method declarations.
//!
//! The front-end adapter translates the annotations it finds on a method
//! into a [`DirectiveSet`]. The set is a closed enumeration: anything the
//! adapter does not recognize is simply not recorded.

use std::fmt;

use bitflags::bitflags;

/// A mapping directive the front-end can recognize on a method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DirectiveKind {
    /// Field mapping override (`@Mapping`).
    Mapping,
    /// Container of field mapping overrides (`@Mappings`).
    Mappings,
    /// Bean mapping configuration (`@BeanMapping`).
    BeanMapping,
    /// Iterable mapping configuration (`@IterableMapping`).
    IterableMapping,
    /// Map mapping configuration (`@MapMapping`).
    MapMapping,
    /// Enum constant mapping (`@ValueMapping`).
    ValueMapping,
    /// Container of enum constant mappings (`@ValueMappings`).
    ValueMappings,
    /// Qualifier naming tag (`@Named`).
    Named,
}

impl DirectiveKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [DirectiveKind; 8] = [
        DirectiveKind::Mapping,
        DirectiveKind::Mappings,
        DirectiveKind::BeanMapping,
        DirectiveKind::IterableMapping,
        DirectiveKind::MapMapping,
        DirectiveKind::ValueMapping,
        DirectiveKind::ValueMappings,
        DirectiveKind::Named,
    ];

    /// Recognize an annotation by its qualified name.
    ///
    /// Returns `None` for annotations that are not mapping directives.
    pub fn from_annotation_name(name: &str) -> Option<Self> {
        let kind = match name {
            "org.mapstruct.Mapping" => DirectiveKind::Mapping,
            "org.mapstruct.Mappings" => DirectiveKind::Mappings,
            "org.mapstruct.BeanMapping" => DirectiveKind::BeanMapping,
            "org.mapstruct.IterableMapping" => DirectiveKind::IterableMapping,
            "org.mapstruct.MapMapping" => DirectiveKind::MapMapping,
            "org.mapstruct.ValueMapping" => DirectiveKind::ValueMapping,
            "org.mapstruct.ValueMappings" => DirectiveKind::ValueMappings,
            "org.mapstruct.Named" => DirectiveKind::Named,
            _ => return None,
        };
        Some(kind)
    }

    /// The annotation simple name, for messages.
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveKind::Mapping => "@Mapping",
            DirectiveKind::Mappings => "@Mappings",
            DirectiveKind::BeanMapping => "@BeanMapping",
            DirectiveKind::IterableMapping => "@IterableMapping",
            DirectiveKind::MapMapping => "@MapMapping",
            DirectiveKind::ValueMapping => "@ValueMapping",
            DirectiveKind::ValueMappings => "@ValueMappings",
            DirectiveKind::Named => "@Named",
        }
    }

    /// The single-bit set for this kind.
    pub const fn flag(self) -> DirectiveSet {
        match self {
            DirectiveKind::Mapping => DirectiveSet::MAPPING,
            DirectiveKind::Mappings => DirectiveSet::MAPPINGS,
            DirectiveKind::BeanMapping => DirectiveSet::BEAN_MAPPING,
            DirectiveKind::IterableMapping => DirectiveSet::ITERABLE_MAPPING,
            DirectiveKind::MapMapping => DirectiveSet::MAP_MAPPING,
            DirectiveKind::ValueMapping => DirectiveSet::VALUE_MAPPING,
            DirectiveKind::ValueMappings => DirectiveSet::VALUE_MAPPINGS,
            DirectiveKind::Named => DirectiveSet::NAMED,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of directives present on one method declaration.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DirectiveSet: u16 {
        const MAPPING = 1 << 0;
        const MAPPINGS = 1 << 1;
        const BEAN_MAPPING = 1 << 2;
        const ITERABLE_MAPPING = 1 << 3;
        const MAP_MAPPING = 1 << 4;
        const VALUE_MAPPING = 1 << 5;
        const VALUE_MAPPINGS = 1 << 6;
        const NAMED = 1 << 7;

        /// Directives that prescribe how to generate the body, which a
        /// delegating method must not carry.
        const CONFLICTING = Self::MAPPING.bits()
            | Self::MAPPINGS.bits()
            | Self::BEAN_MAPPING.bits()
            | Self::ITERABLE_MAPPING.bits()
            | Self::MAP_MAPPING.bits()
            | Self::VALUE_MAPPING.bits()
            | Self::VALUE_MAPPINGS.bits();
    }
}

impl DirectiveSet {
    /// Build a set from annotation names, ignoring unrecognized ones.
    pub fn from_annotation_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(DirectiveKind::from_annotation_name)
            .fold(DirectiveSet::empty(), |set, kind| set | kind.flag())
    }

    /// Check membership of a single kind.
    #[inline]
    pub fn has(self, kind: DirectiveKind) -> bool {
        self.contains(kind.flag())
    }

    /// The conflicting subset of this set.
    #[inline]
    #[must_use]
    pub fn conflicting(self) -> DirectiveSet {
        self & DirectiveSet::CONFLICTING
    }

    /// Iterate the kinds in this set, in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = DirectiveKind> {
        DirectiveKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl FromIterator<DirectiveKind> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = DirectiveKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectiveSet::empty(), |set, kind| set | kind.flag())
    }
}
