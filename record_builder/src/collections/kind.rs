//! Type-shape classification.
//!
//! Matching is shallow and exact: only the raw class of the outermost type is
//! compared, so `ArrayList<String>` or `SortedSet<String>` are not
//! collections here even though they implement one of the interfaces.

use std::fmt;

use tracing::trace;

use crate::java::{ClassName, TypeName};

/// The collection shapes that receive special builder handling.
///
/// Declaration order is the order helpers are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKind {
    /// `java.util.List`.
    Sequence,
    /// `java.util.Set`.
    Set,
    /// `java.util.Map`.
    AssociativeMap,
    /// `java.util.Collection`.
    GenericCollection,
}

impl CollectionKind {
    /// Every kind, in emission order.
    pub const ALL: [Self; 4] = [
        Self::Sequence,
        Self::Set,
        Self::AssociativeMap,
        Self::GenericCollection,
    ];

    /// Classifies `ty` by its raw class.
    ///
    /// ```
    /// use record_builder::collections::CollectionKind;
    /// use record_builder::java::parse_type;
    ///
    /// # fn main() -> record_builder::RecordBuilderResult<()> {
    /// let tags = parse_type("List<String>")?;
    /// assert_eq!(CollectionKind::classify(&tags), Some(CollectionKind::Sequence));
    /// let names = parse_type("ArrayList<String>")?;
    /// assert_eq!(CollectionKind::classify(&names), None);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn classify(ty: &TypeName) -> Option<Self> {
        let raw = ty.raw_class()?;
        let kind = Self::ALL.into_iter().find(|kind| kind.interface() == *raw);
        trace!(%ty, ?kind, "classified component type");
        kind
    }

    /// The public interface components of this kind are declared with.
    #[must_use]
    pub const fn interface(self) -> ClassName {
        match self {
            Self::Sequence => ClassName::LIST,
            Self::Set => ClassName::SET,
            Self::AssociativeMap => ClassName::MAP,
            Self::GenericCollection => ClassName::COLLECTION,
        }
    }

    /// The growable implementation a mutable working copy uses, if any.
    #[must_use]
    pub const fn mutable_implementation(self) -> Option<ClassName> {
        match self {
            Self::Sequence => Some(ClassName::ARRAY_LIST),
            Self::Set => Some(ClassName::HASH_SET),
            Self::AssociativeMap => Some(ClassName::HASH_MAP),
            Self::GenericCollection => None,
        }
    }

    /// Whether a mutable maker exists for this kind.
    #[must_use]
    pub const fn has_mutable_maker(self) -> bool {
        !matches!(self, Self::GenericCollection)
    }

    /// Number of type arguments the kind is declared with.
    #[must_use]
    pub const fn type_argument_count(self) -> usize {
        match self {
            Self::AssociativeMap => 2,
            Self::Sequence | Self::Set | Self::GenericCollection => 1,
        }
    }

    /// The container an adder accepts in bulk: any `Collection` for lists
    /// and sets, any `Map` for maps.
    #[must_use]
    pub const fn wild_container(self) -> ClassName {
        match self {
            Self::AssociativeMap => ClassName::MAP,
            Self::Sequence | Self::Set | Self::GenericCollection => ClassName::COLLECTION,
        }
    }

    /// Type variable names used by the helpers of this kind.
    #[must_use]
    pub const fn type_variables(self) -> &'static [&'static str] {
        match self {
            Self::AssociativeMap => &["K", "V"],
            Self::Sequence | Self::Set | Self::GenericCollection => &["T"],
        }
    }

    /// `List<T>`, `Map<K, V>` and so on: the signature type of helpers.
    #[must_use]
    pub fn generic_interface(self) -> TypeName {
        let arguments = self
            .type_variables()
            .iter()
            .map(|name| TypeName::variable(*name))
            .collect();
        TypeName::parameterized(self.interface(), arguments)
    }

    /// Preferred name of the immutability shim.
    #[must_use]
    pub const fn shim_base_name(self) -> &'static str {
        match self {
            Self::Sequence => "__list",
            Self::Set => "__set",
            Self::AssociativeMap => "__map",
            Self::GenericCollection => "__collection",
        }
    }

    /// Preferred name of the mutable maker, if the kind has one.
    #[must_use]
    pub const fn maker_base_name(self) -> Option<&'static str> {
        match self {
            Self::Sequence => Some("__ensureListMutable"),
            Self::Set => Some("__ensureSetMutable"),
            Self::AssociativeMap => Some("__ensureMapMutable"),
            Self::GenericCollection => None,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interface())
    }
}
