//! Collision-free helper names.

use std::collections::HashSet;
use std::hash::BuildHasher;

use tracing::trace;

use super::kind::CollectionKind;
use crate::error::{RecordBuilderError, RecordBuilderResult};

/// Returns `base` if no component uses it, otherwise the first of `base1`,
/// `base2`, … that is free.
///
/// ```
/// use std::collections::HashSet;
/// use record_builder::collections::allocate;
///
/// let taken: HashSet<&str> = ["__list", "__list1"].into_iter().collect();
/// assert_eq!(allocate("__list", &taken), "__list2");
/// assert_eq!(allocate("__map", &taken), "__map");
/// ```
#[must_use]
pub fn allocate<S: BuildHasher>(base: &str, existing: &HashSet<&str, S>) -> String {
    if !existing.contains(base) {
        return base.to_owned();
    }
    let mut suffix: u32 = 1;
    loop {
        let candidate = format!("{base}{suffix}");
        if !existing.contains(candidate.as_str()) {
            trace!(base, %candidate, "helper name collided with a component");
            return candidate;
        }
        suffix += 1;
    }
}

/// The seven helper names of one generation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperNames {
    list_shim: String,
    set_shim: String,
    map_shim: String,
    collection_shim: String,
    list_maker: String,
    set_maker: String,
    map_maker: String,
}

impl HelperNames {
    /// Allocates every name against the component names in `existing`.
    #[must_use]
    pub fn allocate<S: BuildHasher>(existing: &HashSet<&str, S>) -> Self {
        let shim = |kind: CollectionKind| allocate(kind.shim_base_name(), existing);
        let maker = |kind: CollectionKind| {
            kind.maker_base_name()
                .map(|base| allocate(base, existing))
                .unwrap_or_default()
        };
        Self {
            list_shim: shim(CollectionKind::Sequence),
            set_shim: shim(CollectionKind::Set),
            map_shim: shim(CollectionKind::AssociativeMap),
            collection_shim: shim(CollectionKind::GenericCollection),
            list_maker: maker(CollectionKind::Sequence),
            set_maker: maker(CollectionKind::Set),
            map_maker: maker(CollectionKind::AssociativeMap),
        }
    }

    /// Name of the immutability shim for `kind`.
    #[must_use]
    pub fn shim(&self, kind: CollectionKind) -> &str {
        match kind {
            CollectionKind::Sequence => &self.list_shim,
            CollectionKind::Set => &self.set_shim,
            CollectionKind::AssociativeMap => &self.map_shim,
            CollectionKind::GenericCollection => &self.collection_shim,
        }
    }

    /// Name of the mutable maker for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::NoMutableMaker`] for
    /// [`CollectionKind::GenericCollection`].
    pub fn maker(&self, kind: CollectionKind) -> RecordBuilderResult<&str> {
        match kind {
            CollectionKind::Sequence => Ok(&self.list_maker),
            CollectionKind::Set => Ok(&self.set_maker),
            CollectionKind::AssociativeMap => Ok(&self.map_maker),
            CollectionKind::GenericCollection => Err(RecordBuilderError::NoMutableMaker { kind }),
        }
    }
}
