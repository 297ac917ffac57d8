//! Per-unit bookkeeping of which helpers are needed.
//!
//! Each shim and maker moves through `NotRequested -> Requested -> Emitted`
//! and never back, which is what keeps every helper to a single emission per
//! generation unit.

use std::collections::BTreeSet;

use super::kind::CollectionKind;

/// Where one helper is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperState {
    /// Nobody asked for the helper.
    NotRequested,
    /// Asked for and waiting for a flush.
    Requested,
    /// Already written into the unit.
    Emitted,
}

#[derive(Debug, Default, Clone)]
struct Ledger {
    requested: BTreeSet<CollectionKind>,
    emitted: BTreeSet<CollectionKind>,
}

impl Ledger {
    fn request(&mut self, kind: CollectionKind) -> bool {
        !self.emitted.contains(&kind) && self.requested.insert(kind)
    }

    fn state(&self, kind: CollectionKind) -> HelperState {
        if self.emitted.contains(&kind) {
            HelperState::Emitted
        } else if self.requested.contains(&kind) {
            HelperState::Requested
        } else {
            HelperState::NotRequested
        }
    }

    fn take_pending(&mut self) -> Vec<CollectionKind> {
        let pending = std::mem::take(&mut self.requested);
        self.emitted.extend(pending.iter().copied());
        pending.into_iter().collect()
    }
}

/// Shim and maker requests of one generation unit.
#[derive(Debug, Default, Clone)]
pub struct HelperRequests {
    shims: Ledger,
    makers: Ledger,
}

impl HelperRequests {
    /// An empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the shim for `kind` as needed. Returns whether this call changed
    /// anything.
    pub fn request_shim(&mut self, kind: CollectionKind) -> bool {
        self.shims.request(kind)
    }

    /// Marks the maker for `kind` as needed. Returns whether this call
    /// changed anything.
    ///
    /// Kinds without a mutable maker are refused and stay
    /// [`HelperState::NotRequested`].
    pub fn request_maker(&mut self, kind: CollectionKind) -> bool {
        kind.has_mutable_maker() && self.makers.request(kind)
    }

    /// Lifecycle state of the shim for `kind`.
    #[must_use]
    pub fn shim_state(&self, kind: CollectionKind) -> HelperState {
        self.shims.state(kind)
    }

    /// Lifecycle state of the maker for `kind`.
    #[must_use]
    pub fn maker_state(&self, kind: CollectionKind) -> HelperState {
        self.makers.state(kind)
    }

    /// Whether the shim for `kind` has been asked for, emitted or not.
    #[must_use]
    pub fn is_shim_requested(&self, kind: CollectionKind) -> bool {
        self.shim_state(kind) != HelperState::NotRequested
    }

    /// Whether the maker for `kind` has been asked for, emitted or not.
    #[must_use]
    pub fn is_maker_requested(&self, kind: CollectionKind) -> bool {
        self.maker_state(kind) != HelperState::NotRequested
    }

    /// Shims awaiting emission, in emission order, now marked emitted.
    pub fn take_pending_shims(&mut self) -> Vec<CollectionKind> {
        self.shims.take_pending()
    }

    /// Makers awaiting emission, in emission order, now marked emitted.
    pub fn take_pending_makers(&mut self) -> Vec<CollectionKind> {
        self.makers.take_pending()
    }
}
