//! Scenario state shared by the collection helper steps.

use record_builder::{CollectionHelpers, FieldDescriptor, RecordBuilderOptions};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// One generation unit as built up by a scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct UnitState {
    /// Declared components, in declaration order.
    pub fields: Slot<Vec<FieldDescriptor>>,
    /// Whether immutable collections were switched on.
    pub immutable: Slot<bool>,
    /// Whether single-item adders were switched on.
    pub adders: Slot<bool>,
    /// Helpers created on first use from the fields and switches.
    pub helpers: Slot<CollectionHelpers>,
    /// Build arguments by component name, from the latest generation.
    pub arguments: Slot<Vec<(String, String)>>,
    /// Names of the helper methods flushed so far.
    pub emitted: Slot<Vec<String>>,
}

impl UnitState {
    /// Options reflecting the switches set so far.
    pub fn options(&self) -> RecordBuilderOptions {
        RecordBuilderOptions {
            use_immutable_collections: self.immutable.get().unwrap_or(false),
            add_single_item_collection_builders: self.adders.get().unwrap_or(false),
            ..RecordBuilderOptions::default()
        }
    }

    /// The unit's helpers, created from the declared fields if needed.
    pub fn take_helpers(&self) -> CollectionHelpers {
        self.helpers.take().unwrap_or_else(|| {
            let fields = self.fields.get().unwrap_or_default();
            CollectionHelpers::new(&fields, &self.options())
        })
    }

    /// The declared component called `name`, if any.
    pub fn field(&self, name: &str) -> Option<FieldDescriptor> {
        self.fields
            .get()
            .unwrap_or_default()
            .into_iter()
            .find(|field| field.name() == name)
    }
}

/// A fresh generation unit for each scenario.
#[fixture]
pub fn unit() -> UnitState {
    UnitState::default()
}
