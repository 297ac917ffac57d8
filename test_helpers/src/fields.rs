//! Record component and option fixtures.

use anyhow::{Context, Result};
use record_builder::{FieldDescriptor, RecordBuilderOptions};

/// Parses one component, e.g. `field("tags", "List<String>")`.
///
/// # Errors
///
/// Returns an error naming the component when the name or type is invalid.
pub fn field(name: &str, type_expr: &str) -> Result<FieldDescriptor> {
    FieldDescriptor::parse(name, type_expr)
        .with_context(|| format!("invalid test component {name}: {type_expr}"))
}

/// Parses a whole component list.
///
/// # Errors
///
/// Returns an error for the first invalid component.
pub fn fields(specs: &[(&str, &str)]) -> Result<Vec<FieldDescriptor>> {
    specs
        .iter()
        .map(|(name, type_expr)| field(name, type_expr))
        .collect()
}

/// Default options with the two collection switches set as given.
#[must_use]
pub fn collection_options(immutable: bool, adders: bool) -> RecordBuilderOptions {
    RecordBuilderOptions {
        use_immutable_collections: immutable,
        add_single_item_collection_builders: adders,
        ..RecordBuilderOptions::default()
    }
}
