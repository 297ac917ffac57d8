//! Builder generation options.
//!
//! [`RecordBuilderOptions`] carries every knob a builder driver consults. The
//! collection helpers read only `use_immutable_collections`,
//! `add_single_item_collection_builders` and `single_item_builder_prefix`;
//! the rest are passed through for the driver and the source writer.
//!
//! Options are layered with figment: built-in defaults, then an optional TOML
//! file, then `RECORD_BUILDER_*` environment variables (see
//! [`RecordBuilderOptions::load`]).

mod load;

pub use load::{DEFAULT_CONFIG_FILE, ENV_PREFIX};

use serde::{Deserialize, Serialize};

use crate::error::{RecordBuilderError, RecordBuilderResult};
use crate::field::is_java_identifier;

/// Default header comment for generated files.
pub const DEFAULT_FILE_COMMENT: &str = "Auto generated by io.soabase.recordbuilder.core.RecordBuilder: https://github.com/Randgalt/record-builder";

/// Options controlling builder generation.
///
/// Field defaults match the `@RecordBuilder.Options` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag mirrors an independent annotation option"
)]
pub struct RecordBuilderOptions {
    /// Suffix appended to the record name to form the builder name.
    pub suffix: String,
    /// Suffix for records generated from annotated interfaces.
    pub interface_suffix: String,
    /// Name of the copy-builder factory method.
    pub copy_method_name: String,
    /// Name of the builder factory method.
    pub builder_method_name: String,
    /// Name of the build method.
    pub build_method_name: String,
    /// Name of the from-to-wither method.
    pub from_method_name: String,
    /// Name of the method streaming record components.
    pub components_method_name: String,
    /// Generate the nested `With` interface.
    pub enable_wither: bool,
    /// Name of the nested `With` interface.
    pub with_class_name: String,
    /// Prefix of the methods in the `With` interface.
    pub with_class_method_prefix: String,
    /// Comment placed at the top of generated files; empty for none.
    pub file_comment: String,
    /// Indentation unit for generated files.
    pub file_indent: String,
    /// Prefix enclosing class names onto the builder name.
    pub prefix_enclosing_class_names: bool,
    /// Copy component annotations onto builder methods.
    pub inherit_component_annotations: bool,
    /// Default `Optional` components to `Optional.empty()`.
    pub empty_default_for_optional: bool,
    /// Add non-optional setters for optional components.
    pub add_concrete_setters_for_optional: bool,
    /// Add not-null checks for components annotated as not-null.
    pub interpret_not_nulls: bool,
    /// Pattern deciding which annotation names mean not-null.
    pub interpret_not_nulls_pattern: String,
    /// Pass built records through the Java Validation API.
    pub use_validation_api: bool,
    /// Pass list, set, map and collection components through immutability
    /// shims when the record is built.
    pub use_immutable_collections: bool,
    /// Generate single-item adder methods for list, set and map components.
    pub add_single_item_collection_builders: bool,
    /// Prefix for adder methods.
    pub single_item_builder_prefix: String,
    /// Add functional methods (`map`, `accept`) to the `With` interface.
    pub add_functional_methods_to_with: bool,
    /// Prefix for setter methods; empty for none.
    pub setter_prefix: String,
    /// Generate getters on the builder.
    pub enable_getters: bool,
    /// Prefix for getter methods; empty for none.
    pub getter_prefix: String,
    /// Prefix for boolean getter methods; empty for none.
    pub boolean_prefix: String,
    /// Name of the bean-style getter interface; empty for none.
    pub bean_class_name: String,
    /// Annotate generated classes with a class-retained marker.
    pub add_class_retained_generated: bool,
    /// Name of the private class behind the from-to-wither method.
    pub from_with_class_name: String,
    /// Add a functional-style static builder.
    pub add_static_builder: bool,
    /// Name of the internal mutable list class.
    pub mutable_list_class_name: String,
    /// Name of the internal mutable set class.
    pub mutable_set_class_name: String,
    /// Name of the internal mutable map class.
    pub mutable_map_class_name: String,
}

impl Default for RecordBuilderOptions {
    fn default() -> Self {
        Self {
            suffix: "Builder".to_owned(),
            interface_suffix: "Record".to_owned(),
            copy_method_name: "builder".to_owned(),
            builder_method_name: "builder".to_owned(),
            build_method_name: "build".to_owned(),
            from_method_name: "from".to_owned(),
            components_method_name: "stream".to_owned(),
            enable_wither: true,
            with_class_name: "With".to_owned(),
            with_class_method_prefix: "with".to_owned(),
            file_comment: DEFAULT_FILE_COMMENT.to_owned(),
            file_indent: "    ".to_owned(),
            prefix_enclosing_class_names: true,
            inherit_component_annotations: true,
            empty_default_for_optional: true,
            add_concrete_setters_for_optional: false,
            interpret_not_nulls: false,
            interpret_not_nulls_pattern: "(?i)((notnull)|(nonnull)|(nonull))".to_owned(),
            use_validation_api: false,
            use_immutable_collections: false,
            add_single_item_collection_builders: false,
            single_item_builder_prefix: "add".to_owned(),
            add_functional_methods_to_with: false,
            setter_prefix: String::new(),
            enable_getters: true,
            getter_prefix: String::new(),
            boolean_prefix: String::new(),
            bean_class_name: String::new(),
            add_class_retained_generated: false,
            from_with_class_name: "_FromWith".to_owned(),
            add_static_builder: true,
            mutable_list_class_name: "_MutableList".to_owned(),
            mutable_set_class_name: "_MutableSet".to_owned(),
            mutable_map_class_name: "_MutableMap".to_owned(),
        }
    }
}

impl RecordBuilderOptions {
    /// Checks that every option used to form a Java name can do so.
    ///
    /// Required names must be identifiers; prefixes and the bean class name
    /// may also be empty. The indent must be whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::Validation`] naming the first offending
    /// option.
    pub fn validate(&self) -> RecordBuilderResult<()> {
        let required = [
            ("suffix", &self.suffix),
            ("interface_suffix", &self.interface_suffix),
            ("copy_method_name", &self.copy_method_name),
            ("builder_method_name", &self.builder_method_name),
            ("build_method_name", &self.build_method_name),
            ("from_method_name", &self.from_method_name),
            ("components_method_name", &self.components_method_name),
            ("with_class_name", &self.with_class_name),
            ("with_class_method_prefix", &self.with_class_method_prefix),
            ("single_item_builder_prefix", &self.single_item_builder_prefix),
            ("from_with_class_name", &self.from_with_class_name),
            ("mutable_list_class_name", &self.mutable_list_class_name),
            ("mutable_set_class_name", &self.mutable_set_class_name),
            ("mutable_map_class_name", &self.mutable_map_class_name),
        ];
        for (key, value) in required {
            if !is_java_identifier(value) {
                return Err(RecordBuilderError::validation(
                    key,
                    format!("'{value}' is not a valid Java identifier"),
                ));
            }
        }

        let optional = [
            ("setter_prefix", &self.setter_prefix),
            ("getter_prefix", &self.getter_prefix),
            ("boolean_prefix", &self.boolean_prefix),
            ("bean_class_name", &self.bean_class_name),
        ];
        for (key, value) in optional {
            if !value.is_empty() && !is_java_identifier(value) {
                return Err(RecordBuilderError::validation(
                    key,
                    format!("'{value}' must be empty or a valid Java identifier"),
                ));
            }
        }

        if !self.file_indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(RecordBuilderError::validation(
                "file_indent",
                "indent may only contain spaces and tabs",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
