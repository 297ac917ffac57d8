//! Collection handling for generated builders.
//!
//! One [`CollectionHelpers`] exists per generation unit. The driver asks it
//! how each component should be treated, splices the fragments it returns
//! into the builder, and finally flushes the helper methods those fragments
//! rely on into the generated class:
//!
//! ```
//! use record_builder::collections::CollectionHelpers;
//! use record_builder::java::MethodSpec;
//! use record_builder::{FieldDescriptor, RecordBuilderOptions};
//!
//! # fn main() -> record_builder::RecordBuilderResult<()> {
//! let fields = [FieldDescriptor::parse("tags", "List<String>")?];
//! let options = RecordBuilderOptions {
//!     use_immutable_collections: true,
//!     ..RecordBuilderOptions::default()
//! };
//! let mut helpers = CollectionHelpers::new(&fields, &options);
//! let argument = helpers.build_argument(&fields[0]);
//! assert_eq!(argument.to_inline_string(), "__list(tags)");
//!
//! let mut methods: Vec<MethodSpec> = Vec::new();
//! helpers.finish(&mut methods);
//! assert_eq!(methods.len(), 2);
//! # Ok(())
//! # }
//! ```

mod kind;
mod makers;
mod names;
mod shims;
mod single_item;
mod tracker;

use std::collections::HashSet;

use tracing::debug;

pub use kind::CollectionKind;
pub use names::{HelperNames, allocate};
pub use single_item::{SingleItemMetadata, SingleItemMode, has_wildcard_type_arguments, wild_type};
pub use tracker::{HelperRequests, HelperState};

use crate::error::{RecordBuilderError, RecordBuilderResult};
use crate::field::FieldDescriptor;
use crate::java::{
    AnnotationSpec, ClassName, CodeBlock, MethodSink, MethodSpec, Modifier, ParameterSpec,
};
use crate::options::RecordBuilderOptions;

/// Value of the `@Generated` annotation placed on every helper.
pub const GENERATOR_NAME: &str = "io.soabase.recordbuilder.core.RecordBuilder";

/// The collection-handling state of one generation unit.
#[derive(Debug, Clone)]
pub struct CollectionHelpers {
    use_immutable_collections: bool,
    add_single_item_collection_builders: bool,
    single_item_builder_prefix: String,
    names: HelperNames,
    requests: HelperRequests,
}

impl CollectionHelpers {
    /// Prepares helpers for the unit declaring `fields`.
    ///
    /// Helper names are allocated here, against every component name, and
    /// stay fixed for the unit.
    #[must_use]
    pub fn new(fields: &[FieldDescriptor], options: &RecordBuilderOptions) -> Self {
        let existing: HashSet<&str> = fields.iter().map(FieldDescriptor::name).collect();
        let names = HelperNames::allocate(&existing);
        debug!(
            fields = fields.len(),
            use_immutable_collections = options.use_immutable_collections,
            add_single_item_collection_builders = options.add_single_item_collection_builders,
            "prepared collection helpers"
        );
        Self {
            use_immutable_collections: options.use_immutable_collections,
            add_single_item_collection_builders: options.add_single_item_collection_builders,
            single_item_builder_prefix: options.single_item_builder_prefix.clone(),
            names,
            requests: HelperRequests::new(),
        }
    }

    /// The collection shape of `field`, if any.
    #[must_use]
    pub fn classify(field: &FieldDescriptor) -> Option<CollectionKind> {
        CollectionKind::classify(field.type_name())
    }

    /// Whether `field` is stored through an immutability shim.
    #[must_use]
    pub fn is_immutable_collection(&self, field: &FieldDescriptor) -> bool {
        self.use_immutable_collections && Self::classify(field).is_some()
    }

    /// Helper names allocated for this unit.
    #[must_use]
    pub const fn names(&self) -> &HelperNames {
        &self.names
    }

    /// Helper requests recorded so far.
    #[must_use]
    pub const fn requests(&self) -> &HelperRequests {
        &self.requests
    }

    /// What a single-item adder for `field` needs, or `None` when no adder
    /// applies.
    ///
    /// Adders exist only when enabled, for parameterized lists, sets and
    /// maps.
    #[must_use]
    pub fn single_item_metadata(
        &self,
        field: &FieldDescriptor,
        mode: SingleItemMode,
    ) -> Option<SingleItemMetadata> {
        if !self.add_single_item_collection_builders {
            return None;
        }
        let declared = field.type_name();
        if !declared.is_parameterized() {
            return None;
        }
        let kind = Self::classify(field)?;
        let implementation = kind.mutable_implementation()?;
        let count = kind.type_argument_count();
        let arguments = declared.type_arguments();
        let has_wildcards = has_wildcard_type_arguments(arguments, count);

        let wild = match mode {
            SingleItemMode::StandardForSetter if has_wildcards => declared.clone(),
            SingleItemMode::ExcludeWildcardTypes if has_wildcards => return None,
            SingleItemMode::Standard
            | SingleItemMode::StandardForSetter
            | SingleItemMode::ExcludeWildcardTypes => {
                wild_type(kind.wild_container(), arguments, count)?
            }
        };
        Some(SingleItemMetadata::new(
            implementation,
            arguments.to_vec(),
            wild,
        ))
    }

    /// Name of the single-item adder for `field`, e.g. `addTags`.
    ///
    /// Only the first character of the component name is upper-cased, so
    /// `myURL` and `myUrl` keep distinct adders.
    #[must_use]
    pub fn adder_method_name(&self, field: &FieldDescriptor) -> String {
        let mut chars = field.name().chars();
        let mut name = self.single_item_builder_prefix.clone();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
        name
    }

    /// The expression passing `field` to the record constructor.
    ///
    /// With immutable collections enabled a list, set, map or collection
    /// component is wrapped in its shim (`__list(tags)`) and the helpers that
    /// wrapping depends on are requested. Anything else is the bare name.
    pub fn build_argument(&mut self, field: &FieldDescriptor) -> CodeBlock {
        let kind = match Self::classify(field) {
            Some(kind) if self.use_immutable_collections => kind,
            Some(_) | None => return CodeBlock::of(field.name()),
        };
        self.request_shim(kind);
        if self.requests.request_maker(kind) {
            debug!(%kind, name = ?self.names.maker(kind).ok(), "requested mutable maker");
        }
        CodeBlock::of(format!("{}({})", self.names.shim(kind), field.name()))
    }

    /// Marks the shim for `kind` as needed.
    pub fn request_shim(&mut self, kind: CollectionKind) {
        if self.requests.request_shim(kind) {
            debug!(%kind, name = self.names.shim(kind), "requested immutability shim");
        }
    }

    /// Marks the mutable maker for `kind` as needed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::NoMutableMaker`] for
    /// [`CollectionKind::GenericCollection`].
    pub fn request_maker(&mut self, kind: CollectionKind) -> RecordBuilderResult<()> {
        let name = self.names.maker(kind)?;
        if self.requests.request_maker(kind) {
            debug!(%kind, name, "requested mutable maker");
        }
        Ok(())
    }

    /// Name of the mutable maker used for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::UnsupportedCollection`] unless `field` is
    /// a list, set or map.
    pub fn mutable_maker_name(&self, field: &FieldDescriptor) -> RecordBuilderResult<&str> {
        Self::classify(field)
            .and_then(|kind| self.names.maker(kind).ok())
            .ok_or_else(|| RecordBuilderError::UnsupportedCollection {
                field: field.name().to_owned(),
                type_name: field.type_name().to_string(),
            })
    }

    /// Emits every requested shim not yet emitted, in the order list, set,
    /// map, collection.
    ///
    /// Does nothing unless immutable collections are enabled.
    pub fn flush_shims<S: MethodSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.use_immutable_collections {
            return;
        }
        for kind in self.requests.take_pending_shims() {
            let name = self.names.shim(kind);
            debug!(%kind, name, "emitting immutability shim");
            sink.add_method(shims::shim_method(kind, name));
        }
    }

    /// Emits every requested mutable maker not yet emitted, in the order
    /// list, set, map.
    ///
    /// Does nothing unless immutable collections are enabled.
    pub fn flush_makers<S: MethodSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.use_immutable_collections {
            return;
        }
        let pending = self.requests.take_pending_makers();
        // the tracker only admits kinds that have a mutable implementation
        let growable = pending.into_iter().filter_map(|kind| {
            let implementation = kind.mutable_implementation()?;
            let name = self.names.maker(kind).ok()?;
            Some((kind, implementation, name))
        });
        for (kind, implementation, name) in growable {
            debug!(%kind, name, "emitting mutable maker");
            sink.add_method(makers::maker_method(kind, &implementation, name));
        }
    }

    /// Flushes shims then makers and ends the unit.
    pub fn finish<S: MethodSink + ?Sized>(mut self, sink: &mut S) {
        self.flush_shims(sink);
        self.flush_makers(sink);
    }
}

/// The common frame of every helper: `@Generated`, `private static`, the
/// kind's type variables, and a single parameter `o` of the generic
/// interface type that is also returned.
fn helper_method(kind: CollectionKind, name: &str, body: CodeBlock) -> MethodSpec {
    let signature_type = kind.generic_interface();
    MethodSpec::builder(name)
        .annotation(AnnotationSpec::with_string_value(
            ClassName::GENERATED,
            GENERATOR_NAME,
        ))
        .modifiers(&[Modifier::Private, Modifier::Static])
        .type_variables(kind.type_variables().iter().copied())
        .returns(signature_type.clone())
        .parameter(ParameterSpec::new(signature_type, "o"))
        .code(body)
        .build()
}
