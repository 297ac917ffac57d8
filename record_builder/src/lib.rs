//! Collection handling for generated Java record builders.
//!
//! A builder driver describes one record at a time as a list of
//! [`FieldDescriptor`]s and asks a [`CollectionHelpers`] what to do with the
//! list, set, map and collection components it finds: whether they are
//! wrapped in immutability shims, what single-item adders should accept, and
//! which private helper methods the generated class needs. Helpers are
//! written as [`java::MethodSpec`] values into any [`java::MethodSink`] and
//! can be rendered with [`java::JavaFile`].
//!
//! Generation is controlled by [`RecordBuilderOptions`], layered from
//! defaults, a TOML file and `RECORD_BUILDER_*` environment variables.

pub mod collections;
mod error;
pub mod field;
pub mod java;
pub mod options;

pub use collections::{CollectionHelpers, CollectionKind, SingleItemMetadata, SingleItemMode};
pub use error::{RecordBuilderError, RecordBuilderResult};
pub use field::FieldDescriptor;
pub use options::RecordBuilderOptions;
