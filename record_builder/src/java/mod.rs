//! Java source model: types, code fragments, methods, classes and rendering.
//!
//! The collection helpers build [`MethodSpec`] values and hand them to a
//! [`MethodSink`]; nothing in this module knows about builders.

mod code;
mod method;
mod parse;
mod type_name;
mod type_spec;
mod writer;

pub use code::{CodeBlock, CodeBlockBuilder, Segment};
pub use method::{AnnotationSpec, MethodSpec, MethodSpecBuilder, Modifier, ParameterSpec};
pub use parse::{parse_type, parse_type_with_variables};
pub use type_name::{ClassName, Primitive, TypeName, Wildcard};
pub use type_spec::{MethodSink, TypeSpec, TypeSpecBuilder};
pub use writer::{JavaFile, render_method};

impl std::str::FromStr for TypeName {
    type Err = crate::RecordBuilderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_type(input)
    }
}
