//! Record components as seen by the collection helpers.

use crate::error::{RecordBuilderError, RecordBuilderResult};
use crate::java::{TypeName, parse_type};

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "null", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Whether `name` can be used as a Java identifier.
///
/// Letters, digits, `_` and `$` are accepted, the first character may not be
/// a digit, and reserved words are rejected.
///
/// ```
/// use record_builder::field::is_java_identifier;
///
/// assert!(is_java_identifier("tags"));
/// assert!(is_java_identifier("$value"));
/// assert!(!is_java_identifier("class"));
/// assert!(!is_java_identifier("2nd"));
/// ```
#[must_use]
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !JAVA_KEYWORDS.contains(&name)
}

/// A named, typed record component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    type_name: TypeName,
}

impl FieldDescriptor {
    /// Creates a descriptor after checking the name.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::InvalidIdentifier`] when `name` is not a
    /// Java identifier.
    pub fn new(name: impl Into<String>, type_name: TypeName) -> RecordBuilderResult<Self> {
        let owned: String = name.into();
        if !is_java_identifier(&owned) {
            return Err(RecordBuilderError::InvalidIdentifier { name: owned });
        }
        Ok(Self {
            name: owned,
            type_name,
        })
    }

    /// Creates a descriptor from a type expression such as
    /// `"Map<String, Long>"`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::TypeSyntax`] when the expression does not
    /// parse and [`RecordBuilderError::InvalidIdentifier`] for a bad name.
    pub fn parse(name: impl Into<String>, type_expr: &str) -> RecordBuilderResult<Self> {
        Self::new(name, parse_type(type_expr)?)
    }

    /// Component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared component type.
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::ClassName;
    use rstest::rstest;

    #[rstest]
    #[case("tags", true)]
    #[case("_x", true)]
    #[case("$1", true)]
    #[case("naïve", true)]
    #[case("", false)]
    #[case("9lives", false)]
    #[case("has-dash", false)]
    #[case("new", false)]
    #[case("_", false)]
    fn identifiers(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_java_identifier(name), expected, "{name}");
    }

    #[rstest]
    fn parse_resolves_the_type() {
        let field = FieldDescriptor::parse("tags", "List<String>").expect("valid field");
        assert_eq!(field.name(), "tags");
        assert_eq!(field.type_name().raw_class(), Some(&ClassName::LIST));
    }

    #[rstest]
    fn bad_names_are_rejected() {
        let err = FieldDescriptor::new("int", ClassName::STRING.into()).expect_err("keyword");
        assert!(matches!(err, RecordBuilderError::InvalidIdentifier { ref name } if name == "int"));
    }

    #[rstest]
    fn bad_types_are_rejected() {
        let err = FieldDescriptor::parse("tags", "List<").expect_err("unterminated");
        assert!(matches!(err, RecordBuilderError::TypeSyntax { .. }));
    }
}
