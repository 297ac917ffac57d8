//! Java type model used by the generator.
//!
//! [`TypeName`] mirrors the shapes a Java declaration can take: primitives,
//! plain and parameterized classes, wildcards, type variables and arrays.
//! Classification works on the *raw* type, so [`TypeName::raw_class`] erases
//! type arguments.

use std::borrow::Cow;
use std::fmt;

/// A fully-qualified Java class name.
///
/// Nested classes keep their enclosing names in the simple name
/// (`Map.Entry`), so the package is always the prefix before the first
/// capitalised segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: Cow<'static, str>,
    simple_name: Cow<'static, str>,
}

impl ClassName {
    /// `java.lang.Object`.
    pub const OBJECT: Self = Self::from_static("java.lang", "Object");
    /// `java.lang.String`.
    pub const STRING: Self = Self::from_static("java.lang", "String");
    /// `java.util.List`.
    pub const LIST: Self = Self::from_static("java.util", "List");
    /// `java.util.Set`.
    pub const SET: Self = Self::from_static("java.util", "Set");
    /// `java.util.Map`.
    pub const MAP: Self = Self::from_static("java.util", "Map");
    /// `java.util.Collection`.
    pub const COLLECTION: Self = Self::from_static("java.util", "Collection");
    /// `java.util.ArrayList`.
    pub const ARRAY_LIST: Self = Self::from_static("java.util", "ArrayList");
    /// `java.util.HashSet`.
    pub const HASH_SET: Self = Self::from_static("java.util", "HashSet");
    /// `java.util.HashMap`.
    pub const HASH_MAP: Self = Self::from_static("java.util", "HashMap");
    /// `javax.annotation.processing.Generated`.
    pub const GENERATED: Self = Self::from_static("javax.annotation.processing", "Generated");

    /// Builds a class name from static strings, usable in constants.
    #[must_use]
    pub const fn from_static(package: &'static str, simple_name: &'static str) -> Self {
        Self {
            package: Cow::Borrowed(package),
            simple_name: Cow::Borrowed(simple_name),
        }
    }

    /// Builds a class name from owned parts. Use an empty package for the
    /// default package.
    #[must_use]
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: Cow::Owned(package.into()),
            simple_name: Cow::Owned(simple_name.into()),
        }
    }

    /// Package of the class; empty for the default package.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple name, including enclosing class names for nested classes.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Name of the top-level class, which is what an import refers to.
    #[must_use]
    pub fn top_level_name(&self) -> &str {
        self.simple_name
            .split_once('.')
            .map_or(self.simple_name(), |(outer, _)| outer)
    }

    /// `package.SimpleName`, or just the simple name in the default package.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.to_string()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Whether the class lives in `java.lang` and never needs an import.
    #[must_use]
    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Java primitive types, plus `void` for method returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `char`
    Char,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `void`
    Void,
}

impl Primitive {
    /// Looks up a primitive by its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let primitive = match keyword {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "char" => Self::Char,
            "float" => Self::Float,
            "double" => Self::Double,
            "void" => Self::Void,
            _ => return None,
        };
        Some(primitive)
    }

    /// The Java keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }
}

/// A use-site wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends Bound`
    Extends(Box<TypeName>),
    /// `? super Bound`
    Super(Box<TypeName>),
}

/// A Java type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// A primitive such as `int`.
    Primitive(Primitive),
    /// A class used without type arguments.
    Class(ClassName),
    /// A class applied to type arguments, such as `List<String>`.
    Parameterized {
        /// The raw class.
        raw: ClassName,
        /// Type arguments in declaration order.
        arguments: Vec<TypeName>,
    },
    /// A wildcard; only meaningful as a type argument.
    Wildcard(Wildcard),
    /// A type variable such as `T`.
    Variable(String),
    /// An array of the component type.
    Array(Box<TypeName>),
}

impl TypeName {
    /// Applies `arguments` to `raw`.
    #[must_use]
    pub const fn parameterized(raw: ClassName, arguments: Vec<Self>) -> Self {
        Self::Parameterized { raw, arguments }
    }

    /// `? extends bound`.
    #[must_use]
    pub fn subtype_of(bound: Self) -> Self {
        Self::Wildcard(Wildcard::Extends(Box::new(bound)))
    }

    /// `? super bound`.
    #[must_use]
    pub fn supertype_of(bound: Self) -> Self {
        Self::Wildcard(Wildcard::Super(Box::new(bound)))
    }

    /// A type variable.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// The raw class with type arguments erased, if this is a class type.
    #[must_use]
    pub const fn raw_class(&self) -> Option<&ClassName> {
        match self {
            Self::Class(class) | Self::Parameterized { raw: class, .. } => Some(class),
            _ => None,
        }
    }

    /// Declared type arguments; empty unless parameterized.
    #[must_use]
    pub fn type_arguments(&self) -> &[Self] {
        match self {
            Self::Parameterized { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Whether this type carries type arguments.
    #[must_use]
    pub const fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized { .. })
    }

    /// Whether this type is a wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }

    /// Calls `visit` for every class mentioned anywhere in the type.
    pub fn for_each_class<F>(&self, visit: &mut F)
    where
        F: FnMut(&ClassName),
    {
        match self {
            Self::Primitive(_) | Self::Variable(_) | Self::Wildcard(Wildcard::Unbounded) => {}
            Self::Class(class) => visit(class),
            Self::Parameterized { raw, arguments } => {
                visit(raw);
                for argument in arguments {
                    argument.for_each_class(visit);
                }
            }
            Self::Wildcard(Wildcard::Extends(bound) | Wildcard::Super(bound)) => {
                bound.for_each_class(visit);
            }
            Self::Array(component) => component.for_each_class(visit),
        }
    }

    /// Writes the type into `out`, asking `name_of` how to spell each class.
    ///
    /// [`fmt::Display`] spells classes canonically; the source writer spells
    /// imported classes by their simple name.
    pub fn write_with<F>(&self, out: &mut String, name_of: &F)
    where
        F: Fn(&ClassName) -> String,
    {
        match self {
            Self::Primitive(primitive) => out.push_str(primitive.keyword()),
            Self::Class(class) => out.push_str(&name_of(class)),
            Self::Parameterized { raw, arguments } => {
                out.push_str(&name_of(raw));
                out.push('<');
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    argument.write_with(out, name_of);
                }
                out.push('>');
            }
            Self::Wildcard(Wildcard::Unbounded) => out.push('?'),
            Self::Wildcard(Wildcard::Extends(bound)) => {
                out.push_str("? extends ");
                bound.write_with(out, name_of);
            }
            Self::Wildcard(Wildcard::Super(bound)) => {
                out.push_str("? super ");
                bound.write_with(out, name_of);
            }
            Self::Variable(name) => out.push_str(name),
            Self::Array(component) => {
                component.write_with(out, name_of);
                out.push_str("[]");
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        Self::Class(class)
    }
}

impl From<Primitive> for TypeName {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.write_with(&mut rendered, &ClassName::canonical_name);
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn list_of_strings() -> TypeName {
        TypeName::parameterized(ClassName::LIST, vec![ClassName::STRING.into()])
    }

    #[rstest]
    fn raw_class_erases_arguments() {
        let ty = list_of_strings();
        assert_eq!(ty.raw_class(), Some(&ClassName::LIST));
        assert_eq!(ty.type_arguments().len(), 1);
    }

    #[rstest]
    #[case(TypeName::Primitive(Primitive::Int))]
    #[case(TypeName::variable("T"))]
    #[case(TypeName::subtype_of(ClassName::STRING.into()))]
    fn non_class_types_have_no_raw_class(#[case] ty: TypeName) {
        assert!(ty.raw_class().is_none());
    }

    #[rstest]
    fn owned_and_static_names_compare_equal() {
        assert_eq!(ClassName::new("java.util", "List"), ClassName::LIST);
    }

    #[rstest]
    fn display_uses_canonical_names() {
        let ty = TypeName::parameterized(
            ClassName::MAP,
            vec![
                ClassName::STRING.into(),
                TypeName::subtype_of(ClassName::new("java.lang", "Number").into()),
            ],
        );
        assert_eq!(
            ty.to_string(),
            "java.util.Map<java.lang.String, ? extends java.lang.Number>"
        );
    }

    #[rstest]
    fn nested_classes_import_their_outer_class() {
        let entry = ClassName::new("java.util", "Map.Entry");
        assert_eq!(entry.top_level_name(), "Map");
        assert_eq!(entry.canonical_name(), "java.util.Map.Entry");
    }

    #[rstest]
    fn for_each_class_walks_bounds_and_arrays() {
        let ty = TypeName::Array(Box::new(TypeName::parameterized(
            ClassName::COLLECTION,
            vec![TypeName::supertype_of(ClassName::STRING.into())],
        )));
        let mut seen = Vec::new();
        ty.for_each_class(&mut |class| seen.push(class.canonical_name()));
        assert_eq!(seen, vec!["java.util.Collection", "java.lang.String"]);
    }
}
