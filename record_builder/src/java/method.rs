//! Method declarations and the pieces they are made of.

use std::fmt;

use super::code::CodeBlock;
use super::type_name::{ClassName, TypeName};

/// Java declaration modifiers, in canonical source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `static`
    Static,
    /// `final`
    Final,
}

impl Modifier {
    /// The Java keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An annotation with at most a single `value` member, e.g.
/// `@Generated("io.soabase.recordbuilder.core.RecordBuilder")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSpec {
    class: ClassName,
    value: Option<String>,
}

impl AnnotationSpec {
    /// A marker annotation.
    #[must_use]
    pub const fn marker(class: ClassName) -> Self {
        Self { class, value: None }
    }

    /// An annotation with a string `value`.
    #[must_use]
    pub fn with_string_value(class: ClassName, value: impl Into<String>) -> Self {
        Self {
            class,
            value: Some(value.into()),
        }
    }

    /// The annotation type.
    #[must_use]
    pub const fn class(&self) -> &ClassName {
        &self.class
    }

    /// The string value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    name: String,
    ty: TypeName,
}

impl ParameterSpec {
    /// A parameter named `name` of type `ty`.
    #[must_use]
    pub fn new(ty: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type.
    #[must_use]
    pub const fn ty(&self) -> &TypeName {
        &self.ty
    }
}

/// A generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    name: String,
    annotations: Vec<AnnotationSpec>,
    modifiers: Vec<Modifier>,
    type_variables: Vec<String>,
    returns: TypeName,
    parameters: Vec<ParameterSpec>,
    body: CodeBlock,
}

impl MethodSpec {
    /// Starts a method named `name` returning `void`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> MethodSpecBuilder {
        MethodSpecBuilder {
            spec: Self {
                name: name.into(),
                annotations: Vec::new(),
                modifiers: Vec::new(),
                type_variables: Vec::new(),
                returns: TypeName::Primitive(super::Primitive::Void),
                parameters: Vec::new(),
                body: CodeBlock::default(),
            },
        }
    }

    /// Method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annotations in declaration order.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    /// Modifiers in canonical order.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Declared type variables, e.g. `["K", "V"]`.
    #[must_use]
    pub fn type_variables(&self) -> &[String] {
        &self.type_variables
    }

    /// Return type.
    #[must_use]
    pub const fn returns(&self) -> &TypeName {
        &self.returns
    }

    /// Parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Method body.
    #[must_use]
    pub const fn body(&self) -> &CodeBlock {
        &self.body
    }

    /// Whether the method carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// Assembles a [`MethodSpec`].
#[derive(Debug)]
pub struct MethodSpecBuilder {
    spec: MethodSpec,
}

impl MethodSpecBuilder {
    /// Adds an annotation.
    #[must_use]
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    /// Adds modifiers; duplicates are ignored and order is normalised.
    #[must_use]
    pub fn modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.spec.modifiers.extend_from_slice(modifiers);
        self.spec.modifiers.sort_unstable();
        self.spec.modifiers.dedup();
        self
    }

    /// Declares type variables on the method.
    #[must_use]
    pub fn type_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec
            .type_variables
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, ty: impl Into<TypeName>) -> Self {
        self.spec.returns = ty.into();
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.spec.parameters.push(parameter);
        self
    }

    /// Appends code to the body.
    #[must_use]
    pub fn code(mut self, code: CodeBlock) -> Self {
        let body = std::mem::take(&mut self.spec.body);
        self.spec.body = CodeBlock::builder().block(body).block(code).build();
        self
    }

    /// Finishes the method.
    #[must_use]
    pub fn build(self) -> MethodSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn modifiers_are_sorted_and_deduplicated() {
        let method = MethodSpec::builder("__list")
            .modifiers(&[Modifier::Static, Modifier::Private, Modifier::Static])
            .build();
        assert_eq!(method.modifiers(), &[Modifier::Private, Modifier::Static]);
        assert!(method.has_modifier(Modifier::Static));
    }

    #[rstest]
    fn code_is_appended_in_order() {
        let method = MethodSpec::builder("m")
            .code(CodeBlock::of("a"))
            .code(CodeBlock::of("b"))
            .build();
        assert_eq!(method.body().to_inline_string(), "ab");
    }

    #[rstest]
    fn defaults_to_void_return() {
        let method = MethodSpec::builder("m").build();
        assert_eq!(method.returns().to_string(), "void");
    }
}
