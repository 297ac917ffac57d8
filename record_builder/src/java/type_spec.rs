//! The generated class and the sink capability helper emitters write into.

use super::method::{MethodSpec, Modifier};

/// Destination for generated methods.
///
/// Helper emitters only need somewhere to put finished methods; the driver
/// decides whether that is the builder class under construction or a plain
/// list it inspects.
pub trait MethodSink {
    /// Appends `method` to the generated unit.
    fn add_method(&mut self, method: MethodSpec);
}

impl MethodSink for Vec<MethodSpec> {
    fn add_method(&mut self, method: MethodSpec) {
        self.push(method);
    }
}

/// A generated top-level class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    name: String,
    modifiers: Vec<Modifier>,
    methods: Vec<MethodSpec>,
}

impl TypeSpec {
    /// Starts a class named `name`.
    #[must_use]
    pub fn class_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder {
            spec: Self {
                name: name.into(),
                modifiers: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Methods in insertion order.
    #[must_use]
    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|method| method.name() == name)
    }
}

/// Assembles a [`TypeSpec`].
#[derive(Debug)]
pub struct TypeSpecBuilder {
    spec: TypeSpec,
}

impl TypeSpecBuilder {
    /// Adds class modifiers; duplicates are ignored.
    #[must_use]
    pub fn modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.spec.modifiers.extend_from_slice(modifiers);
        self.spec.modifiers.sort_unstable();
        self.spec.modifiers.dedup();
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.spec.methods.push(method);
        self
    }

    /// Finishes the class.
    #[must_use]
    pub fn build(self) -> TypeSpec {
        self.spec
    }
}

impl MethodSink for TypeSpecBuilder {
    fn add_method(&mut self, method: MethodSpec) {
        self.spec.methods.push(method);
    }
}
