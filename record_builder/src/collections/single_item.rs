//! Metadata for single-item adder methods.
//!
//! An adder such as `addTags(String)` needs the mutable class to grow, the
//! component's type arguments, and the type a bulk adder accepts. The bulk
//! type widens every argument to `? extends A` so callers can pass any
//! compatible producer.

use crate::java::{ClassName, TypeName};

/// How declared wildcards influence the synthesized bulk type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SingleItemMode {
    /// Always widen the declared arguments.
    #[default]
    Standard,
    /// Use the declared type verbatim when it already carries wildcards.
    StandardForSetter,
    /// Produce nothing when the declared type already carries wildcards.
    ExcludeWildcardTypes,
}

/// What an adder for one component needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleItemMetadata {
    implementation: ClassName,
    type_arguments: Vec<TypeName>,
    wild_type: TypeName,
}

impl SingleItemMetadata {
    pub(crate) const fn new(
        implementation: ClassName,
        type_arguments: Vec<TypeName>,
        wild_type: TypeName,
    ) -> Self {
        Self {
            implementation,
            type_arguments,
            wild_type,
        }
    }

    /// The mutable class instantiated when the first item is added.
    #[must_use]
    pub const fn implementation(&self) -> &ClassName {
        &self.implementation
    }

    /// The component's declared type arguments.
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }

    /// The parameter type of the bulk adder.
    #[must_use]
    pub const fn wild_type(&self) -> &TypeName {
        &self.wild_type
    }

    /// `implementation` applied to the declared arguments, e.g.
    /// `ArrayList<String>`.
    #[must_use]
    pub fn parameterized_implementation(&self) -> TypeName {
        TypeName::parameterized(self.implementation.clone(), self.type_arguments.clone())
    }
}

/// Applies `container` to the first `count` of `arguments`, each widened to
/// `? extends A`.
///
/// Returns `None` when fewer than `count` arguments are declared.
///
/// ```
/// use record_builder::collections::wild_type;
/// use record_builder::java::{ClassName, TypeName};
///
/// let wild = wild_type(ClassName::COLLECTION, &[ClassName::STRING.into()], 1);
/// assert_eq!(
///     wild.map(|ty| ty.to_string()).as_deref(),
///     Some("java.util.Collection<? extends java.lang.String>")
/// );
/// ```
#[must_use]
pub fn wild_type(container: ClassName, arguments: &[TypeName], count: usize) -> Option<TypeName> {
    let widened: Vec<TypeName> = arguments
        .get(..count)?
        .iter()
        .cloned()
        .map(TypeName::subtype_of)
        .collect();
    Some(TypeName::parameterized(container, widened))
}

/// Whether any of the first `count` arguments is a wildcard.
#[must_use]
pub fn has_wildcard_type_arguments(arguments: &[TypeName], count: usize) -> bool {
    arguments.iter().take(count).any(TypeName::is_wildcard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::parse_type;
    use rstest::rstest;

    fn arguments_of(input: &str) -> Vec<TypeName> {
        parse_type(input)
            .expect("type parses")
            .type_arguments()
            .to_vec()
    }

    #[rstest]
    fn single_argument_is_widened() {
        let wild = wild_type(ClassName::COLLECTION, &arguments_of("List<Integer>"), 1)
            .expect("one argument declared");
        assert_eq!(wild.to_string(), "java.util.Collection<? extends java.lang.Integer>");
    }

    #[rstest]
    fn both_map_arguments_are_widened() {
        let wild = wild_type(ClassName::MAP, &arguments_of("Map<String, List<Long>>"), 2)
            .expect("two arguments declared");
        assert_eq!(
            wild.to_string(),
            "java.util.Map<? extends java.lang.String, ? extends java.util.List<java.lang.Long>>"
        );
    }

    #[rstest]
    fn missing_arguments_yield_nothing() {
        assert_eq!(wild_type(ClassName::MAP, &arguments_of("List<String>"), 2), None);
    }

    #[rstest]
    #[case("Map<? extends String, Long>", 2, true)]
    #[case("Map<String, ? super Long>", 2, true)]
    #[case("Map<String, ? super Long>", 1, false)]
    #[case("List<?>", 1, true)]
    #[case("List<String>", 1, false)]
    fn wildcard_detection_respects_the_count(
        #[case] input: &str,
        #[case] count: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(has_wildcard_type_arguments(&arguments_of(input), count), expected);
    }

    #[rstest]
    fn parameterized_implementation_uses_declared_arguments() {
        let metadata = SingleItemMetadata::new(
            ClassName::HASH_MAP,
            arguments_of("Map<String, Long>"),
            TypeName::from(ClassName::MAP),
        );
        assert_eq!(
            metadata.parameterized_implementation().to_string(),
            "java.util.HashMap<java.lang.String, java.lang.Long>"
        );
    }
}
