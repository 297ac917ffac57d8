//! Immutability shims.
//!
//! A shim turns whatever the caller handed the builder (possibly `null`)
//! into the immutable form stored in the record:
//!
//! ```java
//! private static <T> List<T> __list(List<T> o) {
//!     return (o != null) ? List.copyOf(o) : List.of();
//! }
//! ```

use super::helper_method;
use super::kind::CollectionKind;
use crate::java::{ClassName, CodeBlock, MethodSpec};

/// Builds the shim for `kind` under the allocated `name`.
pub(crate) fn shim_method(kind: CollectionKind, name: &str) -> MethodSpec {
    let body = match kind {
        CollectionKind::GenericCollection => collection_body(),
        CollectionKind::Sequence | CollectionKind::Set | CollectionKind::AssociativeMap => {
            copy_or_empty(kind.interface())
        }
    };
    helper_method(kind, name, body)
}

fn copy_or_empty(interface: ClassName) -> CodeBlock {
    CodeBlock::builder()
        .text("return (o != null) ? ")
        .ty(interface.clone())
        .text(".copyOf(o) : ")
        .ty(interface)
        .text(".of()")
        .end_statement()
        .build()
}

// A `Collection` may hold a set at runtime; only sets are special-cased, every
// other value gets list semantics.
fn collection_body() -> CodeBlock {
    CodeBlock::builder()
        .text("if (o instanceof ")
        .ty(ClassName::SET)
        .text(")")
        .open_block()
        .text("return ")
        .ty(ClassName::SET)
        .text(".copyOf(o)")
        .end_statement()
        .close_block()
        .block(copy_or_empty(ClassName::LIST))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::{Modifier, render_method};
    use rstest::rstest;

    #[rstest]
    fn list_shim_copies_or_returns_empty() {
        let method = shim_method(CollectionKind::Sequence, "__list");
        assert_eq!(method.name(), "__list");
        assert_eq!(method.type_variables(), ["T"]);
        assert!(method.has_modifier(Modifier::Private));
        assert!(method.has_modifier(Modifier::Static));
        assert_eq!(
            method.body().to_inline_string(),
            "return (o != null) ? java.util.List.copyOf(o) : java.util.List.of();"
        );
    }

    #[rstest]
    fn map_shim_declares_key_and_value_variables() {
        let method = shim_method(CollectionKind::AssociativeMap, "__map1");
        assert_eq!(method.type_variables(), ["K", "V"]);
        assert_eq!(method.returns().to_string(), "java.util.Map<K, V>");
        let parameter = method.parameters().first().expect("one parameter");
        assert_eq!(parameter.name(), "o");
        assert_eq!(parameter.ty(), method.returns());
    }

    #[rstest]
    fn collection_shim_checks_for_sets_first() {
        let method = shim_method(CollectionKind::GenericCollection, "__collection");
        let rendered = render_method(&method, "    ");
        let expected = concat!(
            "@javax.annotation.processing.Generated(\"io.soabase.recordbuilder.core.RecordBuilder\")\n",
            "private static <T> java.util.Collection<T> __collection(java.util.Collection<T> o) {\n",
            "    if (o instanceof java.util.Set) {\n",
            "        return java.util.Set.copyOf(o);\n",
            "    }\n",
            "    return (o != null) ? java.util.List.copyOf(o) : java.util.List.of();\n",
            "}\n",
        );
        assert_eq!(rendered, expected);
    }
}
