//! Mutable makers.
//!
//! A maker hands back a collection the builder may mutate in place, copying
//! only when the argument is not already the working implementation:
//!
//! ```java
//! private static <T> List<T> __ensureListMutable(List<T> o) {
//!     if (o == null) return new ArrayList<>();
//!     if (o instanceof ArrayList) return o;
//!     return new ArrayList<>(o);
//! }
//! ```

use super::helper_method;
use super::kind::CollectionKind;
use crate::java::{ClassName, CodeBlock, MethodSpec};

/// Builds the maker for `kind` under the allocated `name`, growing
/// `implementation`.
pub(crate) fn maker_method(
    kind: CollectionKind,
    implementation: &ClassName,
    name: &str,
) -> MethodSpec {
    let body = CodeBlock::builder()
        .text("if (o == null) return new ")
        .ty(implementation.clone())
        .text("<>()")
        .end_statement()
        .text("if (o instanceof ")
        .ty(implementation.clone())
        .text(") return o")
        .end_statement()
        .text("return new ")
        .ty(implementation.clone())
        .text("<>(o)")
        .end_statement()
        .build();
    helper_method(kind, name, body)
}
