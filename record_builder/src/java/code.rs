//! Structured Java code fragments.
//!
//! A [`CodeBlock`] keeps type references apart from literal text so the
//! source writer can decide how each class is spelled once imports are known.

use super::type_name::TypeName;

/// One piece of a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal source text.
    Text(String),
    /// A type reference, spelled by the writer.
    Type(TypeName),
    /// End of the current line.
    LineEnd,
    /// Increase indentation for following lines.
    Indent,
    /// Decrease indentation for following lines.
    Unindent,
}

/// A fragment of Java code: an expression, a statement or a method body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    segments: Vec<Segment>,
}

impl CodeBlock {
    /// Starts an empty block.
    #[must_use]
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A block holding a single piece of text, typically an expression.
    #[must_use]
    pub fn of(text: impl Into<String>) -> Self {
        Self::builder().text(text).build()
    }

    /// The block's segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the block holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Type references used by the block.
    pub fn types(&self) -> impl Iterator<Item = &TypeName> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Type(ty) => Some(ty),
            _ => None,
        })
    }

    /// Renders the block on one logical line with canonical type names.
    ///
    /// Used for expression fragments handed back to a driver and for
    /// diagnostics; method bodies go through the source writer instead.
    #[must_use]
    pub fn to_inline_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Type(ty) => out.push_str(&ty.to_string()),
                Segment::LineEnd => out.push(' '),
                Segment::Indent | Segment::Unindent => {}
            }
        }
        out.trim_end().to_owned()
    }
}

/// Incrementally assembles a [`CodeBlock`].
#[derive(Debug, Default)]
pub struct CodeBlockBuilder {
    segments: Vec<Segment>,
}

impl CodeBlockBuilder {
    /// Appends literal text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let value = text.into();
        if !value.is_empty() {
            self.segments.push(Segment::Text(value));
        }
        self
    }

    /// Appends a type reference.
    #[must_use]
    pub fn ty(mut self, ty: impl Into<TypeName>) -> Self {
        self.segments.push(Segment::Type(ty.into()));
        self
    }

    /// Terminates the current statement with `;` and a line break.
    #[must_use]
    pub fn end_statement(mut self) -> Self {
        self.segments.push(Segment::Text(";".to_owned()));
        self.segments.push(Segment::LineEnd);
        self
    }

    /// Appends a line break without a semicolon.
    #[must_use]
    pub fn line_end(mut self) -> Self {
        self.segments.push(Segment::LineEnd);
        self
    }

    /// Ends a control-flow header with ` {` and indents what follows.
    #[must_use]
    pub fn open_block(self) -> Self {
        let mut opened = self.text(" {").line_end();
        opened.segments.push(Segment::Indent);
        opened
    }

    /// Closes the innermost block opened by [`Self::open_block`].
    #[must_use]
    pub fn close_block(mut self) -> Self {
        self.segments.push(Segment::Unindent);
        self.text("}").line_end()
    }

    /// Appends every segment of `block`.
    #[must_use]
    pub fn block(mut self, block: CodeBlock) -> Self {
        self.segments.extend(block.segments);
        self
    }

    /// Finishes the block.
    #[must_use]
    pub fn build(self) -> CodeBlock {
        CodeBlock {
            segments: self.segments,
        }
    }
}
