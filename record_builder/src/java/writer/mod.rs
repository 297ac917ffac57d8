//! Java source rendering.
//!
//! [`JavaFile`] renders a [`TypeSpec`] as a compilation unit. Classes are
//! imported once and spelled by their simple name; a class whose simple name
//! clashes with an earlier import, or with the generated class itself, is
//! spelled fully qualified instead.

use std::collections::{BTreeMap, BTreeSet};

use super::code::{CodeBlock, Segment};
use super::method::{AnnotationSpec, MethodSpec};
use super::type_name::{ClassName, TypeName};
use super::type_spec::TypeSpec;
use crate::options::RecordBuilderOptions;

const DEFAULT_INDENT: &str = "    ";

/// A generated class together with its package and file header.
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    type_spec: TypeSpec,
    file_comment: Option<String>,
    indent: String,
}

impl JavaFile {
    /// A file for `type_spec` in `package` with no comment and four-space
    /// indentation.
    #[must_use]
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            type_spec,
            file_comment: None,
            indent: DEFAULT_INDENT.to_owned(),
        }
    }

    /// A file using the `file_comment` and `file_indent` options.
    #[must_use]
    pub fn with_options(
        package: impl Into<String>,
        type_spec: TypeSpec,
        options: &RecordBuilderOptions,
    ) -> Self {
        Self::new(package, type_spec)
            .file_comment(options.file_comment.clone())
            .indent(options.file_indent.clone())
    }

    /// Sets the comment placed at the top of the file. Empty means none.
    #[must_use]
    pub fn file_comment(mut self, comment: impl Into<String>) -> Self {
        let text = comment.into();
        self.file_comment = (!text.is_empty()).then_some(text);
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// The wrapped class.
    #[must_use]
    pub const fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    /// Renders the compilation unit.
    #[must_use]
    pub fn render(&self) -> String {
        let imports = Imports::collect(&self.package, &self.type_spec);
        let mut writer = JavaWriter::new(&self.indent);

        if let Some(comment) = &self.file_comment {
            for line in comment.lines() {
                writer.line(&format!("// {line}"));
            }
            writer.blank();
        }
        if !self.package.is_empty() {
            writer.line(&format!("package {};", self.package));
            writer.blank();
        }
        let import_lines = imports.import_lines();
        if !import_lines.is_empty() {
            for import in &import_lines {
                writer.line(&format!("import {import};"));
            }
            writer.blank();
        }

        let mut header = String::new();
        for modifier in self.type_spec.modifiers() {
            header.push_str(modifier.keyword());
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(self.type_spec.name());
        header.push_str(" {");
        writer.line(&header);
        writer.indent();
        for (index, method) in self.type_spec.methods().iter().enumerate() {
            if index > 0 {
                writer.blank();
            }
            write_method(&mut writer, &imports, method);
        }
        writer.outdent();
        writer.line("}");
        writer.finish()
    }
}

/// Renders a single method with canonical type names, without imports.
///
/// Handy for diagnostics and for drivers that assemble files themselves.
#[must_use]
pub fn render_method(method: &MethodSpec, indent: &str) -> String {
    let imports = Imports::default();
    let mut writer = JavaWriter::new(indent);
    write_method(&mut writer, &imports, method);
    writer.finish()
}

fn write_method(writer: &mut JavaWriter, imports: &Imports, method: &MethodSpec) {
    for annotation in method.annotations() {
        writer.line(&annotation_source(imports, annotation));
    }

    let mut signature = String::new();
    for modifier in method.modifiers() {
        signature.push_str(modifier.keyword());
        signature.push(' ');
    }
    if !method.type_variables().is_empty() {
        signature.push('<');
        signature.push_str(&method.type_variables().join(", "));
        signature.push_str("> ");
    }
    signature.push_str(&imports.spell_type(method.returns()));
    signature.push(' ');
    signature.push_str(method.name());
    signature.push('(');
    let parameters: Vec<String> = method
        .parameters()
        .iter()
        .map(|parameter| format!("{} {}", imports.spell_type(parameter.ty()), parameter.name()))
        .collect();
    signature.push_str(&parameters.join(", "));
    signature.push_str(") {");
    writer.line(&signature);

    writer.indent();
    write_code(writer, imports, method.body());
    writer.outdent();
    writer.line("}");
}

fn annotation_source(imports: &Imports, annotation: &AnnotationSpec) -> String {
    let name = imports.spell_class(annotation.class());
    match annotation.value() {
        Some(value) => format!("@{name}(\"{}\")", escape_string(value)),
        None => format!("@{name}"),
    }
}

fn write_code(writer: &mut JavaWriter, imports: &Imports, code: &CodeBlock) {
    let mut pending = String::new();
    for segment in code.segments() {
        match segment {
            Segment::Text(text) => pending.push_str(text),
            Segment::Type(ty) => pending.push_str(&imports.spell_type(ty)),
            Segment::LineEnd => {
                writer.line(&pending);
                pending.clear();
            }
            Segment::Indent => writer.indent(),
            Segment::Unindent => writer.outdent(),
        }
    }
    if !pending.is_empty() {
        writer.line(&pending);
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decides which classes are imported and how each class is spelled.
#[derive(Debug, Default)]
struct Imports {
    /// Top-level simple name to the package it is imported from.
    by_simple_name: BTreeMap<String, String>,
    file_package: String,
}

impl Imports {
    fn collect(file_package: &str, type_spec: &TypeSpec) -> Self {
        let mut classes = BTreeSet::new();
        for method in type_spec.methods() {
            for annotation in method.annotations() {
                classes.insert(annotation.class().clone());
            }
            let mut record = |class: &ClassName| {
                classes.insert(class.clone());
            };
            method.returns().for_each_class(&mut record);
            for parameter in method.parameters() {
                parameter.ty().for_each_class(&mut record);
            }
            for ty in method.body().types() {
                ty.for_each_class(&mut record);
            }
        }

        let mut by_simple_name = BTreeMap::new();
        for class in classes {
            if class.package().is_empty() || class.top_level_name() == type_spec.name() {
                continue;
            }
            by_simple_name
                .entry(class.top_level_name().to_owned())
                .or_insert_with(|| class.package().to_owned());
        }
        Self {
            by_simple_name,
            file_package: file_package.to_owned(),
        }
    }

    fn import_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .by_simple_name
            .iter()
            .filter(|(_, package)| package.as_str() != "java.lang" && **package != self.file_package)
            .map(|(simple, package)| format!("{package}.{simple}"))
            .collect();
        lines.sort_unstable();
        lines
    }

    fn spell_class(&self, class: &ClassName) -> String {
        let imported = self
            .by_simple_name
            .get(class.top_level_name())
            .is_some_and(|package| package == class.package());
        if imported || class.package().is_empty() {
            class.simple_name().to_owned()
        } else {
            class.canonical_name()
        }
    }

    fn spell_type(&self, ty: &TypeName) -> String {
        let mut out = String::new();
        ty.write_with(&mut out, &|class: &ClassName| self.spell_class(class));
        out
    }
}

/// Line-oriented source buffer with indentation tracking.
struct JavaWriter {
    buffer: String,
    unit: String,
    depth: usize,
}

impl JavaWriter {
    fn new(unit: &str) -> Self {
        Self {
            buffer: String::new(),
            unit: unit.to_owned(),
            depth: 0,
        }
    }

    const fn indent(&mut self) {
        self.depth += 1;
    }

    const fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.unit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn blank(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}
