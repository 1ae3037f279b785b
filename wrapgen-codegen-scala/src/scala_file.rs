//! ScalaFile abstraction for structured Scala file generation.

use wrapgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::{ImportCollector, WILDCARD},
};

use crate::naming::escape_path;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by wrapgen. DO NOT EDIT.";

/// A structured representation of a Scala source file.
///
/// # Example
///
/// ```
/// use wrapgen_codegen_scala::{ScalaFile, ObjectDef};
///
/// let code = ScalaFile::new("example.wrappers")
///     .source("example.Customer")
///     .add(ObjectDef::new("Empty"))
///     .render();
/// assert!(code.contains("package example.wrappers\n\nobject Empty\n"));
/// ```
#[derive(Debug, Default)]
pub struct ScalaFile {
    package: String,
    source: Option<String>,
    imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl ScalaFile {
    /// A file in `package`; an empty package omits the clause.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Record the host class the file was generated from.
    pub fn source(mut self, qualified: impl Into<String>) -> Self {
        self.source = Some(qualified.into());
        self
    }

    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        self.imports.merge(imports);
        self
    }

    /// Add a top-level definition.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::scala();

        builder.push_line(GENERATED_HEADER);
        if let Some(source) = &self.source {
            builder.push_comment(&format!("Source: {}", source));
        }

        if !self.package.is_empty() {
            builder.push_blank();
            builder.push_line(&format!("package {}", escape_path(&self.package)));
        }

        if !self.imports.is_empty() {
            builder.push_blank();
            for (package, symbols) in self.imports.iter() {
                builder.push_line(&import_line(package, symbols.iter().map(String::as_str)));
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

fn import_line<'a>(package: &str, symbols: impl Iterator<Item = &'a str>) -> String {
    let symbols: Vec<&str> = symbols.collect();
    if symbols.contains(&WILDCARD) {
        return format!("import {}._", package);
    }
    match symbols.as_slice() {
        [single] => format!("import {}.{}", package, single),
        many => format!("import {}.{{{}}}", package, many.join(", ")),
    }
}
