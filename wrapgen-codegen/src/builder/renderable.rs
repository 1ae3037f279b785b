//! Renderable trait and CodeFragment.
//!
//! Lets AST nodes be composed and rendered without direct coupling to
//! [`CodeBuilder`](super::CodeBuilder).

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A `/** ... */` doc comment; one entry per line.
    ScalaDoc(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A `{ ... }` block: the header gets ` {` appended, the block closes with `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: format!("{} {{", header.into()),
            body,
            close: Some("}".to_string()),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
