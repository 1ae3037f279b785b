//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indent level, the Scala style guide default.
const INDENT: &str = "  ";

/// Accumulates lines of code at a tracked indent level.
///
/// # Example
///
/// ```
/// use wrapgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::scala();
/// builder.emit(&CodeFragment::braced(
///     "object Main",
///     vec![CodeFragment::line("def answer: Int = 42")],
/// ));
///
/// assert_eq!(builder.build(), "object Main {\n  def answer: Int = 42\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// A builder with 2-space indentation.
    pub fn scala() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a doc comment; a single line stays on one line.
    pub fn push_scaladoc(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => self,
            [single] => self.push_line(&format!("/** {} */", single)),
            _ => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */")
            }
        }
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::ScalaDoc(lines) => {
                self.push_scaladoc(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let mut builder = CodeBuilder::scala();
        builder.push_indent().push_line("a").push_line("").push_line("b");
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_dedent_stops_at_zero() {
        let mut builder = CodeBuilder::scala();
        builder.push_dedent().push_line("top").push_comment("generated");
        assert_eq!(builder.build(), "top\n// generated\n");
    }

    #[test]
    fn test_scaladoc() {
        let mut builder = CodeBuilder::scala();
        builder.push_scaladoc(&["One line.".to_string()]);
        builder.push_scaladoc(&["First.".to_string(), String::new(), "Second.".to_string()]);
        assert_eq!(
            builder.build(),
            "/** One line. */\n/**\n * First.\n *\n * Second.\n */\n"
        );
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::ScalaDoc(vec!["Generated.".to_string()]),
                    CodeFragment::braced(
                        "final class A",
                        vec![
                            CodeFragment::line("def f: Int ="),
                            CodeFragment::indent(vec![CodeFragment::line("1")]),
                            CodeFragment::Blank,
                            CodeFragment::braced("def g: Int =", vec![CodeFragment::line("2")]),
                        ],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::scala();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "/** Generated. */\nfinal class A {\n  def f: Int =\n    1\n\n  \
             def g: Int = {\n    2\n  }\n}\n"
        );
    }
}
