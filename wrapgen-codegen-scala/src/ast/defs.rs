//! Scala method definitions.

use wrapgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Bodies longer than this move to their own line.
const INLINE_WIDTH: usize = 100;

/// A parameter in a method or class parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    /// Class parameters only: expose as a `val`.
    pub is_val: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_val: false,
        }
    }

    pub fn val(mut self) -> Self {
        self.is_val = true;
        self
    }

    fn render(&self) -> String {
        let val = if self.is_val { "val " } else { "" };
        format!("{}{}: {}", val, self.name, self.ty)
    }
}

pub(crate) fn param_list(params: &[Param]) -> String {
    let rendered: Vec<_> = params.iter().map(Param::render).collect();
    format!("({})", rendered.join(", "))
}

/// A `def`, including auxiliary constructors (`def this(...)`).
#[derive(Debug, Clone)]
pub struct Def {
    name: String,
    /// `None` renders a parameterless method (`def name: T`).
    params: Option<Vec<Param>>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
    is_override: bool,
    doc: Vec<String>,
}

impl Def {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            returns: None,
            body: Vec::new(),
            is_override: false,
            doc: Vec::new(),
        }
    }

    /// An auxiliary constructor.
    pub fn constructor(params: Vec<Param>) -> Self {
        Self::new("this").params(params)
    }

    /// Set the parameter list; an empty list renders `()`.
    pub fn params(mut self, params: Vec<Param>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// A single-expression body.
    pub fn body_expr(mut self, expr: impl Into<String>) -> Self {
        self.body = vec![CodeFragment::line(expr)];
        self
    }

    pub fn body(mut self, node: impl Renderable) -> Self {
        self.body = node.to_fragments();
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let mut out = String::new();
        if self.is_override {
            out.push_str("override ");
        }
        out.push_str("def ");
        out.push_str(&self.name);
        if let Some(params) = &self.params {
            out.push_str(&param_list(params));
        }
        if let Some(ty) = &self.returns {
            out.push_str(": ");
            out.push_str(ty);
        }
        out.push_str(" =");
        out
    }

    /// Build the def as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::scala();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Def {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::ScalaDoc(self.doc.clone()));
        }

        let signature = self.signature();
        match self.body.as_slice() {
            [CodeFragment::Line(expr)] if signature.len() + expr.len() < INLINE_WIDTH => {
                fragments.push(CodeFragment::line(format!("{} {}", signature, expr)));
            }
            // `def f: T = x match {` keeps the block opener on the signature line
            [CodeFragment::Block {
                header,
                body,
                close,
            }] => {
                fragments.push(CodeFragment::block(
                    format!("{} {}", signature, header),
                    body.clone(),
                    close.clone(),
                ));
            }
            body => {
                fragments.push(CodeFragment::line(signature));
                fragments.push(CodeFragment::indent(body.to_vec()));
            }
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterless_def() {
        let def = Def::new("firstName")
            .returns("String")
            .body_expr("underlying.getFirstName()");
        assert_eq!(def.build(), "def firstName: String = underlying.getFirstName()\n");
    }

    #[test]
    fn test_override_with_empty_params() {
        let def = Def::new("hashCode")
            .params(vec![])
            .returns("Int")
            .overriding()
            .body_expr("underlying.hashCode()");
        assert_eq!(
            def.build(),
            "override def hashCode(): Int = underlying.hashCode()\n"
        );
    }

    #[test]
    fn test_long_body_wraps() {
        let def = Def::constructor(vec![
            Param::new("firstName", "String"),
            Param::new("lastName", "Option[String]"),
        ])
        .body_expr("this(new _root_.example.Customer(firstName, lastName.orNull))");
        assert_eq!(
            def.build(),
            "def this(firstName: String, lastName: Option[String]) =\n  \
             this(new _root_.example.Customer(firstName, lastName.orNull))\n"
        );
    }

    #[test]
    fn test_doc() {
        let def = Def::new("total")
            .returns("Double")
            .doc("Computed by the host class.")
            .body_expr("underlying.getTotal()");
        assert_eq!(
            def.build(),
            "/** Computed by the host class. */\ndef total: Double = underlying.getTotal()\n"
        );
    }
}
