//! Scala object builder.

use wrapgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::class_def::separated;

/// Builder for `object` and `case object` definitions.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    name: String,
    is_case: bool,
    extends: Option<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_case: false,
            extends: None,
            members: Vec::new(),
        }
    }

    pub fn case(mut self) -> Self {
        self.is_case = true;
        self
    }

    /// Set the parent, including constructor arguments.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Add a member group.
    pub fn member(mut self, node: impl Renderable) -> Self {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.members.push(fragments);
        }
        self
    }

    fn header(&self) -> String {
        let case = if self.is_case { "case " } else { "" };
        match &self.extends {
            Some(parent) => format!("{}object {} extends {}", case, self.name, parent),
            None => format!("{}object {}", case, self.name),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::scala();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectDef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            vec![CodeFragment::line(self.header())]
        } else {
            vec![CodeFragment::braced(self.header(), separated(&self.members))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_object() {
        let object = ObjectDef::new("RETAIL")
            .case()
            .extends("CustomerType(_root_.example.CustomerType.RETAIL)");
        assert_eq!(
            object.build(),
            "case object RETAIL extends CustomerType(_root_.example.CustomerType.RETAIL)\n"
        );
    }

    #[test]
    fn test_companion() {
        let object = ObjectDef::new("Kind")
            .member(CodeFragment::line("val values: List[Kind] = List()"));
        assert_eq!(
            object.build(),
            "object Kind {\n  val values: List[Kind] = List()\n}\n"
        );
    }
}
