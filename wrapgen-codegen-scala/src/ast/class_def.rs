//! Scala class builder.

use wrapgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::defs::{Param, param_list};

/// Builder for a Scala class with a primary constructor.
#[derive(Debug, Clone)]
pub struct ClassDef {
    name: String,
    modifiers: Vec<String>,
    params: Vec<Param>,
    /// Members, rendered with a blank line between groups.
    members: Vec<Vec<CodeFragment>>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            params: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add a modifier such as `final` or `sealed abstract`.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
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

    pub fn members<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        nodes.into_iter().fold(self, |class, node| class.member(node))
    }

    fn header(&self) -> String {
        let mut header = String::new();
        for modifier in &self.modifiers {
            header.push_str(modifier);
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(&self.name);
        header.push_str(&param_list(&self.params));
        header
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::scala();
        builder.emit(self);
        builder.build()
    }
}

/// Join member groups with blank lines.
pub(crate) fn separated(members: &[Vec<CodeFragment>]) -> Vec<CodeFragment> {
    let mut body = Vec::new();
    for (i, group) in members.iter().enumerate() {
        if i > 0 {
            body.push(CodeFragment::Blank);
        }
        body.extend(group.iter().cloned());
    }
    body
}

impl Renderable for ClassDef {
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
    use crate::ast::Def;

    #[test]
    fn test_class_without_members() {
        let class = ClassDef::new("Kind")
            .modifier("sealed abstract")
            .param(Param::new("toJava", "_root_.example.Kind").val());
        assert_eq!(
            class.build(),
            "sealed abstract class Kind(val toJava: _root_.example.Kind)\n"
        );
    }

    #[test]
    fn test_members_are_separated() {
        let class = ClassDef::new("Tag")
            .modifier("final")
            .param(Param::new("underlying", "_root_.example.Tag").val())
            .member(Def::new("label").returns("String").body_expr("underlying.getLabel()"))
            .member(Def::new("size").returns("Int").body_expr("underlying.getSize()"));
        assert_eq!(
            class.build(),
            "final class Tag(val underlying: _root_.example.Tag) {\n  \
             def label: String = underlying.getLabel()\n\n  \
             def size: Int = underlying.getSize()\n}\n"
        );
    }
}
