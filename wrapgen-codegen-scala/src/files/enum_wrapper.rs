//! Scala wrapper for a host enum.

use std::path::{Path, PathBuf};

use wrapgen_codegen::{
    builder::CodeFragment,
    resolve::{ResolvedClass, ResolvedConstant, ResolvedKind},
};
use wrapgen_core::{FileRules, GeneratedFile};

use super::source_path;
use crate::{
    Case, ClassDef, Def, Match, ObjectDef, Param, ScalaFile, ScalaType,
    naming::{escape_path, host_reference},
};

/// A sealed class with one case object per host constant, in declaration order.
pub struct EnumWrapperFile<'a> {
    class: &'a ResolvedClass<'a, ScalaType>,
    constants: &'a [ResolvedConstant],
}

impl<'a> EnumWrapperFile<'a> {
    /// `None` unless the class is an enum.
    pub fn new(class: &'a ResolvedClass<'a, ScalaType>) -> Option<Self> {
        match &class.kind {
            ResolvedKind::Enum { constants } => Some(Self { class, constants }),
            ResolvedKind::Class { .. } => None,
        }
    }

    fn host(&self) -> String {
        host_reference(self.class.qualified_name())
    }

    fn host_constant(&self, constant: &ResolvedConstant) -> String {
        format!("{}.{}", self.host(), escape_path(&constant.host))
    }

    fn case_objects(&self) -> Vec<ObjectDef> {
        self.constants
            .iter()
            .map(|constant| {
                ObjectDef::new(&constant.name)
                    .case()
                    .extends(format!("{}({})", self.class.name, self.host_constant(constant)))
            })
            .collect()
    }

    fn values(&self) -> CodeFragment {
        let names: Vec<&str> = self.constants.iter().map(|c| c.name.as_str()).collect();
        CodeFragment::line(format!(
            "val values: List[{}] = List({})",
            self.class.name,
            names.join(", ")
        ))
    }

    fn from_java(&self) -> Def {
        let def = Def::new("fromJava")
            .params(vec![Param::new("value", self.host())])
            .returns(&self.class.name);
        if self.constants.is_empty() {
            return def.body_expr("throw new MatchError(value)");
        }
        def.body(Match::new("value").cases(
            self.constants
                .iter()
                .map(|constant| Case::new(self.host_constant(constant), &constant.name)),
        ))
    }
}

impl GeneratedFile for EnumWrapperFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.class)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let sealed = ClassDef::new(&self.class.name)
            .modifier("sealed abstract")
            .param(Param::new("toJava", self.host()).val());
        let companion = ObjectDef::new(&self.class.name)
            .member(&self.case_objects()[..])
            .member(self.values())
            .member(self.from_java());

        ScalaFile::new(&self.class.package)
            .source(self.class.qualified_name())
            .add(sealed)
            .add(companion)
            .render()
    }
}
