//! Scala wrapper for a host class.

use std::path::{Path, PathBuf};

use wrapgen_codegen::{
    generation::ImportCollector,
    resolve::{ResolvedAccessor, ResolvedClass, ResolvedConstructor, ResolvedKind, ResolvedMutator},
};
use wrapgen_core::{FileRules, GeneratedFile};

use super::{literal_name, source_path};
use crate::{
    Case, ClassDef, Def, Match, Param, ScalaFile, ScalaType, TryCatch, from_java,
    naming::{escape_path, exception_reference, host_reference},
    to_java,
};

/// Parameter name of every generated mutator.
const MUTATOR_PARAM: &str = "value";

/// A `final class` around one host instance.
pub struct WrapperFile<'a> {
    class: &'a ResolvedClass<'a, ScalaType>,
    constructors: &'a [ResolvedConstructor<ScalaType>],
    accessors: &'a [ResolvedAccessor<ScalaType>],
    mutators: &'a [ResolvedMutator<ScalaType>],
}

impl<'a> WrapperFile<'a> {
    /// `None` for enums.
    pub fn new(class: &'a ResolvedClass<'a, ScalaType>) -> Option<Self> {
        match &class.kind {
            ResolvedKind::Class {
                constructors,
                accessors,
                mutators,
            } => Some(Self {
                class,
                constructors,
                accessors,
                mutators,
            }),
            ResolvedKind::Enum { .. } => None,
        }
    }

    fn host(&self) -> String {
        host_reference(self.class.qualified_name())
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        let parameter_types = self
            .constructors
            .iter()
            .flat_map(|c| c.parameters.iter().map(|p| &p.ty.target))
            .chain(self.mutators.iter().map(|m| &m.ty.target));
        let accessor_types = self.accessors.iter().map(|a| &a.ty.target);

        let mut collections = false;
        let mut maps = false;
        for ty in parameter_types {
            collections |= ty.contains_collection();
        }
        for ty in accessor_types {
            collections |= ty.contains_collection();
            maps |= ty.contains_map();
        }

        if collections {
            imports.add_wildcard("scala.jdk.CollectionConverters");
        }
        if maps {
            imports.add("scala.collection.immutable", "ListMap");
        }
        imports
    }

    fn constructor(&self, constructor: &ResolvedConstructor<ScalaType>) -> Def {
        let params = constructor
            .parameters
            .iter()
            .map(|p| Param::new(&p.name, p.ty.target.to_string()))
            .collect();
        let args: Vec<String> = constructor
            .parameters
            .iter()
            .map(|p| to_java(&p.ty.target, &p.name))
            .collect();
        Def::constructor(params)
            .body_expr(format!("this(new {}({}))", self.host(), args.join(", ")))
    }

    fn accessor(&self, accessor: &ResolvedAccessor<ScalaType>) -> Def {
        let call = format!("underlying.{}()", escape_path(&accessor.host_method));
        let value = from_java(&accessor.ty.target, &call);
        let def = Def::new(&accessor.name);
        let def = if accessor.field.is_none() {
            def.doc(format!("Computed by `{}()`.", accessor.host_method))
        } else {
            def
        };
        fallible(def, accessor.ty.target.to_string(), value, &accessor.exceptions)
    }

    fn mutator(&self, mutator: &ResolvedMutator<ScalaType>) -> Def {
        let call = format!(
            "underlying.{}({})",
            escape_path(&mutator.host_method),
            to_java(&mutator.ty.target, MUTATOR_PARAM)
        );
        let def = Def::new(&mutator.name)
            .params(vec![Param::new(MUTATOR_PARAM, mutator.ty.target.to_string())]);
        fallible(def, "Unit".to_string(), call, &mutator.exceptions)
    }

    /// Accessors safe to call from `equals`, `hashCode` and `toString`.
    fn compared(&self) -> Vec<&str> {
        self.accessors
            .iter()
            .filter(|a| a.exceptions.is_empty())
            .map(|a| a.name.as_str())
            .collect()
    }

    fn equals(&self, compared: &[&str]) -> Def {
        let comparisons: Vec<String> = if compared.is_empty() {
            vec!["this.underlying == that.underlying".to_string()]
        } else {
            compared
                .iter()
                .map(|name| format!("this.{} == that.{}", name, name))
                .collect()
        };
        let count = comparisons.len();
        let lines = comparisons
            .into_iter()
            .enumerate()
            .map(|(i, comparison)| {
                let indent = if i == 0 { "" } else { "  " };
                let joiner = if i + 1 < count { " &&" } else { "" };
                format!("{}{}{}", indent, comparison, joiner)
            })
            .collect();
        let case = Case::multiline(format!("that: {}", self.class.name), lines);

        Def::new("equals")
            .overriding()
            .params(vec![Param::new("other", "Any")])
            .returns("Boolean")
            .body(Match::new("other").case(case).case(Case::new("_", "false")))
    }

    fn hash_code(&self, compared: &[&str]) -> Def {
        let body = if compared.is_empty() {
            "underlying.hashCode()".to_string()
        } else {
            format!("Seq[Any]({}).##", compared.join(", "))
        };
        Def::new("hashCode")
            .overriding()
            .params(Vec::new())
            .returns("Int")
            .body_expr(body)
    }

    fn describe(&self, compared: &[&str]) -> Def {
        let fields = if compared.is_empty() {
            "${underlying}".to_string()
        } else {
            compared
                .iter()
                .map(|name| format!("{}=${{{}}}", literal_name(name), name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        Def::new("toString")
            .overriding()
            .returns("String")
            .body_expr(format!("s\"{}({})\"", literal_name(&self.class.name), fields))
    }
}

/// Give `def` its return type and body, catching declared exceptions into `Either`.
fn fallible(def: Def, ty: String, value: String, exceptions: &[String]) -> Def {
    match exceptions {
        [] => def.returns(ty).body_expr(value),
        [single] => {
            let error = exception_reference(single);
            def.returns(format!("Either[{}, {}]", error, ty))
                .body(TryCatch::new(value, vec![error]))
        }
        several => def
            .returns(format!("Either[Throwable, {}]", ty))
            .body(TryCatch::new(
                value,
                several.iter().map(|e| exception_reference(e)).collect(),
            )),
    }
}

impl GeneratedFile for WrapperFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.class)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let compared = self.compared();
        let class = ClassDef::new(&self.class.name)
            .modifier("final")
            .param(Param::new("underlying", self.host()).val())
            .members(self.constructors.iter().map(|c| self.constructor(c)))
            .members(self.accessors.iter().map(|a| self.accessor(a)))
            .members(self.mutators.iter().map(|m| self.mutator(m)))
            .member(self.equals(&compared))
            .member(self.hash_code(&compared))
            .member(self.describe(&compared));

        ScalaFile::new(&self.class.package)
            .source(self.class.qualified_name())
            .imports(&self.imports())
            .add(class)
            .render()
    }
}
