//! Scala 2.13 wrapper generation.

mod convert;
mod generator;
mod naming;
mod scala_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Case, ClassDef, Def, Match, ObjectDef, Param, TryCatch};
pub use convert::{from_java, to_java};
pub use generator::Generator;
pub use naming::SCALA_NAMING;
pub use scala_file::{GENERATED_HEADER, ScalaFile};
pub use type_mapper::{ScalaType, ScalaTypeMapper};
pub use wrapgen_codegen::{BatchResult, LanguageCodegen};
