//! Scala AST builders for wrapper classes, objects, and their members.
//!
//! Nodes render to [`CodeFragment`](wrapgen_codegen::builder::CodeFragment)s
//! and are written out through a `CodeBuilder`.

mod class_def;
mod defs;
mod matches;
mod object_def;

pub use class_def::ClassDef;
pub use defs::{Def, Param};
pub use matches::{Case, Match, TryCatch};
pub use object_def::ObjectDef;
