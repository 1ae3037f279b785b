//! Per-class Scala files.

mod enum_wrapper;
mod wrapper;

use std::path::{Path, PathBuf};

pub use enum_wrapper::EnumWrapperFile;
pub use wrapper::WrapperFile;
use wrapgen_codegen::resolve::ResolvedClass;
use wrapgen_core::package_path;

use crate::ScalaType;

/// `<package path>/<stem>.scala` under `base`.
fn source_path(base: &Path, class: &ResolvedClass<'_, ScalaType>) -> PathBuf {
    let mut path = base.to_path_buf();
    if !class.package.is_empty() {
        path.push(package_path(&class.package));
    }
    path.push(format!("{}.scala", class.file_stem));
    path
}

/// The name as it appears inside string literals: no backticks, `$` doubled.
fn literal_name(name: &str) -> String {
    name.trim_matches('`').replace('$', "$$")
}
