//! Scala-specific naming conventions.

use wrapgen_codegen::{NamingConvention, extract::JAVA_LANG_EXCEPTIONS};
use wrapgen_core::to_pascal_case;

fn escape_scala_reserved(name: &str) -> String {
    format!("`{}`", name)
}

fn is_scala_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        // a trailing `_` joins the `:` in `def x_: T` into one operator name
        && !name.ends_with('_')
}

/// Scala naming conventions.
pub const SCALA_NAMING: NamingConvention = NamingConvention {
    class_to_type: to_pascal_case,
    class_to_file: |name| name.to_string(),
    // Java member names are already camelCase
    member_to_name: |name| name.to_string(),
    reserved_words: &[
        "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
        "finally", "for", "forSome", "if", "implicit", "import", "lazy", "macro", "match", "new",
        "null", "object", "override", "package", "private", "protected", "return", "sealed",
        "super", "this", "throw", "trait", "try", "true", "type", "val", "var", "while", "with",
        "yield",
    ],
    reserved_members: &[
        "underlying",
        "equals",
        "hashCode",
        "toString",
        "getClass",
        "wait",
        "notify",
        "notifyAll",
        "clone",
        "finalize",
        "synchronized",
        "eq",
        "ne",
        "asInstanceOf",
        "isInstanceOf",
    ],
    reserved_types: &[
        "Any", "Boolean", "Byte", "Char", "CollectionConverters", "Double", "Either", "Float",
        "Int", "Left", "List", "ListMap", "Long", "Map", "MatchError", "Option", "Right", "Seq",
        "Set", "Short", "String", "Throwable", "Unit",
    ],
    escape_reserved: escape_scala_reserved,
    is_identifier: is_scala_identifier,
};

/// Escape every segment of a dotted path that needs it.
pub(crate) fn escape_path(path: &str) -> String {
    path.split('.')
        .map(|segment| {
            if SCALA_NAMING.is_reserved(segment) {
                escape_scala_reserved(segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// A fully qualified host reference, e.g. `_root_.example.Outer.Inner`.
pub(crate) fn host_reference(qualified: &str) -> String {
    format!("_root_.{}", escape_path(&wrapgen_core::host_source_name(qualified)))
}

/// A declared exception type as written in Scala.
///
/// `java.lang` types keep their simple name, which Scala imports by default.
pub(crate) fn exception_reference(qualified: &str) -> String {
    match qualified.strip_prefix("java.lang.") {
        Some(simple) if !simple.contains('.') => simple.to_string(),
        _ => host_reference(qualified),
    }
}

/// Whether a wrapper named `name` would hide a type generated code names
/// without qualification.
pub(crate) fn shadows_standard_type(name: &str) -> bool {
    SCALA_NAMING.shadows_type(name) || JAVA_LANG_EXCEPTIONS.contains(&name)
}
