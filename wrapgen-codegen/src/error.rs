//! Error taxonomy for a generation run.
//!
//! [`ClassError`] covers failures that skip one class while the rest of the
//! batch continues. [`EmissionError`] signals an engine bug and aborts the
//! whole batch.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Malformed or unreadable metadata for one class.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[error("cannot extract `{member}`: {reason}")]
#[diagnostic(
    code(wrapgen::extraction),
    help("fix the metadata record for this class; the rest of the batch is unaffected")
)]
pub struct ExtractionError {
    /// The offending member, e.g. `example.Customer.getName()`.
    pub member: String,
    pub reason: String,
}

impl ExtractionError {
    pub fn new(member: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            reason: reason.into(),
        }
    }
}

/// A type reference with no target mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[error("unresolved type `{type_name}` in `{member}`")]
#[diagnostic(
    code(wrapgen::unresolved_type),
    help(
        "add the class to the batch, or map it under [external_types] in wrapgen.toml; supported collections are List, Collection, Iterable, Set and Map"
    )
)]
pub struct UnresolvedTypeError {
    pub member: String,
    /// The type as written in host source, including type arguments.
    pub type_name: String,
}

/// A generated identifier that cannot be made unique or legal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[error("naming collision on `{name}`: {reason}")]
#[diagnostic(code(wrapgen::naming_collision))]
pub struct NamingCollisionError {
    pub name: String,
    pub reason: String,
}

impl NamingCollisionError {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Per-class failure: the class is skipped and reported.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnresolvedType(#[from] UnresolvedTypeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NamingCollision(#[from] NamingCollisionError),
}

impl ClassError {
    /// Short label for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassError::Extraction(_) => "extraction",
            ClassError::UnresolvedType(_) => "unresolved type",
            ClassError::NamingCollision(_) => "naming collision",
        }
    }
}

/// An internal invariant was violated while emitting a class.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("internal error while generating `{class}`: {message}")]
#[diagnostic(
    code(wrapgen::emission),
    help("this is a wrapgen bug; no files were written for this batch")
)]
pub struct EmissionError {
    pub class: String,
    pub message: String,
}

impl EmissionError {
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
        }
    }
}

/// Outcome of generating one class in phase 2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Class(#[from] ClassError),

    #[error(transparent)]
    Emission(#[from] EmissionError),
}

impl From<UnresolvedTypeError> for GenerateError {
    fn from(err: UnresolvedTypeError) -> Self {
        GenerateError::Class(err.into())
    }
}

impl From<NamingCollisionError> for GenerateError {
    fn from(err: NamingCollisionError) -> Self {
        GenerateError::Class(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_member() {
        let err = ClassError::from(UnresolvedTypeError {
            member: "example.Order.getId()".into(),
            type_name: "java.util.UUID".into(),
        });
        assert_eq!(
            err.to_string(),
            "unresolved type `java.util.UUID` in `example.Order.getId()`"
        );
        assert_eq!(err.kind(), "unresolved type");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = ClassError::from(ExtractionError::new("a.B.x", "bad type"));
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("wrapgen::extraction")
        );
        let err = EmissionError::new("a.B", "missing accessor");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("wrapgen::emission")
        );
    }

    #[test]
    fn test_serialize_is_tagged() {
        let err = ClassError::from(NamingCollisionError::new("x", "exhausted"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "naming_collision");
        assert_eq!(json["name"], "x");
    }
}
