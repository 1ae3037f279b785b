//! Core operations.
//!
//! The business logic behind each command, separated from argument parsing
//! and from rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
use wrapgen_codegen::{ClassFailure, pipeline::Diagnostic};

use crate::reports::FailedClass;

/// A diagnostic as one report line, with its location below.
fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{}\n  --> {}", diagnostic.message, location),
        None => diagnostic.message.clone(),
    }
}

fn failed_class(failure: &ClassFailure) -> FailedClass {
    FailedClass {
        class: failure.class.clone(),
        kind: failure.error.kind(),
        reason: failure.error.to_string(),
    }
}
