//! Language-neutral wrapper generation engine for wrapgen.
//!
//! Data flows one way: raw records are extracted into class descriptors,
//! the descriptors seed an immutable [`ClassRegistry`], and each class is then
//! resolved (types, nullability, names) and handed to a language emitter.
//!
//! # Module Organization
//!
//! - [`extract`] - Metadata extraction and generic signature parsing
//! - [`registry`] - Cross-reference registry for one batch
//! - [`mapping`] - Type mapping precedence over a [`TypeMapper`]
//! - [`nullability`] - Nullability policy
//! - [`resolve`] - Resolved classes and the per-file naming scope
//! - [`batch`] - Batch results and the parallel runner
//! - [`pipeline`] - Phases, plugins, and diagnostics
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Import collection and scaffolded files
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod batch;
pub mod builder;
mod error;
pub mod extract;
pub mod generation;
pub mod language;
pub mod mapping;
pub mod nullability;
pub mod pipeline;
pub mod registry;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use batch::{BatchResult, ClassFailure, GeneratedSource};
pub use error::{
    ClassError, EmissionError, ExtractionError, GenerateError, NamingCollisionError,
    UnresolvedTypeError,
};
pub use language::{LanguageCodegen, NamingConvention, TypeMapper};
pub use registry::{ClassRegistry, RegistryEntry};
