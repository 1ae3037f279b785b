//! Configuration and input parsing for wrapgen.
//!
//! - [`Manifest`] is the parsed `wrapgen.toml`: generator settings, the
//!   nullability markers, and the external type table.
//! - [`MetadataFile`] holds raw class-metadata records as produced by the
//!   build tool, read from JSON or TOML.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod metadata;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, NullabilityConfig, TargetLanguage, WrapgenToml, parse_manifest,
};
pub use metadata::{
    ClassKind, MetadataFile, MetadataFormat, Modifier, RawClass, RawConstructor, RawField,
    RawMethod, RawParameter, load_inputs,
};
