//! Core utilities and types for the wrapgen wrapper generator.
//!
//! This crate provides file-writing rules and the identifier helpers shared
//! by the engine, the language generators, and the CLI.

mod file;
mod names;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier and host-name helpers
pub use names::{
    capitalize, decapitalize, host_package, host_simple_name, host_source_name, package_path,
    to_pascal_case,
};
