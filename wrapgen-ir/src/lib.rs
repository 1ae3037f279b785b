//! Class descriptor model for the wrapgen wrapper generator.
//!
//! This crate provides the language-neutral representation of one host class
//! that every later stage of the generator consumes.
//!
//! # Architecture
//!
//! ```text
//! metadata records → wrapgen-codegen (extract) → wrapgen-ir (descriptors) → mapping/emission
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Java or Scala syntax leaks beyond host type names)
//! - Immutable once built: later stages derive new values instead of mutating
//! - Self-contained (no external dependencies beyond serde)

mod class;
mod types;

pub use class::{
    ClassDescriptor, ConstructorDescriptor, FieldDescriptor, MethodDescriptor, Parameter,
};
pub use types::{Scalar, TypeKind, TypeRef};
