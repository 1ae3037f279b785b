//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language wrapper generators
//! - [`TypeMapper`] - Trait for mapping host types to target type expressions
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{LanguageCodegen, TypeMapper};
