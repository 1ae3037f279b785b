//! Language-agnostic wrapper generation traits.

use std::fmt;

use wrapgen_ir::Scalar;

use crate::{BatchResult, EmissionError, RegistryEntry, mapping::CollectionShape};

/// Trait for language-specific wrapper generators.
///
/// Implement this trait to add support for generating wrappers in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "scala")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "scala")
    fn file_extension(&self) -> &'static str;

    /// Run phase 2 for every registered class.
    ///
    /// Per-class failures are collected in the result; an [`EmissionError`]
    /// discards the whole batch.
    fn generate(&self) -> Result<BatchResult, EmissionError>;
}

/// Trait for mapping host types to target type expressions.
///
/// The mapping precedence lives in [`crate::mapping::map_type`]; implementors
/// only build the target-side expression for each case.
pub trait TypeMapper: Sync {
    /// Target type expression; `Display` renders it as source text.
    type Target: Clone + fmt::Display + Send + Sync;

    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar. `boxed` is true for `java.lang.Integer` and friends.
    fn map_scalar(&self, scalar: Scalar, boxed: bool) -> Self::Target;

    /// Map a batch enum, referenced from a wrapper in `from_package`.
    fn map_enum(&self, entry: &RegistryEntry, from_package: &str) -> Self::Target;

    /// Map a batch class, referenced from a wrapper in `from_package`.
    fn map_class(&self, entry: &RegistryEntry, from_package: &str) -> Self::Target;

    /// Map a type through its configured external expression.
    fn map_external(&self, host: &str, target: &str) -> Self::Target;

    /// Map a collection whose arguments are already mapped.
    fn map_collection(&self, shape: CollectionShape, args: Vec<Self::Target>) -> Self::Target;

    /// Wrap a type in the explicit-absence representation.
    fn map_optional(&self, inner: Self::Target) -> Self::Target;

    /// The runtime signature of a type, used to detect constructor clashes.
    fn erasure(&self, target: &Self::Target) -> String;

    /// The runtime signature of a host class passed as-is.
    fn host_erasure(&self, qualified: &str) -> String {
        qualified.to_string()
    }
}
