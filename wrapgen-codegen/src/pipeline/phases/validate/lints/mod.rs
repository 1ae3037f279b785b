//! Built-in lints over raw class records.

mod duplicate_class;
mod empty_enum;
mod no_public_constructor;

pub use duplicate_class::DuplicateClassLint;
pub use empty_enum::EmptyEnumLint;
pub use no_public_constructor::NoPublicConstructorLint;
