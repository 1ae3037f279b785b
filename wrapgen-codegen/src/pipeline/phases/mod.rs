//! Built-in pipeline phases.

mod extract;
mod registry;
pub mod validate;

pub use extract::ExtractPhase;
pub use registry::RegistryPhase;
pub use validate::{Lint, LintInfo, ValidatePhase};
