//! Lint trait for input validation.

use wrapgen_manifest::{Manifest, RawClass};

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the raw records of one batch.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Add any diagnostics for the records.
    fn check(&self, manifest: &Manifest, records: &[RawClass], diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
