//! State carried through the pipeline phases.

use eyre::{Result, eyre};
use wrapgen_ir::ClassDescriptor;
use wrapgen_manifest::{Manifest, RawClass};

use super::diagnostic::{Diagnostic, Severity};
use crate::{ClassFailure, ClassRegistry};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// Configuration, immutable once the batch starts.
    pub manifest: Manifest,
    /// Raw records in input order.
    pub records: Vec<RawClass>,
    /// Extracted classes in input order (set by the extract phase).
    pub classes: Option<Vec<ClassDescriptor>>,
    /// Cross-reference registry (set by the registry phase).
    pub registry: Option<ClassRegistry>,
    /// Classes skipped so far, with reasons.
    pub failures: Vec<ClassFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest, records: Vec<RawClass>) -> Self {
        Self {
            manifest,
            records,
            classes: None,
            registry: None,
            failures: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the extracted classes out of the context.
    pub fn take_classes(&mut self) -> Result<Vec<ClassDescriptor>> {
        self.classes
            .take()
            .ok_or_else(|| eyre!("classes not set - did the extract phase run?"))
    }

    /// Take the registry out of the context.
    pub fn take_registry(&mut self) -> Result<ClassRegistry> {
        self.registry
            .take()
            .ok_or_else(|| eyre!("registry not set - did the registry phase run?"))
    }
}
