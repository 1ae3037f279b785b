//! Validate phase - runs lints on the raw records.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateClassLint, EmptyEnumLint, NoPublicConstructorLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the raw records with configurable lints.
///
/// The built-in lints only warn. A lint that reports an error stops the batch
/// before extraction.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateClassLint),
                Box::new(EmptyEnumLint),
                Box::new(NoPublicConstructorLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check class records and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.manifest, &ctx.records, &mut ctx.diagnostics);
        }

        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_manifest::Manifest;

    use super::*;
    use crate::{pipeline::Diagnostic, testing::customer};

    struct Forbid;

    impl Lint for Forbid {
        fn name(&self) -> &'static str {
            "forbid"
        }

        fn description(&self) -> &'static str {
            "Reject every class"
        }

        fn check(
            &self,
            _: &Manifest,
            records: &[wrapgen_manifest::RawClass],
            d: &mut Vec<Diagnostic>,
        ) {
            for record in records {
                d.push(Diagnostic::error("validate", "forbidden").at(&record.name));
            }
        }
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            ["duplicate-class", "empty-enum", "no-public-constructor"]
        );
        assert!(ValidatePhase::empty().lint_info().is_empty());
    }

    #[test]
    fn test_error_stops_phase() {
        let phase = ValidatePhase::empty().with_lint(Forbid);
        let mut ctx = CompilationContext::new(Manifest::default(), vec![customer()]);
        let err = phase.run(&mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed with 1 error(s)");
    }

    #[test]
    fn test_warnings_pass() {
        let mut ctx = CompilationContext::new(
            Manifest::default(),
            vec![customer(), customer()],
        );
        ValidatePhase::new().run(&mut ctx).unwrap();
        assert_eq!(ctx.warning_count(), 1);
    }
}
