//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::FailedClass,
    output::{Output, Report},
};

/// Report data from a dry validation run.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Wrapper classes that would be generated, as `host -> wrapper path`.
    pub classes: Vec<String>,
    pub failures: Vec<FailedClass>,
}

impl CheckReport {
    /// Whether the check passed: no error diagnostics and no failed class.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.failures.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.errors.is_empty() || !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.classes.is_empty() {
            out.section(&format!("Classes ({})", self.classes.len()));
            for class in &self.classes {
                out.list_item(class);
            }
        }

        if !self.failures.is_empty() {
            out.newline();
            out.section(&format!("Failed ({})", self.failures.len()));
            for failure in &self.failures {
                out.failed_item(
                    &format!("{} [{}]", failure.class, failure.kind),
                    &failure.reason,
                );
            }
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_failures_make_the_check_fail() {
        let report = CheckReport {
            config_path: PathBuf::from("wrapgen.toml"),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: vec!["no public constructor; the wrapper only wraps existing instances".into()],
            classes: vec!["example.Customer -> example/wrappers/Customer.scala".into()],
            failures: vec![FailedClass {
                class: "example.Counter".into(),
                kind: "naming collision",
                reason: "naming collision on `example.Counter.<init>#1`".into(),
            }],
        };
        assert!(!report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        let text = out.text();
        assert!(text.starts_with("info: no public constructor"));
        assert!(
            text
                .contains("Classes (1):\n  - example.Customer -> example/wrappers/Customer.scala")
        );
        assert!(text.contains("  x example.Counter [naming collision]"));
        assert!(!text.contains("is valid"));
    }

    #[test]
    fn test_clean_check() {
        let report = CheckReport {
            config_path: PathBuf::from("wrapgen.toml"),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
            classes: Vec::new(),
            failures: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.text(), "\n✓ wrapgen.toml is valid");
    }
}
