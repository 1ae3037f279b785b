//! Lint for enums without constants.

use wrapgen_manifest::{Manifest, RawClass};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about enums with no constants; their wrapper has no cases.
pub struct EmptyEnumLint;

impl Lint for EmptyEnumLint {
    fn name(&self) -> &'static str {
        "empty-enum"
    }

    fn description(&self) -> &'static str {
        "Detect enums that declare no constants"
    }

    fn check(&self, _manifest: &Manifest, records: &[RawClass], diagnostics: &mut Vec<Diagnostic>) {
        for record in records.iter().filter(|r| r.is_enum() && r.constants.is_empty()) {
            diagnostics.push(
                Diagnostic::warning("validate", "enum declares no constants").at(&record.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RawClassBuilder, customer, customer_type};

    #[test]
    fn test_empty_enum() {
        let mut diagnostics = Vec::new();
        EmptyEnumLint.check(
            &Manifest::default(),
            &[
                customer(),
                customer_type(),
                RawClassBuilder::enumeration("example.Nothing", &[]),
            ],
            &mut diagnostics,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("example.Nothing"));
    }
}
