//! Lint for classes reported more than once.

use std::collections::HashMap;

use wrapgen_manifest::{Manifest, RawClass};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when a batch holds two records for one class.
///
/// Extraction keeps the first record; this makes the drop visible early.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn description(&self) -> &'static str {
        "Detect classes reported by more than one record"
    }

    fn check(&self, _manifest: &Manifest, records: &[RawClass], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            if let Some(first) = seen.get(record.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "record #{} repeats class '{}' (first seen as record #{})",
                            index + 1,
                            record.name,
                            first + 1
                        ),
                    )
                    .at(&record.name),
                );
            } else {
                seen.insert(&record.name, index);
            }
        }
    }
}
