//! Lint for classes that cannot be constructed from the wrapper.

use wrapgen_manifest::{Manifest, RawClass};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes classes without public constructors.
///
/// Their wrappers can only wrap existing instances.
pub struct NoPublicConstructorLint;

impl Lint for NoPublicConstructorLint {
    fn name(&self) -> &'static str {
        "no-public-constructor"
    }

    fn description(&self) -> &'static str {
        "Detect classes the wrapper cannot instantiate"
    }

    fn check(&self, _manifest: &Manifest, records: &[RawClass], diagnostics: &mut Vec<Diagnostic>) {
        let unconstructible = records
            .iter()
            .filter(|r| !r.is_enum() && r.public_constructors().next().is_none());
        for record in unconstructible {
            diagnostics.push(
                Diagnostic::info(
                    "validate",
                    "no public constructor; the wrapper only wraps existing instances",
                )
                .at(&record.name),
            );
        }
    }
}
