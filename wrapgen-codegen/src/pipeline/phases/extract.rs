//! Extract phase: raw records to class descriptors.

use eyre::Result;
use tracing::{debug, warn};

use crate::{
    extract::Extractor,
    pipeline::{CompilationContext, Phase},
};

/// Turns every raw record into a [`wrapgen_ir::ClassDescriptor`].
///
/// A record that cannot be extracted becomes a failure; the rest continue.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Read class metadata into descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let extractor = Extractor::new(&ctx.manifest.nullability, &ctx.records);
        let (classes, failures) = extractor.extract_all(&ctx.records);

        for failure in &failures {
            warn!(class = %failure.class, error = %failure.error, "skipping class");
        }
        debug!(extracted = classes.len(), "extraction done");

        ctx.failures.extend(failures);
        ctx.classes = Some(classes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_manifest::Manifest;

    use super::*;
    use crate::testing::{RawClassBuilder, customer, customer_type};

    #[test]
    fn test_bad_record_does_not_stop_batch() {
        let broken = RawClassBuilder::class("example.Broken")
            .field("x", "java.util.List<", &[])
            .build();
        let mut ctx =
            CompilationContext::new(Manifest::default(), vec![customer(), broken, customer_type()]);
        ExtractPhase.run(&mut ctx).unwrap();

        let names: Vec<_> = ctx
            .take_classes()
            .unwrap()
            .into_iter()
            .map(|c| c.qualified_name)
            .collect();
        assert_eq!(names, ["example.Customer", "example.CustomerType"]);
        assert_eq!(ctx.failures.len(), 1);
        assert_eq!(ctx.failures[0].class, "example.Broken");
        assert_eq!(ctx.failures[0].error.kind(), "extraction");
    }
}
