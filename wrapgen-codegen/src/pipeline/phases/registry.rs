//! Registry phase: index every extracted class.

use eyre::{Result, eyre};
use tracing::warn;

use crate::{
    ClassRegistry,
    pipeline::{CompilationContext, Phase},
};

/// Builds the [`ClassRegistry`] and drops classes whose wrapper name is taken.
pub struct RegistryPhase;

impl Phase for RegistryPhase {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn description(&self) -> &'static str {
        "Register wrapper names for cross-references"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let classes = ctx
            .classes
            .as_mut()
            .ok_or_else(|| eyre!("registry phase needs extracted classes"))?;

        let (registry, failures) = ClassRegistry::build(classes, &ctx.manifest);
        for failure in &failures {
            warn!(class = %failure.class, error = %failure.error, "skipping class");
        }
        classes.retain(|class| registry.contains(&class.qualified_name));

        ctx.failures.extend(failures);
        ctx.registry = Some(registry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_manifest::Manifest;

    use super::*;
    use crate::{
        pipeline::phases::ExtractPhase,
        testing::{RawClassBuilder, customer},
    };

    #[test]
    fn test_requires_extract() {
        let mut ctx = CompilationContext::new(Manifest::default(), Vec::new());
        assert!(RegistryPhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_colliding_wrapper_is_dropped() {
        let records = vec![
            RawClassBuilder::class("example.Outer$Inner").build(),
            RawClassBuilder::class("example.OuterInner").build(),
            customer(),
        ];
        let mut ctx = CompilationContext::new(Manifest::default(), records);
        ExtractPhase.run(&mut ctx).unwrap();
        RegistryPhase.run(&mut ctx).unwrap();

        let classes = ctx.take_classes().unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.iter().all(|c| c.qualified_name != "example.OuterInner"));
        assert_eq!(ctx.failures.len(), 1);
        assert_eq!(ctx.failures[0].error.kind(), "naming collision");
    }
}
