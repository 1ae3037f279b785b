use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use tracing::{debug, warn};
use wrapgen_codegen::{
    BatchResult, ClassFailure, ClassRegistry, EmissionError, GenerateError, GeneratedSource,
    LanguageCodegen, batch::try_run_parallel, pipeline::CompilationContext, resolve::Resolver,
};
use wrapgen_core::GeneratedFile;
use wrapgen_ir::ClassDescriptor;

use crate::{
    SCALA_NAMING, ScalaTypeMapper,
    files::{EnumWrapperFile, WrapperFile},
    naming::shadows_standard_type,
};

/// Scala wrapper generator: phase 2 of a batch.
///
/// Holds the output of phase 1 and emits one file per class, classes running
/// in parallel against the shared registry.
pub struct Generator {
    classes: Vec<ClassDescriptor>,
    registry: ClassRegistry,
    /// Classes that already failed before emission.
    failures: Vec<ClassFailure>,
    jobs: usize,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "scala"
    }

    fn file_extension(&self) -> &'static str {
        "scala"
    }

    /// Render every class, then render again whatever referenced a class
    /// that failed.
    ///
    /// A failed class leaves the registry, so its dependents fail with an
    /// unresolved type on the next round. Rounds repeat until one adds no
    /// failure.
    fn generate(&self) -> Result<BatchResult, EmissionError> {
        let mut registry = self.registry.clone();
        let mut failures = self.failures.clone();
        let mut rendered: Vec<Option<GeneratedSource>> = vec![None; self.classes.len()];
        let mut pending: Vec<usize> = (0..self.classes.len()).collect();

        while !pending.is_empty() {
            let outcomes = try_run_parallel(&pending, self.jobs, |&index| {
                match self.render(&self.classes[index], &registry) {
                    Ok(source) => Ok(Ok(source)),
                    Err(GenerateError::Class(error)) => Ok(Err(error)),
                    Err(GenerateError::Emission(error)) => Err(error),
                }
            })?;

            let mut dropped = Vec::new();
            for (&index, outcome) in pending.iter().zip(outcomes) {
                let class = &self.classes[index];
                match outcome {
                    Ok(source) => rendered[index] = Some(source),
                    Err(error) => {
                        warn!(class = %class.qualified_name, %error, "skipping class");
                        registry.remove(&class.qualified_name);
                        failures.push(ClassFailure::new(&class.qualified_name, error));
                        dropped.push(class.qualified_name.as_str());
                    }
                }
            }

            pending = (0..self.classes.len())
                .filter(|&index| {
                    rendered[index].is_some()
                        && dropped.iter().any(|name| self.classes[index].references(name))
                })
                .collect();
            for &index in &pending {
                debug!(
                    class = %self.classes[index].qualified_name,
                    "referenced class failed, rendering again"
                );
                rendered[index] = None;
            }
        }

        let generated: IndexMap<_, _> = self
            .classes
            .iter()
            .zip(rendered)
            .filter_map(|(class, source)| Some((class.qualified_name.clone(), source?)))
            .collect();
        Ok(BatchResult { generated, failures })
    }
}

impl Generator {
    /// Take over the result of a finished pipeline run.
    ///
    /// Classes whose wrapper would hide a standard Scala type fail here.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let mut classes = ctx.take_classes()?;
        let mut registry = ctx.take_registry()?;
        let mut failures = std::mem::take(&mut ctx.failures);

        let rejected = registry.reject_shadowing(shadows_standard_type);
        for failure in &rejected {
            warn!(class = %failure.class, error = %failure.error, "skipping class");
        }
        classes.retain(|class| registry.contains(&class.qualified_name));
        failures.extend(rejected);

        Ok(Self {
            classes,
            registry,
            failures,
            jobs: ctx.manifest.generator.jobs,
        })
    }

    /// Number of worker threads; 0 uses the available parallelism.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Resolve and render one class against `registry`.
    fn render(
        &self,
        class: &ClassDescriptor,
        registry: &ClassRegistry,
    ) -> Result<GeneratedSource, GenerateError> {
        let resolved = Resolver::new(&ScalaTypeMapper, &SCALA_NAMING, registry).resolve(class)?;

        let base = Path::new("");
        let (path, content) = if let Some(file) = WrapperFile::new(&resolved) {
            (file.path(base), file.render())
        } else if let Some(file) = EnumWrapperFile::new(&resolved) {
            (file.path(base), file.render())
        } else {
            return Err(
                EmissionError::new(&class.qualified_name, "class has no renderable kind").into(),
            );
        };
        debug!(class = %class.qualified_name, path = %path.display(), "rendered");

        Ok(GeneratedSource { path, content })
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_codegen::{pipeline::Pipeline, testing::*};
    use wrapgen_manifest::Manifest;

    use super::*;

    fn generator(records: Vec<wrapgen_manifest::RawClass>) -> Generator {
        let ctx = Pipeline::new().run(Manifest::default(), records).unwrap();
        Generator::from_context(ctx).unwrap()
    }

    #[test]
    fn test_paths_follow_wrapper_package() {
        let result = generator(vec![customer(), customer_type()]).generate().unwrap();
        let paths: Vec<_> = result
            .generated
            .values()
            .map(|s| s.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            [
                "example/wrappers/Customer.scala",
                "example/wrappers/CustomerType.scala"
            ]
        );
        assert!(result.is_complete());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records = || vec![customer(), customer_type(), container(), order()];
        let sequential = generator(records()).with_jobs(1).generate().unwrap();
        let parallel = generator(records()).with_jobs(4).generate().unwrap();
        assert_eq!(sequential.generated, parallel.generated);
    }

    #[test]
    fn test_phase_one_failures_are_kept() {
        let broken = RawClassBuilder::class("example..Broken").build();
        let result = generator(vec![customer_type(), broken]).generate().unwrap();
        assert_eq!(result.generated.len(), 1);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].error.kind(), "extraction");
    }
}
