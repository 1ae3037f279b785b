//! Unified language dispatch.

use eyre::Result;
use wrapgen_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use wrapgen_codegen_scala::Generator as ScalaGenerator;
use wrapgen_manifest::TargetLanguage;

/// Generator creation and metadata for one target language.
pub struct LanguageSupport {
    language: TargetLanguage,
    /// File extension with dot (e.g., ".scala").
    pub extension: &'static str,
}

impl LanguageSupport {
    pub fn get(language: TargetLanguage) -> Self {
        match language {
            TargetLanguage::Scala => Self {
                language,
                extension: ".scala",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.language.as_str()
    }

    /// Create a phase-2 generator from a finished pipeline run.
    ///
    /// `jobs` overrides the manifest's worker count when set.
    pub fn generator(
        &self,
        ctx: CompilationContext,
        jobs: Option<usize>,
    ) -> Result<Box<dyn LanguageCodegen>> {
        match self.language {
            TargetLanguage::Scala => {
                let generator = ScalaGenerator::from_context(ctx)?;
                let generator = match jobs {
                    Some(jobs) => generator.with_jobs(jobs),
                    None => generator,
                };
                Ok(Box::new(generator))
            }
        }
    }
}
