//! Generate operation: metadata in, Scala sources out.

use std::path::Path;

use eyre::{Context, Result};
use tracing::info;
use wrapgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
use wrapgen_core::WriteResult;
use wrapgen_manifest::{Manifest, RawClass};

use super::{describe, failed_class};
use crate::{
    language::LanguageSupport,
    reports::{
        GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenFile, WrittenResult,
    },
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    /// Preview without writing files.
    pub dry_run: bool,
    /// Write per-phase JSON snapshots below the output directory.
    pub visualize: bool,
    /// Overrides `generator.jobs`.
    pub jobs: Option<usize>,
}

/// Run the pipeline and the language generator, then write or preview.
///
/// Nothing is written when the generator aborts the batch.
pub fn generate(
    manifest: &Manifest,
    records: Vec<RawClass>,
    lang: LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".wrapgen/debug");
    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }

    let record_count = records.len();
    let ctx = pipeline
        .run(manifest.clone(), records)
        .wrap_err("Pipeline failed")?;
    let warnings = ctx.warnings().map(describe).collect();

    let batch = lang
        .generator(ctx, opts.jobs)?
        .generate()
        .wrap_err("Failed to generate code")?;
    info!(
        generated = batch.generated.len(),
        failed = batch.failures.len(),
        "batch finished"
    );

    let result = if opts.dry_run {
        let files = batch
            .generated
            .values()
            .map(|source| PreviewFile {
                path: source.path.display().to_string(),
                content: source.content.clone(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = batch.write_to(opts.output_dir)?;
        let files = batch
            .generated
            .values()
            .zip(written)
            .map(|(source, (_, outcome))| WrittenFile {
                path: source.path.clone(),
                changed: outcome != WriteResult::Unchanged,
            })
            .collect();
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        language: lang.name(),
        warnings,
        record_count,
        result,
        failures: batch.failures.iter().map(failed_class).collect(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wrapgen_codegen::testing::{RawClassBuilder, customer, customer_type};
    use wrapgen_manifest::TargetLanguage;

    use super::*;

    fn run(dir: &Path, records: Vec<RawClass>, dry_run: bool, visualize: bool) -> GenerateReport {
        generate(
            &Manifest::default(),
            records,
            LanguageSupport::get(TargetLanguage::Scala),
            GenerateOptions {
                output_dir: dir,
                dry_run,
                visualize,
                jobs: Some(2),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_writes_files_and_reports_unchanged_on_rerun() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), vec![customer(), customer_type()], false, false);
        assert!(report.is_complete());
        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written files");
        };
        assert!(written.files.iter().all(|f| f.changed));
        assert!(temp.path().join("example/wrappers/Customer.scala").exists());
        assert!(temp.path().join("example/wrappers/CustomerType.scala").exists());

        let again = run(temp.path(), vec![customer(), customer_type()], false, false);
        let GenerationResult::Written(written) = &again.result else {
            panic!("expected written files");
        };
        assert!(written.files.iter().all(|f| !f.changed));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), vec![customer_type()], true, false);
        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 1);
        assert_eq!(preview.files[0].path, "example/wrappers/CustomerType.scala");
        assert!(!temp.path().join("example").exists());
    }

    #[test]
    fn test_partial_batch() {
        let temp = TempDir::new().unwrap();
        let broken = RawClassBuilder::class("example.Invoice")
            .field("currency", "java.util.Currency", &[])
            .getter("getCurrency", "java.util.Currency", &[])
            .build();
        let report = run(temp.path(), vec![broken, customer_type()], false, false);
        assert_eq!(report.record_count, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].class, "example.Invoice");
        assert_eq!(report.failures[0].kind, "unresolved type");
        assert!(temp.path().join("example/wrappers/CustomerType.scala").exists());
        assert!(!temp.path().join("example/wrappers/Invoice.scala").exists());
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), vec![customer(), customer_type()], false, true);
        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written files");
        };
        let debug_dir = written.debug_dir.as_ref().unwrap();
        for phase in ["validate", "extract", "registry"] {
            assert!(debug_dir.join(format!("{}.json", phase)).exists());
        }
    }
}
