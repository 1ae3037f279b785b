//! Check operation: the whole batch without writing.

use std::path::Path;

use eyre::{Context, Result};
use wrapgen_codegen::pipeline::{Pipeline, Severity};
use wrapgen_manifest::{Manifest, RawClass};

use super::{describe, failed_class};
use crate::{language::LanguageSupport, reports::CheckReport};

/// Run every phase, emission included, and report what would happen.
pub fn check(
    manifest: &Manifest,
    records: Vec<RawClass>,
    lang: LanguageSupport,
    config_path: &Path,
) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone(), records)
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diagnostic in &ctx.diagnostics {
        let line = describe(diagnostic);
        match diagnostic.severity {
            Severity::Error => errors.push(line),
            Severity::Warning => warnings.push(line),
            Severity::Info => infos.push(line),
        }
    }

    let batch = lang
        .generator(ctx, None)?
        .generate()
        .wrap_err("Failed to generate code")?;
    let classes = batch
        .generated
        .iter()
        .map(|(class, source)| format!("{} -> {}", class, source.path.display()))
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        classes,
        failures: batch.failures.iter().map(failed_class).collect(),
    })
}
