//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub language: &'static str,
    /// Warnings from the validate phase.
    pub warnings: Vec<String>,
    /// Number of metadata records read.
    pub record_count: usize,
    pub result: GenerationResult,
    /// Classes skipped, in input order.
    pub failures: Vec<FailedClass>,
}

/// Files written, or the dry-run preview.
#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
    /// Where pipeline snapshots went, if `--visualize` was given.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// False when the file already had this content.
    pub changed: bool,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// A class that produced no file.
#[derive(Debug, Clone)]
pub struct FailedClass {
    pub class: String,
    pub kind: &'static str,
    pub reason: String,
}

impl GenerateReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn generated_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(written) => written.files.len(),
            GenerationResult::Preview(preview) => preview.files.len(),
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        let (changed, unchanged): (Vec<&WrittenFile>, Vec<&WrittenFile>) =
            written.files.iter().partition(|f| f.changed);
        if !changed.is_empty() {
            out.section(&format!("Generated ({})", changed.len()));
            for file in &changed {
                out.added_item(&file.path.display().to_string());
            }
            out.newline();
        }

        if !unchanged.is_empty() {
            out.key_value("Unchanged", &unchanged.len().to_string());
        }
        out.key_value("Output", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }

    fn render_failures(&self, out: &mut dyn Output) {
        if self.failures.is_empty() {
            return;
        }
        out.newline();
        out.section(&format!("Failed ({})", self.failures.len()));
        for failure in &self.failures {
            out.failed_item(
                &format!("{} [{}]", failure.class, failure.kind),
                &failure.reason,
            );
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }

        self.render_failures(out);

        out.newline();
        out.preformatted(&format!(
            "{} of {} classes generated ({})",
            self.generated_count(),
            self.record_count,
            self.language
        ));
    }
}
