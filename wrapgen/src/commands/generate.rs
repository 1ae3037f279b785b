use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wrapgen_manifest::{WrapgenToml, load_inputs};

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to wrapgen.toml (defaults to ./wrapgen.toml)
    #[arg(short, long, default_value = "wrapgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to generator.output in wrapgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.wrapgen/debug
    #[arg(long)]
    pub visualize: bool,

    /// Worker threads for emission (0 uses every core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Exit successfully even when some classes failed
    #[arg(long)]
    pub allow_partial: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let wrapgen_toml = WrapgenToml::open(&self.config).unwrap_or_exit();
        let records = load_inputs(&wrapgen_toml.input_paths()).unwrap_or_exit();
        let manifest = wrapgen_toml.manifest();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| wrapgen_toml.output_dir());

        let report = ops::generate(
            manifest,
            records,
            LanguageSupport::get(manifest.generator.language),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize,
                jobs: self.jobs,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_complete() && !self.allow_partial {
            std::process::exit(1);
        }
        Ok(())
    }
}
