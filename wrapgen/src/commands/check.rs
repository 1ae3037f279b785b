use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wrapgen_manifest::{WrapgenToml, load_inputs};

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to wrapgen.toml (defaults to ./wrapgen.toml)
    #[arg(short, long, default_value = "wrapgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let wrapgen_toml = WrapgenToml::open(&self.config).unwrap_or_exit();
        let records = load_inputs(&wrapgen_toml.input_paths()).unwrap_or_exit();
        let manifest = wrapgen_toml.manifest();

        let report = ops::check(
            manifest,
            records,
            LanguageSupport::get(manifest.generator.language),
            &self.config,
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
