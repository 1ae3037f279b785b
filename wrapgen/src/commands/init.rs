use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use wrapgen_codegen::generation::WrapgenTomlTemplate;
use wrapgen_core::{GeneratedFile, Overwrite, WriteResult};
use wrapgen_manifest::TargetLanguage;

#[derive(Args)]
pub struct InitCommand {
    /// Directory for the new wrapgen.toml
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Metadata file or directory to read (repeatable)
    #[arg(short, long = "input")]
    pub inputs: Vec<String>,

    /// Replace an existing wrapgen.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut template = WrapgenTomlTemplate::new(TargetLanguage::Scala);
        if !self.inputs.is_empty() {
            template = template.with_inputs(self.inputs.clone());
        }
        if self.force {
            template = template.with_overwrite(Overwrite::Always);
        }

        let path = template.path(&self.dir);
        let result = template
            .write(&self.dir)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        match result {
            WriteResult::Skipped => {
                println!(
                    "{} already exists; left untouched (use --force to replace it)",
                    path.display()
                );
            }
            WriteResult::Unchanged => println!("{} is already up to date", path.display()),
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                if self.dir != Path::new(".") {
                    println!("  cd {}", self.dir.display());
                }
                println!("  wrapgen check");
                println!("  wrapgen generate");
            }
        }
        Ok(())
    }
}
