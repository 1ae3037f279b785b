mod check;
mod generate;
mod init;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for wrapgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(version)]
#[command(about = "Generate Scala wrappers for Java classes from class metadata")]
pub(crate) struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter wrapgen.toml
    Init(InitCommand),

    /// Generate wrapper sources from the metadata inputs
    Generate(GenerateCommand),

    /// Run the whole batch without writing anything
    Check(CheckCommand),
}
