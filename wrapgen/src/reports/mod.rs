//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`].

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{
    FailedClass, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenFile,
    WrittenResult,
};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::tests::BufferOutput;
