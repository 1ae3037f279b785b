//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the pipeline.
///
/// Phases run in order and may read and modify the context. Non-fatal
/// problems belong in `ctx.diagnostics` or `ctx.failures`; returning an
/// error stops the whole run.
pub trait Phase: Send + Sync {
    /// Used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
