//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the pipeline.
///
/// Plugins are called before and after each phase with the phase name and
/// the context. Returning an error aborts the pipeline.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
