//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use tracing::info;
use wrapgen_manifest::{Manifest, RawClass};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ExtractPhase, RegistryPhase, ValidatePhase},
};

/// Runs the built-in phases, then any added phases, with plugin hooks.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".wrapgen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest, records)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the default validate phase, e.g. to change its lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run phase 1 over one batch of records.
    ///
    /// Per-class failures land in `ctx.failures`; an error here means the
    /// batch as a whole cannot proceed.
    pub fn run(&self, manifest: Manifest, records: Vec<RawClass>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest, records);

        let builtin: [&dyn Phase; 3] = [&self.validate, &ExtractPhase, &RegistryPhase];
        let added = self.phases.iter().map(|phase| phase.as_ref());
        for phase in builtin.into_iter().chain(added) {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();

        for plugin in &self.plugins {
            plugin
                .on_before_phase(name, ctx)
                .wrap_err_with(|| format!("plugin `{}` failed before `{}`", plugin.name(), name))?;
        }

        phase.run(ctx).wrap_err_with(|| format!("{} phase failed", name))?;
        info!(
            phase = name,
            failures = ctx.failures.len(),
            diagnostics = ctx.diagnostics.len(),
            "phase complete"
        );

        for plugin in &self.plugins {
            plugin
                .on_after_phase(name, ctx)
                .wrap_err_with(|| format!("plugin `{}` failed after `{}`", plugin.name(), name))?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
