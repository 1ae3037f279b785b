//! Snapshot plugin for `--visualize`.
//!
//! Captures the context after each phase and optionally writes it as
//! `<phase>.json`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use serde::Serialize;
use wrapgen_ir::ClassDescriptor;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::{ClassFailure, ClassRegistry};

/// The pipeline state right after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Extracted classes (after `extract`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<ClassDescriptor>>,

    /// Registry (after `registry`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<ClassRegistry>,

    pub failures: Vec<ClassFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Captures pipeline state after each phase.
///
/// # Example
///
/// ```ignore
/// let snapshots = Arc::new(SnapshotPlugin::new());
/// let ctx = Pipeline::new().plugin(snapshots.clone()).run(manifest, records)?;
/// snapshots.write_to_dir(".wrapgen/debug")?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Written after every phase when set.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write every snapshot taken so far.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots() {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }

    fn capture(&self, phase: &str, ctx: &CompilationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            classes: ctx.classes.clone(),
            registry: ctx.registry.clone(),
            failures: ctx.failures.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        snapshot
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(format!("{}.json", snapshot.phase)), json)?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = self.capture(phase, ctx);
        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }
        Ok(())
    }
}

impl<P: Plugin> Plugin for std::sync::Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        (**self).on_before_phase(phase, ctx)
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        (**self).on_after_phase(phase, ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wrapgen_manifest::Manifest;

    use super::*;
    use crate::{
        pipeline::Pipeline,
        testing::{customer, customer_type},
    };

    #[test]
    fn test_captures_each_phase() {
        let plugin = Arc::new(SnapshotPlugin::new());
        Pipeline::new()
            .plugin(plugin.clone())
            .run(Manifest::default(), vec![customer(), customer_type()])
            .unwrap();

        let snapshots = plugin.snapshots();
        let phases: Vec<_> = snapshots.iter().map(|s| s.phase.as_str()).collect();
        assert_eq!(phases, ["validate", "extract", "registry"]);
        assert!(snapshots[0].classes.is_none());
        assert_eq!(snapshots[1].classes.as_ref().map(Vec::len), Some(2));
        assert!(snapshots[1].registry.is_none());
        assert!(snapshots[2].registry.is_some());
    }

    #[test]
    fn test_writes_json_files() {
        let dir = tempfile::tempdir().unwrap();
        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(dir.path()))
            .run(Manifest::default(), vec![customer_type()])
            .unwrap();

        let json = fs::read_to_string(dir.path().join("registry.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "registry");
        assert!(dir.path().join("validate.json").exists());
    }
}
