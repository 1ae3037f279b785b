//! Batch pipeline: phase 1 of a generation run.
//!
//! The [`Pipeline`] runs the built-in phases in order, with plugin hooks
//! around each one:
//!
//! - `validate` - lints over the raw records (warnings by default)
//! - `extract` - raw records to class descriptors; failures are collected
//! - `registry` - the immutable cross-reference registry
//!
//! A language generator then takes the finished [`CompilationContext`] and
//! runs phase 2 per class.
//!
//! # Example
//!
//! ```ignore
//! use wrapgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest, records)?;
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
