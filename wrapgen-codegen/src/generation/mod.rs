//! Generated output helpers.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`WrapgenTomlTemplate`] - Starter wrapgen.toml for `wrapgen init`

mod imports;
mod wrapgen_toml;

pub use imports::{ImportCollector, WILDCARD};
pub use wrapgen_toml::WrapgenTomlTemplate;
