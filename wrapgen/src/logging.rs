//! Diagnostic logging for the engine's `tracing` events.
//!
//! `RUST_LOG` wins when set; otherwise each `-v` raises the default level.
//! Reports for the user go through [`crate::reports`], not through here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "wrapgen=warn,wrapgen_codegen=warn,wrapgen_codegen_scala=warn",
        1 => "wrapgen=info,wrapgen_codegen=info,wrapgen_codegen_scala=info",
        _ => "wrapgen=debug,wrapgen_codegen=debug,wrapgen_codegen_scala=debug",
    }
}

pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(default_directive(0).starts_with("wrapgen=warn"));
        assert!(default_directive(1).contains("wrapgen_codegen=info"));
        assert_eq!(default_directive(2), default_directive(7));
    }
}
