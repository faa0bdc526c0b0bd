//! Log filter setup.
//!
//! `RUST_LOG` replaces the default `pipeweaver=info`; `--log-level` is
//! layered on top of whichever of the two is in effect.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "pipeweaver=info";

/// Build the filter from the `RUST_LOG` value and the CLI override.
/// Unparseable input falls back to the default rather than silencing logs.
pub fn filter(env: Option<&str>, level: Option<&str>) -> EnvFilter {
    let base = env
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    match level.and_then(|level| level.parse().ok()) {
        Some(directive) => base.add_directive(directive),
        None => base,
    }
}

pub fn init(level: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(env.as_deref(), level))
        .init();
}
