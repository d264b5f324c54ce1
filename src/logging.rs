//! Tracing setup.
//!
//! stdout carries the MCP stdio transport, so every log line goes to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset: our crates at `level`, everything else at `warn`.
pub fn default_directives(level: &str) -> String {
    format!("wp_mcp_bridge={level},wp_abilities_mcp={level},warn")
}

pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .init();
    }
}
