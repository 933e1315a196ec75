//! Transporter CLI
//!
//! A small host program around `transporter-core`: it reads a schema file,
//! energizes a state from the persisted store, the process environment and
//! any raw flags given after `--`, then runs one command against it.
//!
//! ```bash
//! transporter --schema app.schema.json --env-prefix APP_ show -- --port 8080
//! transporter --schema app.schema.json set port 9090
//! ```

mod args;
mod commands;
mod schema;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli)
}

/// Directives from `RUST_LOG` when set and valid, otherwise WARN (DEBUG with `--verbose`)
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }
    let fallback = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::default().add_directive(fallback.into())
}
