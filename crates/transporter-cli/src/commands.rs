//! Command dispatch

use crate::args::{Cli, Commands};
use crate::schema::load_schema;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use transporter_core::{HostInputs, JsonFileStore, State, TransporterOptions, energize};

/// Store file used when neither `--store` nor `--no-store` is given
fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("transporter")
        .join("store.json")
}

fn build_options(cli: &Cli) -> TransporterOptions {
    let mut options = TransporterOptions::new()
        .with_env_prefix(cli.env_prefix.clone())
        .with_dump_environment(cli.dump_env)
        .with_dump_cli_arguments(cli.dump_args);

    if !cli.no_store {
        let path = cli.store.clone().unwrap_or_else(default_store_path);
        tracing::debug!("Using store {}", path.display());
        options = options.with_persistence(Arc::new(JsonFileStore::new(path)));
    }

    options
}

pub fn run(cli: Cli) -> Result<()> {
    let pattern = load_schema(&cli.schema)?;
    let inputs = HostInputs {
        args: cli.command.raw_args().to_vec(),
        env: HostInputs::from_process().env,
    };

    let state = energize(pattern, build_options(&cli), inputs).context("Failed to energize")?;

    match &cli.command {
        Commands::Get { key, .. } => println!("{}", state.get(key)?),
        Commands::Set { key, value, .. } => {
            state.set(key, value.as_str())?;
            state.materialize().context("Failed to materialize")?;
        }
        Commands::Show { .. } => print!("{}", render(&state)),
        Commands::Materialize { .. } => {
            state.materialize().context("Failed to materialize")?;
        }
    }

    Ok(())
}

/// `key = value` lines in key order
fn render(state: &State) -> String {
    state
        .snapshot()
        .iter()
        .map(|(key, seq)| format!("{} = {}\n", key, seq.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use transporter_core::{Pattern, PatternSequence};

    #[test]
    fn test_render() {
        let pattern = Pattern::builder()
            .sequence("b", PatternSequence::new("B").with_value("2"))
            .sequence("a", PatternSequence::new("A").with_cli_flags(["x"]))
            .build()
            .unwrap();
        let state = energize(
            pattern,
            TransporterOptions::new(),
            HostInputs::new().with_args(["--x", "1"]),
        )
        .unwrap();

        assert_eq!(render(&state), "a = 1\nb = 2\n");
    }

    #[test]
    fn test_build_options_without_store() {
        let cli = Cli::try_parse_from(["transporter", "--no-store", "--dump-env", "show"]).unwrap();
        let options = build_options(&cli);
        assert!(options.persistence.is_none());
        assert!(options.dump_environment.resolve(false));
    }

    #[test]
    fn test_build_options_with_store() {
        let cli = Cli::try_parse_from(["transporter", "--store", "s.json", "show"]).unwrap();
        assert!(build_options(&cli).persistence.is_some());
    }
}
