//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default schema file name
pub const DEFAULT_SCHEMA_FILE: &str = "transporter.schema.json";

#[derive(Parser, Debug)]
#[command(name = "transporter")]
#[command(about = "Resolve layered configuration from a store, the environment and flags")]
#[command(version)]
pub struct Cli {
    /// Schema file declaring every key (JSON, TOML or YAML)
    #[arg(long, env = "TRANSPORTER_SCHEMA", default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Persisted store file (defaults to the user config directory)
    #[arg(long, env = "TRANSPORTER_STORE", conflicts_with = "no_store")]
    pub store: Option<PathBuf>,

    /// Run without a persisted store
    #[arg(long)]
    pub no_store: bool,

    /// Only environment variables with this prefix are considered
    #[arg(long, env = "TRANSPORTER_ENV_PREFIX", default_value = "")]
    pub env_prefix: String,

    /// Log every environment variable before resolution
    #[arg(long)]
    pub dump_env: bool,

    /// Log every raw flag before resolution
    #[arg(long)]
    pub dump_args: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value of one key
    Get {
        key: String,
        #[command(flatten)]
        raw: RawArgs,
    },

    /// Set a key and materialize the result
    Set {
        key: String,
        value: String,
        #[command(flatten)]
        raw: RawArgs,
    },

    /// Print every key and its value
    Show {
        #[command(flatten)]
        raw: RawArgs,
    },

    /// Write the resolved configuration to the store
    Materialize {
        #[command(flatten)]
        raw: RawArgs,
    },
}

/// Raw flags handed to the pattern, given after `--`
#[derive(Args, Debug, Default, Clone)]
pub struct RawArgs {
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Commands {
    pub fn raw_args(&self) -> &[String] {
        match self {
            Self::Get { raw, .. }
            | Self::Set { raw, .. }
            | Self::Show { raw }
            | Self::Materialize { raw } => &raw.args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_raw_args() {
        let cli = Cli::try_parse_from([
            "transporter",
            "--env-prefix",
            "APP_",
            "get",
            "port",
            "--",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(cli.env_prefix, "APP_");
        assert!(matches!(&cli.command, Commands::Get { key, .. } if key == "port"));
        assert_eq!(cli.command.raw_args(), ["--port", "8080"]);
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from(["transporter", "--no-store", "set", "host", "example.org"])
            .unwrap();
        assert!(cli.no_store);
        assert!(cli.command.raw_args().is_empty());
        assert!(
            matches!(&cli.command, Commands::Set { key, value, .. } if key == "host" && value == "example.org")
        );
    }

    #[test]
    fn test_store_conflicts_with_no_store() {
        let result =
            Cli::try_parse_from(["transporter", "--store", "a.json", "--no-store", "show"]);
        assert!(result.is_err());
    }
}
