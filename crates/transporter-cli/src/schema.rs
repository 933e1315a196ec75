//! Schema file loading
//!
//! A schema maps each key to its sequence description:
//!
//! ```toml
//! [port]
//! name = "Port"
//! cli_flags = ["p", "port"]
//! env_vars = ["PORT"]
//! value = "8080"
//! ```

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use transporter_core::{Pattern, PatternSequence};

/// Load and validate a pattern from a JSON, TOML or YAML schema file
///
/// The format follows the file extension; anything other than `toml`,
/// `yaml` or `yml` is read as JSON.
pub fn load_schema(path: &Path) -> Result<Pattern> {
    if !path.exists() {
        bail!("Schema file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    let sequences: BTreeMap<String, PatternSequence> =
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML schema: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML schema: {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON schema: {}", path.display()))?,
        };

    Pattern::new(sequences).with_context(|| format!("Rejected schema: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.json");
        fs::write(
            &path,
            r#"{
                "user-age": {"name": "User's Age", "cli_flags": ["a", "age"]},
                "token": {"name": "Token", "disable_persistence": true}
            }"#,
        )
        .unwrap();

        let pattern = load_schema(&path).unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.get("user-age").unwrap().cli_flags, vec!["a", "age"]);
        assert!(pattern.get("token").unwrap().disable_persistence);
    }

    #[test]
    fn test_load_toml_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.toml");
        fs::write(
            &path,
            r#"
[port]
name = "Port"
cli_flags = ["p", "port"]
env_vars = ["PORT"]
value = "8080"
"#,
        )
        .unwrap();

        let pattern = load_schema(&path).unwrap();
        assert_eq!(pattern.value("port"), Some("8080"));
    }

    #[test]
    fn test_load_yaml_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.yaml");
        fs::write(&path, "host:\n  name: Host\n  required: true\n").unwrap();

        let pattern = load_schema(&path).unwrap();
        assert!(pattern.get("host").unwrap().required);
    }

    #[test]
    fn test_colliding_schema_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.json");
        fs::write(
            &path,
            r#"{"host": {"cli_flags": ["h"]}, "help": {"cli_flags": ["h"]}}"#,
        )
        .unwrap();

        let err = load_schema(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("collides"));
    }

    #[test]
    fn test_missing_schema() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_schema(&temp_dir.path().join("absent.json")).is_err());
    }
}
