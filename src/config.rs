use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    /// Weight stored for a click when the caller does not supply one.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if !config.ingest.default_weight.is_finite() {
        anyhow::bail!("ingest.default_weight must be a finite number");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight_when_section_absent() {
        let config: Config = toml::from_str(
            r#"
[db]
path = "./data/click.sqlite"

[server]
bind = "127.0.0.1:5001"
"#,
        )
        .unwrap();
        assert!((config.ingest.default_weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_default_weight() {
        let config: Config = toml::from_str(
            r#"
[db]
path = "./data/click.sqlite"

[server]
bind = "127.0.0.1:5001"

[ingest]
default_weight = 0.5
"#,
        )
        .unwrap();
        assert!((config.ingest.default_weight - 0.5).abs() < 1e-9);
    }
}
