//! Server configuration.
//!
//! `proctor.toml` holds the defaults the serve command starts from;
//! command-line flags override it, and built-in defaults apply when no
//! file exists. Precedence: flag > file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_FIXTURES: &str = "fixtures";

/// Top-level proctor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProctorConfig {
    /// Address the API server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Roster file or directory to seed the store from.
    #[serde(default = "default_fixtures")]
    pub fixtures: PathBuf,
}

impl Default for ProctorConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            fixtures: default_fixtures(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_fixtures() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURES)
}

/// Load configuration.
///
/// An explicitly given path must exist; otherwise `./proctor.toml` is used
/// when present, and built-in defaults when not.
pub fn load_config(path: Option<&Path>) -> Result<ProctorConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("proctor.toml");
            if !default.exists() {
                return Ok(ProctorConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: ProctorConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_config_falls_back_to_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.fixtures, PathBuf::from(DEFAULT_FIXTURES));
    }

    #[test]
    fn explicit_config_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proctor.toml");
        std::fs::write(&path, "bind = \"0.0.0.0:9000\"\nfixtures = \"rosters\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.fixtures, PathBuf::from("rosters"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("does-not-exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.toml"));
    }
}
