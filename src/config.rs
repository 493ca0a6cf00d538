//! `trac.toml`: optional, tolerant configuration. Every field has a default,
//! and a missing or unparsable file never stops the interpreter from
//! starting — it just runs with defaults (matching `core-config`'s "unknown
//! fields ignored... to allow forward evolution without immediate warnings"
//! philosophy).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// The meta-character new interpreters start with. Must be a single
    /// character; longer values use only their first character.
    #[serde(default = "EngineConfig::default_meta_char")]
    pub meta_char: String,
}

impl EngineConfig {
    fn default_meta_char() -> String {
        "'".to_string()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            meta_char: Self::default_meta_char(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Directory the rolling log file is written to.
    #[serde(default = "LoggingConfig::default_dir")]
    pub dir: String,
    /// Start with `tn` already in effect.
    #[serde(default)]
    pub trace: bool,
}

impl LoggingConfig {
    fn default_dir() -> String {
        ".".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Best-effort config path: `trac.toml` in the working directory.
pub fn discover() -> PathBuf {
    PathBuf::from("trac.toml")
}

/// Loads config from `path` (or the discovered default). Any failure to
/// read or parse the file falls back to defaults with a warning — config
/// problems are never fatal to starting the interpreter.
pub fn load_from(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(discover);
    load_from_path(&path)
}

fn load_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_from_path(Path::new("/nonexistent/trac.toml"));
        assert_eq!(config.engine.meta_char, "'");
        assert!(!config.logging.trace);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trac.toml");
        std::fs::write(&path, "[logging]\ntrace = true\n").unwrap();
        let config = load_from_path(&path);
        assert_eq!(config.engine.meta_char, "'");
        assert!(config.logging.trace);
    }
}
