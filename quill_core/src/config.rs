//! Logger configuration: resolved per-caller settings, the optional override
//! surface, environment gates, and TOML-backed defaults.
//!
//! File-based defaults are loaded from `$XDG_CONFIG_HOME/quill/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable enabling debug-level output
pub const DEBUG_ENV: &str = "QUILL_DEBUG";

/// Environment variable disabling all file writing
pub const NO_LOG_ENV: &str = "QUILL_NO_LOG";

// ============================================================================
// Resolved configuration
// ============================================================================

/// Resolved configuration owned by one caller
///
/// Created once per distinct caller at first logger creation and never
/// mutated afterward; merging happens only at creation time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggerConfig {
    pub write: bool,
    pub timestamp: bool,
    pub namespace: String,
    pub logfile: PathBuf,
}

impl LoggerConfig {
    /// Defaults for an application: no file writing, no timestamps, logfile
    /// in the platform per-user data directory
    pub fn defaults(app_name: &str) -> Self {
        Self {
            write: false,
            timestamp: false,
            namespace: String::new(),
            logfile: default_logfile(app_name),
        }
    }
}

/// Default logfile path: `<platform data dir>/quill/<app name>.log`
pub fn default_logfile(app_name: &str) -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".local/share")
    });
    base.join("quill").join(format!("{}.log", app_name))
}

// ============================================================================
// Override surface
// ============================================================================

/// Caller-supplied overrides, merged over defaults at logger creation
///
/// Every field is optional; supplied fields win wholesale.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LoggerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logfile: Option<PathBuf>,
}

impl LoggerOptions {
    /// Merge these options over a base configuration
    pub fn apply_to(&self, base: LoggerConfig) -> LoggerConfig {
        LoggerConfig {
            write: self.write.unwrap_or(base.write),
            timestamp: self.timestamp.unwrap_or(base.timestamp),
            namespace: self.namespace.clone().unwrap_or(base.namespace),
            logfile: self.logfile.clone().unwrap_or(base.logfile),
        }
    }

    /// Layer another set of options over this one; the other's fields win
    pub fn overridden_by(&self, other: &LoggerOptions) -> LoggerOptions {
        LoggerOptions {
            write: other.write.or(self.write),
            timestamp: other.timestamp.or(self.timestamp),
            namespace: other.namespace.clone().or_else(|| self.namespace.clone()),
            logfile: other.logfile.clone().or_else(|| self.logfile.clone()),
        }
    }
}

// ============================================================================
// Environment gates
// ============================================================================

/// Process-wide gates resolved from the environment
///
/// `debug` enables debug-level output; `no_log` disables file writing
/// regardless of per-instance configuration. Injectable so tests do not
/// depend on ambient environment variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gates {
    pub debug: bool,
    pub no_log: bool,
}

impl Gates {
    /// Resolve gates from `QUILL_DEBUG` and `QUILL_NO_LOG`
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(DEBUG_ENV),
            no_log: env_flag(NO_LOG_ENV),
        }
    }
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(v) => !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"),
        Err(_) => false,
    }
}

// ============================================================================
// Config file
// ============================================================================

/// Configuration file supplying default logger options
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub logger: LoggerOptions,
}

impl ConfigFile {
    /// Load from the standard config path, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
        base.join("quill").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disable_write_and_timestamp() {
        let config = LoggerConfig::defaults("demo");
        assert!(!config.write);
        assert!(!config.timestamp);
        assert!(config.logfile.ends_with("quill/demo.log"));
    }

    #[test]
    fn test_options_win_over_defaults() {
        let options = LoggerOptions {
            write: Some(true),
            timestamp: None,
            namespace: Some("demo|main.rs".into()),
            logfile: None,
        };
        let merged = options.apply_to(LoggerConfig::defaults("demo"));
        assert!(merged.write);
        assert!(!merged.timestamp);
        assert_eq!(merged.namespace, "demo|main.rs");
        assert!(merged.logfile.ends_with("quill/demo.log"));
    }

    #[test]
    fn test_layered_options_prefer_later_layer() {
        let file_layer = LoggerOptions {
            write: Some(true),
            timestamp: Some(true),
            ..Default::default()
        };
        let caller_layer = LoggerOptions {
            timestamp: Some(false),
            ..Default::default()
        };
        let layered = file_layer.overridden_by(&caller_layer);
        assert_eq!(layered.write, Some(true));
        assert_eq!(layered.timestamp, Some(false));
    }

    #[test]
    fn test_partial_config_file() {
        let toml_str = r#"
[logger]
timestamp = true
"#;
        let config: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logger.timestamp, Some(true));
        assert_eq!(config.logger.write, None);
    }

    #[test]
    fn test_config_file_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = ConfigFile {
            logger: LoggerOptions {
                write: Some(true),
                logfile: Some(PathBuf::from("/tmp/demo.log")),
                ..Default::default()
            },
        };
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.logger.write, Some(true));
        assert_eq!(loaded.logger.logfile, Some(PathBuf::from("/tmp/demo.log")));
    }
}
