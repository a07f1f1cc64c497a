// ts3sdk-client - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for loader configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/ts3sdk-client/ or %APPDATA%\ts3sdk-client\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[loader]` section.
    pub loader: LoaderSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[loader]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoaderSection {
    /// Directory probed for `node_modules/node-ts3sdk-client/bin/` and
    /// `bin/` instead of the executable's directory.
    pub base_directory: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated loader configuration derived from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Base directory override for resource resolution.
    pub base_dir: Option<PathBuf>,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,

    /// Log file path.
    pub log_file: Option<String>,
}

/// Load and validate config.toml at `config_path`.
///
/// Returns `LoaderConfig` with validated values and a list of non-fatal
/// problems. A missing file yields defaults with no problems. An unreadable
/// or unparseable file yields defaults plus the error; the loader still
/// starts but the user is informed.
pub fn load_config(config_path: &Path) -> (LoaderConfig, Vec<ConfigError>) {
    let mut problems: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (LoaderConfig::default(), problems);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Using default configuration");
            problems.push(err);
            return (LoaderConfig::default(), problems);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Using default configuration");
            problems.push(err);
            return (LoaderConfig::default(), problems);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = LoaderConfig::default();

    // -- Loader: base_directory --
    if let Some(ref base) = raw.loader.base_directory {
        if base.trim().is_empty() {
            problems.push(ConfigError::InvalidValue {
                field: "[loader] base_directory".to_string(),
                value: base.clone(),
                expected: "a non-empty directory path".to_string(),
            });
        } else {
            config.base_dir = Some(PathBuf::from(base));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::InvalidValue {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    if !problems.is_empty() {
        tracing::warn!(
            count = problems.len(),
            "Config validation produced warnings"
        );
    }

    (config, problems)
}
