// ts3sdk-client - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr, or the configured log file. Library code only emits
// events; installing a subscriber is left to the host binary.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the env filter with the documented priority:
/// RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn build_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` is the optional log file from config.toml; events are
/// appended to it instead of stderr. If it cannot be opened, stderr is used
/// and a warning is logged.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&Path>) {
    let filter = build_filter(debug_flag, config_level);

    let mut open_error = None;
    let file = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(f),
            Err(e) => {
                open_error = Some((path.to_path_buf(), e));
                None
            }
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let installed = match file {
        Some(f) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(f))
            .try_init()
            .is_ok(),
        None => builder.with_writer(std::io::stderr).try_init().is_ok(),
    };

    if !installed {
        return;
    }

    if let Some((path, e)) = open_error {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "Could not open log file; logging to stderr"
        );
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority_without_rust_log() {
        if std::env::var("RUST_LOG").is_ok() {
            return; // Environment overrides everything; nothing to check.
        }
        assert_eq!(build_filter(true, Some("warn")).to_string(), "debug");
        assert_eq!(build_filter(false, Some("warn")).to_string(), "warn");
        assert_eq!(build_filter(false, None).to_string(), "info");
    }

    #[test]
    fn test_second_init_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("loader.log");
        init(false, Some("info"), Some(&log));
        init(true, None, None);

        // The log file is opened (and created) before the subscriber is
        // installed, whether or not this call won the global slot.
        assert!(log.is_file());
    }
}
