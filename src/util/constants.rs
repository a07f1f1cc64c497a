// ts3sdk-client - util/constants.rs
//
// Single source of truth for all named constants, directory layout names,
// artifact file names, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ts3sdk-client";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ts3sdk-client";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Resource layout
// =============================================================================

/// Directory holding installed dependency packages next to the host module.
pub const DEPENDENCY_DIR_NAME: &str = "node_modules";

/// Package directory name of the SDK client distribution inside
/// [`DEPENDENCY_DIR_NAME`].
pub const PACKAGE_DIR_NAME: &str = "node-ts3sdk-client";

/// Directory containing one sub-directory per platform tag.
pub const BIN_DIR_NAME: &str = "bin";

/// Prefix of the unverified fallback resource path (`./bin/<tag>/`).
pub const RELATIVE_FALLBACK_PREFIX: &str = "./bin/";

// =============================================================================
// Native artifact names (one per platform tag)
// =============================================================================

/// Client library shipped in `bin/win64/`.
pub const ARTIFACT_WIN64: &str = "ts3client_win64.dll";

/// Client library shipped in `bin/win32/`.
pub const ARTIFACT_WIN32: &str = "ts3client_win32.dll";

/// Client library shipped in `bin/linux_amd64/`.
pub const ARTIFACT_LINUX_AMD64: &str = "libts3client_linux_amd64.so";

/// Client library shipped in `bin/linux_x86/`.
pub const ARTIFACT_LINUX_X86: &str = "libts3client_linux_x86.so";

/// Client library shipped in `bin/mac/`.
pub const ARTIFACT_MAC: &str = "libts3client_mac.dylib";

// =============================================================================
// Configuration & logging
// =============================================================================

/// Configuration file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
