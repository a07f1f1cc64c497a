// ts3sdk-client - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// Probe failures during resource resolution are NOT errors: they are
// swallowed in platform::locate and never reach this module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all loader operations.
/// Errors are categorised by the bootstrap stage that produced them.
#[derive(Debug)]
pub enum ClientError {
    /// The host OS/architecture pair has no prebuilt distribution.
    Platform(PlatformError),

    /// The native artifact could not be loaded or queried.
    Load(LoadError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "Platform error: {e}"),
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Platform errors
// ---------------------------------------------------------------------------

/// Errors raised while mapping the host to a platform tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// OS type matched none of the supported families. Carries the raw
    /// strings exactly as reported by the environment.
    Unsupported { os_type: String, arch: String },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { os_type, arch } => {
                write!(f, "Unsupported platform! ({os_type} {arch})")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<PlatformError> for ClientError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors related to opening the native artifact and resolving its symbols.
#[derive(Debug)]
pub enum LoadError {
    /// The shared library is missing, unreadable, or built for another ABI.
    ArtifactLoad {
        path: PathBuf,
        source: libloading::Error,
    },

    /// An exported symbol was requested that the artifact does not provide.
    SymbolNotFound {
        path: PathBuf,
        symbol: String,
        source: libloading::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactLoad { path, source } => write!(
                f,
                "Failed to load native artifact '{}': {source}",
                path.display()
            ),
            Self::SymbolNotFound {
                path,
                symbol,
                source,
            } => write!(
                f,
                "Symbol '{symbol}' not found in '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArtifactLoad { source, .. } => Some(source),
            Self::SymbolNotFound { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for ClientError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is outside the accepted set.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not valid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ClientError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Registry errors
// ---------------------------------------------------------------------------

/// Errors raised when converting raw codes or names into typed constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The integer is not a member of the enumeration.
    UnknownValue {
        enumeration: &'static str,
        value: u32,
    },

    /// The symbolic name is not a member of the enumeration.
    UnknownMember {
        enumeration: &'static str,
        member: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownValue { enumeration, value } => {
                write!(f, "{enumeration} has no member with value {value:#04x}")
            }
            Self::UnknownMember {
                enumeration,
                member,
            } => write!(f, "{enumeration} has no member named '{member}'"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Convenience type alias for loader results.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unsupported_message_names_os_and_arch() {
        let err = PlatformError::Unsupported {
            os_type: "SunOS".to_string(),
            arch: "sparc".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported platform! (SunOS sparc)");
    }

    #[test]
    fn test_client_error_chains_platform_source() {
        let err: ClientError = PlatformError::Unsupported {
            os_type: "AIX".to_string(),
            arch: "ppc64".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Platform error:"), "got {msg}");
        assert!(msg.contains("AIX ppc64"), "got {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_value_has_no_source() {
        let err = ConfigError::InvalidValue {
            field: "[logging] level".to_string(),
            value: "loud".to_string(),
            expected: "error, warn, info, debug, trace".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("loud"));
    }
}
