// ts3sdk-client - platform/detect.rs
//
// Host OS / CPU architecture detection and mapping to a PlatformTag.
//
// Accepts both Rust target names (`linux`, `macos`, `x86_64`) and the
// uname-style names the SDK documentation uses (`Linux`, `Darwin`,
// `Windows_NT`, `x64`), compared case-insensitively.

use crate::core::model::PlatformTag;
use crate::util::error::PlatformError;

/// Raw host identification strings, exactly as read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Operating system family (e.g. "linux", "Windows_NT").
    pub os_type: String,

    /// CPU architecture (e.g. "x86_64", "x64", "x86").
    pub arch: String,
}

impl HostInfo {
    /// Identification of the running process's host.
    pub fn current() -> Self {
        Self {
            os_type: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Arbitrary host, used for simulation and tests.
    pub fn new(os_type: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os_type: os_type.into(),
            arch: arch.into(),
        }
    }

    /// Map this host to its distribution tag.
    pub fn platform_tag(&self) -> Result<PlatformTag, PlatformError> {
        resolve_platform_for(&self.os_type, &self.arch)
    }
}

/// Resolve the platform tag of the running host.
pub fn resolve_platform() -> Result<PlatformTag, PlatformError> {
    HostInfo::current().platform_tag()
}

/// Resolve the platform tag for an explicit OS type / architecture pair.
///
/// macOS ignores the architecture. Unknown OS types fail with the raw
/// strings preserved in the error for diagnostics.
pub fn resolve_platform_for(os_type: &str, arch: &str) -> Result<PlatformTag, PlatformError> {
    let x86_64 = is_x86_64(arch);

    let tag = match os_type.to_ascii_lowercase().as_str() {
        "windows" | "windows_nt" => {
            if x86_64 {
                PlatformTag::Win64
            } else {
                PlatformTag::Win32
            }
        }
        "linux" => {
            if x86_64 {
                PlatformTag::LinuxAmd64
            } else {
                PlatformTag::LinuxX86
            }
        }
        "macos" | "darwin" => PlatformTag::Mac,
        _ => {
            return Err(PlatformError::Unsupported {
                os_type: os_type.to_string(),
                arch: arch.to_string(),
            })
        }
    };

    tracing::debug!(os_type, arch, platform = %tag, "Platform resolved");
    Ok(tag)
}

fn is_x86_64(arch: &str) -> bool {
    matches!(
        arch.to_ascii_lowercase().as_str(),
        "x86_64" | "x64" | "amd64"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_pairs() {
        let cases = [
            ("Windows_NT", "x64", PlatformTag::Win64),
            ("Windows_NT", "ia32", PlatformTag::Win32),
            ("Linux", "x64", PlatformTag::LinuxAmd64),
            ("Linux", "ia32", PlatformTag::LinuxX86),
            ("Darwin", "x64", PlatformTag::Mac),
        ];
        for (os, arch, expected) in cases {
            assert_eq!(resolve_platform_for(os, arch), Ok(expected), "{os} {arch}");
        }
    }

    #[test]
    fn test_rust_target_names() {
        assert_eq!(
            resolve_platform_for("windows", "x86_64"),
            Ok(PlatformTag::Win64)
        );
        assert_eq!(resolve_platform_for("windows", "x86"), Ok(PlatformTag::Win32));
        assert_eq!(
            resolve_platform_for("linux", "x86_64"),
            Ok(PlatformTag::LinuxAmd64)
        );
        assert_eq!(resolve_platform_for("linux", "x86"), Ok(PlatformTag::LinuxX86));
        assert_eq!(resolve_platform_for("macos", "aarch64"), Ok(PlatformTag::Mac));
    }

    #[test]
    fn test_non_x86_64_linux_maps_to_x86() {
        // Only x86-64 is distinguished; every other arch gets the 32-bit build.
        assert_eq!(
            resolve_platform_for("linux", "aarch64"),
            Ok(PlatformTag::LinuxX86)
        );
    }

    #[test]
    fn test_unsupported_os_reports_raw_strings() {
        let err = resolve_platform_for("SunOS", "sparc64").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SunOS"), "got {msg}");
        assert!(msg.contains("sparc64"), "got {msg}");
        assert_eq!(
            err,
            PlatformError::Unsupported {
                os_type: "SunOS".to_string(),
                arch: "sparc64".to_string(),
            }
        );
    }

    #[test]
    fn test_host_info_delegates() {
        let host = HostInfo::new("FreeBSD", "x86_64");
        assert!(host.platform_tag().is_err());
        assert_eq!(
            HostInfo::new("Linux", "x64").platform_tag(),
            Ok(PlatformTag::LinuxAmd64)
        );
    }
}
