// ts3sdk-client - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no platform
// probing. These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::str::FromStr;

// =============================================================================
// Platform tag
// =============================================================================

/// Supported OS + architecture combination, named after the binary
/// distribution directory under `bin/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformTag {
    #[serde(rename = "win64")]
    Win64,
    #[serde(rename = "win32")]
    Win32,
    #[serde(rename = "linux_amd64")]
    LinuxAmd64,
    #[serde(rename = "linux_x86")]
    LinuxX86,
    #[serde(rename = "mac")]
    Mac,
}

impl PlatformTag {
    /// Returns all variants.
    pub fn all() -> &'static [PlatformTag] {
        &[
            PlatformTag::Win64,
            PlatformTag::Win32,
            PlatformTag::LinuxAmd64,
            PlatformTag::LinuxX86,
            PlatformTag::Mac,
        ]
    }

    /// Distribution directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTag::Win64 => "win64",
            PlatformTag::Win32 => "win32",
            PlatformTag::LinuxAmd64 => "linux_amd64",
            PlatformTag::LinuxX86 => "linux_x86",
            PlatformTag::Mac => "mac",
        }
    }

    /// File name of the prebuilt client library inside the tag's directory.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            PlatformTag::Win64 => constants::ARTIFACT_WIN64,
            PlatformTag::Win32 => constants::ARTIFACT_WIN32,
            PlatformTag::LinuxAmd64 => constants::ARTIFACT_LINUX_AMD64,
            PlatformTag::LinuxX86 => constants::ARTIFACT_LINUX_X86,
            PlatformTag::Mac => constants::ARTIFACT_MAC,
        }
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlatformTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown platform tag '{s}'"))
    }
}

// =============================================================================
// Resource location
// =============================================================================

/// Which candidate layout produced a resource directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceLayout {
    /// `<base>/node_modules/node-ts3sdk-client/bin/<tag>/`
    NestedDependency,
    /// `<base>/bin/<tag>/`
    Sibling,
    /// `./bin/<tag>/`, returned without checking the filesystem.
    RelativeFallback,
}

impl ResourceLayout {
    /// Human-readable label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceLayout::NestedDependency => "nested dependency",
            ResourceLayout::Sibling => "sibling bin directory",
            ResourceLayout::RelativeFallback => "unverified relative fallback",
        }
    }
}

/// Outcome of resource directory resolution.
///
/// `path` is always separator-terminated, so joining the artifact name is a
/// plain string concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLocation {
    /// Candidate layout that produced `path`.
    pub layout: ResourceLayout,

    /// Directory string ending in the platform path separator.
    pub path: String,
}

impl ResourceLocation {
    /// A directory that was confirmed to exist on disk.
    pub fn verified(layout: ResourceLayout, dir: &std::path::Path) -> Self {
        let mut path = dir.to_string_lossy().into_owned();
        if !path.ends_with(MAIN_SEPARATOR) {
            path.push(MAIN_SEPARATOR);
        }
        Self { layout, path }
    }

    /// The optimistic `./bin/<tag>/` guess.
    pub fn relative_fallback(tag: PlatformTag) -> Self {
        Self {
            layout: ResourceLayout::RelativeFallback,
            path: format!(
                "{}{}{MAIN_SEPARATOR}",
                constants::RELATIVE_FALLBACK_PREFIX,
                tag.as_str()
            ),
        }
    }

    /// True when the directory was found on disk.
    pub fn is_verified(&self) -> bool {
        self.layout != ResourceLayout::RelativeFallback
    }

    /// Full path to the artifact for `tag` inside this directory.
    pub fn bindings_path(&self, tag: PlatformTag) -> PathBuf {
        PathBuf::from(format!("{}{}", self.path, tag.artifact_name()))
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}
