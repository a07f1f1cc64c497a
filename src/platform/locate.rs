// ts3sdk-client - platform/locate.rs
//
// Resource directory and artifact path resolution.
//
// Candidates, first existing directory wins:
//   1. <base>/node_modules/node-ts3sdk-client/bin/<tag>/
//   2. <base>/bin/<tag>/
//   3. ./bin/<tag>/  (unverified, never fails)
//
// The base directory plays the role of "the directory this loader lives
// in": by default the directory of the running executable.

use crate::core::model::{PlatformTag, ResourceLayout, ResourceLocation};
use crate::platform::fs;
use crate::util::constants;
use std::path::{Path, PathBuf};

/// Default base directory: the directory containing the running executable,
/// or the current directory if that cannot be determined.
pub fn default_base_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine executable path, using current directory");
            PathBuf::from(".")
        }
    }
}

/// Candidate directories in probe order, before normalisation.
pub fn candidate_dirs(base_dir: &Path, tag: PlatformTag) -> [(ResourceLayout, PathBuf); 2] {
    [
        (
            ResourceLayout::NestedDependency,
            base_dir
                .join(constants::DEPENDENCY_DIR_NAME)
                .join(constants::PACKAGE_DIR_NAME)
                .join(constants::BIN_DIR_NAME)
                .join(tag.as_str()),
        ),
        (
            ResourceLayout::Sibling,
            base_dir.join(constants::BIN_DIR_NAME).join(tag.as_str()),
        ),
    ]
}

/// Resolve the resource directory for `tag` relative to `base_dir`.
///
/// Never fails: when neither candidate exists the literal `./bin/<tag>/`
/// is returned with [`ResourceLayout::RelativeFallback`].
pub fn resolve_resource_path(base_dir: &Path, tag: PlatformTag) -> ResourceLocation {
    for (layout, candidate) in candidate_dirs(base_dir, tag) {
        let absolute = match fs::absolute_normalized(&candidate) {
            Ok(p) => p,
            Err(e) => {
                tracing::trace!(
                    candidate = %candidate.display(),
                    error = %e,
                    "Could not make candidate absolute"
                );
                continue;
            }
        };

        if fs::is_directory(&absolute) {
            let location = ResourceLocation::verified(layout, &absolute);
            tracing::debug!(
                layout = layout.label(),
                path = %location,
                "Resource directory found"
            );
            return location;
        }
    }

    let fallback = ResourceLocation::relative_fallback(tag);
    tracing::warn!(
        base = %base_dir.display(),
        path = %fallback,
        "No resource directory found; using unverified relative path"
    );
    fallback
}

/// Resolve the full path of the native artifact for `tag`.
pub fn resolve_bindings_path(base_dir: &Path, tag: PlatformTag) -> PathBuf {
    resolve_resource_path(base_dir, tag).bindings_path(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    fn nested(base: &Path, tag: PlatformTag) -> PathBuf {
        base.join("node_modules")
            .join("node-ts3sdk-client")
            .join("bin")
            .join(tag.as_str())
    }

    #[test]
    fn test_nested_layout_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let tag = PlatformTag::LinuxAmd64;
        std::fs::create_dir_all(nested(dir.path(), tag)).unwrap();
        std::fs::create_dir_all(dir.path().join("bin").join(tag.as_str())).unwrap();

        let loc = resolve_resource_path(dir.path(), tag);
        assert_eq!(loc.layout, ResourceLayout::NestedDependency);
        assert!(loc.path.ends_with(&format!(
            "node-ts3sdk-client{MAIN_SEPARATOR}bin{MAIN_SEPARATOR}linux_amd64{MAIN_SEPARATOR}"
        )));
    }

    #[test]
    fn test_sibling_layout_when_nested_missing() {
        let dir = tempfile::tempdir().unwrap();
        let tag = PlatformTag::Win64;
        std::fs::create_dir_all(dir.path().join("bin").join(tag.as_str())).unwrap();

        let loc = resolve_resource_path(dir.path(), tag);
        assert_eq!(loc.layout, ResourceLayout::Sibling);
        assert!(loc.path.ends_with(&format!("bin{MAIN_SEPARATOR}win64{MAIN_SEPARATOR}")));
        assert!(Path::new(&loc.path).is_absolute());
    }

    #[test]
    fn test_nested_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let tag = PlatformTag::Mac;
        let nested_path = nested(dir.path(), tag);
        std::fs::create_dir_all(nested_path.parent().unwrap()).unwrap();
        std::fs::write(&nested_path, b"not a dir").unwrap();
        std::fs::create_dir_all(dir.path().join("bin").join("mac")).unwrap();

        let loc = resolve_resource_path(dir.path(), tag);
        assert_eq!(loc.layout, ResourceLayout::Sibling);
    }

    #[test]
    fn test_fallback_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let loc = resolve_resource_path(dir.path(), PlatformTag::LinuxX86);
        assert_eq!(loc.layout, ResourceLayout::RelativeFallback);
        assert_eq!(loc.path, format!("./bin/linux_x86{MAIN_SEPARATOR}"));
    }

    #[test]
    fn test_relative_base_dir_is_made_absolute() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bin").join("win32")).unwrap();
        let base = dir.path().join("sub").join("..");

        let loc = resolve_resource_path(&base, PlatformTag::Win32);
        assert_eq!(loc.layout, ResourceLayout::Sibling);
        assert!(!loc.path.contains(".."), "not normalised: {}", loc.path);
    }

    #[test]
    fn test_bindings_path_for_every_tag() {
        let dir = tempfile::tempdir().unwrap();
        for tag in PlatformTag::all() {
            let loc = resolve_resource_path(dir.path(), *tag);
            let bindings = resolve_bindings_path(dir.path(), *tag);
            assert_eq!(
                bindings,
                PathBuf::from(format!("{}{}", loc.path, tag.artifact_name()))
            );
        }
    }
}
