// ts3sdk-client - platform/fs.rs
//
// Filesystem helpers for resource probing: directory checks that never
// fail, and lexical path normalisation.

use std::io;
use std::path::{Component, Path, PathBuf};

/// True when `path` exists and is a directory.
///
/// Every probe failure (not found, not a directory, permission denied) is
/// reported as `false` and logged at TRACE; nothing is propagated.
pub fn is_directory(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            tracing::trace!(path = %path.display(), "Probe: not a directory");
            false
        }
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "Probe failed");
            false
        }
    }
}

/// Make `path` absolute against the current working directory and
/// normalise it lexically (`.` removed, `..` folded). Symlinks are not
/// resolved.
pub fn absolute_normalized(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexical normalisation. `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
