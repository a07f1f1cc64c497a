// ts3sdk-client - platform/library.rs
//
// Loading of the prebuilt client library.
//
// The engine is opaque: this module opens the shared library and hands out
// raw symbols, it never interprets them. `ArtifactLoader` is the seam the
// bootstrap goes through so hosts and tests can substitute their own
// loading strategy.

use crate::util::error::LoadError;
use std::path::{Path, PathBuf};

/// Strategy for turning an artifact path into an engine handle.
pub trait ArtifactLoader {
    /// Handle produced by a successful load.
    type Engine;

    /// Load the artifact at `path`. Failure is fatal to the bootstrap.
    fn load(&self, path: &Path) -> Result<Self::Engine, LoadError>;
}

impl<F, E> ArtifactLoader for F
where
    F: Fn(&Path) -> Result<E, LoadError>,
{
    type Engine = E;

    fn load(&self, path: &Path) -> Result<E, LoadError> {
        self(path)
    }
}

/// Default loader: opens the artifact as a shared library.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryLoader;

impl ArtifactLoader for LibraryLoader {
    type Engine = NativeEngine;

    fn load(&self, path: &Path) -> Result<NativeEngine, LoadError> {
        NativeEngine::open(path)
    }
}

/// Opaque handle to the loaded client library.
///
/// The library stays mapped for as long as this value lives; symbols
/// borrowed from it cannot outlive it.
#[derive(Debug)]
pub struct NativeEngine {
    library: libloading::Library,
    path: PathBuf,
}

impl NativeEngine {
    /// Open the shared library at `path`.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        tracing::debug!(path = %path.display(), "Opening native artifact");

        // SAFETY: loading runs the library's initialisers. The SDK client
        // library has no load-time side effects beyond its own statics.
        let library = unsafe { libloading::Library::new(path) }.map_err(|source| {
            LoadError::ArtifactLoad {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up an exported symbol, e.g. `ts3client_initClientLib`.
    ///
    /// # Safety
    ///
    /// `T` must match the symbol's actual type (usually an `extern "C"`
    /// function pointer). A mismatch is undefined behaviour when used.
    pub unsafe fn symbol<T>(&self, name: &str) -> Result<libloading::Symbol<'_, T>, LoadError> {
        self.library
            .get::<T>(name.as_bytes())
            .map_err(|source| LoadError::SymbolNotFound {
                path: self.path.clone(),
                symbol: name.to_string(),
                source,
            })
    }

    /// True when the library exports `name`.
    pub fn has_symbol(&self, name: &str) -> bool {
        // SAFETY: the symbol is only checked for presence, never called or
        // dereferenced.
        unsafe { self.symbol::<*const std::ffi::c_void>(name) }.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libts3client_linux_amd64.so");
        let err = LibraryLoader.load(&path).unwrap_err();
        match err {
            LoadError::ArtifactLoad { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ArtifactLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_artifact_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ts3client_win64.dll");
        std::fs::write(&path, b"definitely not a shared library").unwrap();
        assert!(matches!(
            NativeEngine::open(&path),
            Err(LoadError::ArtifactLoad { .. })
        ));
    }

    #[test]
    fn test_closure_loader() {
        let loader = |path: &Path| -> Result<String, LoadError> { Ok(path.display().to_string()) };
        assert_eq!(loader.load(Path::new("a/b")).unwrap(), "a/b");
    }
}
