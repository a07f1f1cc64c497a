// ts3sdk-client - app/bootstrap.rs
//
// One-shot initialisation: resolve platform, resolve resource directory,
// load the native artifact, wrap everything in an immutable record.
//
// State progression (each step either advances or aborts):
//
//   Uninitialized -> PlatformResolved -> ResourceResolved
//                 -> ArtifactLoaded -> Enriched
//
// Failures at PlatformResolved (unsupported host) and ArtifactLoaded
// (missing or incompatible artifact) are fatal. No partial record is ever
// returned and nothing is retried.

use crate::core::model::{PlatformTag, ResourceLocation};
use crate::core::registry::{self, ConstantRegistry};
use crate::platform::detect::HostInfo;
use crate::platform::library::{ArtifactLoader, LibraryLoader, NativeEngine};
use crate::platform::locate;
use crate::util::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Bootstrap progress, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    PlatformResolved,
    ResourceResolved,
    ArtifactLoaded,
    Enriched,
}

impl BootstrapState {
    /// Short label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            BootstrapState::Uninitialized => "uninitialized",
            BootstrapState::PlatformResolved => "platform_resolved",
            BootstrapState::ResourceResolved => "resource_resolved",
            BootstrapState::ArtifactLoaded => "artifact_loaded",
            BootstrapState::Enriched => "enriched",
        }
    }
}

/// Inputs to the bootstrap. `Default` describes the running process.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Host identification used for platform resolution.
    pub host: HostInfo,

    /// Directory the resource candidates are resolved against.
    pub base_dir: PathBuf,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            host: HostInfo::current(),
            base_dir: locate::default_base_dir(),
        }
    }
}

/// Everything resolved before the artifact is touched.
///
/// Useful on its own for diagnostics (`ts3sdk-probe` without `--load`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub platform: PlatformTag,
    pub resource_path: ResourceLocation,
    pub bindings_path: PathBuf,
}

/// Resolve platform, resource directory and artifact path without loading.
pub fn resolve(options: &BootstrapOptions) -> Result<Resolution> {
    let mut state = BootstrapState::Uninitialized;
    trace_state(state);

    let platform = options.host.platform_tag()?;
    state = BootstrapState::PlatformResolved;
    trace_state(state);

    let resource_path = locate::resolve_resource_path(&options.base_dir, platform);
    let bindings_path = resource_path.bindings_path(platform);
    state = BootstrapState::ResourceResolved;
    trace_state(state);

    Ok(Resolution {
        platform,
        resource_path,
        bindings_path,
    })
}

/// The enriched client: resolved metadata, constant tables, and the engine
/// handle. Immutable once constructed.
#[derive(Debug)]
pub struct LoadedClient<E = NativeEngine> {
    platform: PlatformTag,
    resource_path: ResourceLocation,
    bindings_path: PathBuf,
    constants: &'static ConstantRegistry,
    engine: E,
}

impl<E> LoadedClient<E> {
    /// Resolved platform tag.
    pub fn platform(&self) -> PlatformTag {
        self.platform
    }

    /// Resolved resource directory, with the layout that produced it.
    pub fn resource_path(&self) -> &ResourceLocation {
        &self.resource_path
    }

    /// Full path of the loaded artifact.
    pub fn bindings_path(&self) -> &Path {
        &self.bindings_path
    }

    /// Protocol constant tables.
    pub fn constants(&self) -> &'static ConstantRegistry {
        self.constants
    }

    /// The opaque engine, passed through untouched.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Give up the wrapper and keep only the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

/// Run the full bootstrap with an explicit loader.
pub fn initialize_with<L: ArtifactLoader>(
    options: &BootstrapOptions,
    loader: &L,
) -> Result<LoadedClient<L::Engine>> {
    load_resolved(resolve(options)?, loader)
}

/// Load the artifact named by an already computed `Resolution` and build the
/// client from it. Nothing is re-resolved.
pub fn load_resolved<L: ArtifactLoader>(
    resolution: Resolution,
    loader: &L,
) -> Result<LoadedClient<L::Engine>> {
    let Resolution {
        platform,
        resource_path,
        bindings_path,
    } = resolution;

    let engine = loader.load(&bindings_path).map_err(|e| {
        tracing::error!(
            platform = %platform,
            path = %bindings_path.display(),
            error = %e,
            "Native artifact could not be loaded"
        );
        e
    })?;
    trace_state(BootstrapState::ArtifactLoaded);

    let client = LoadedClient {
        platform,
        resource_path,
        bindings_path,
        constants: registry::registry(),
        engine,
    };
    trace_state(BootstrapState::Enriched);

    tracing::info!(
        platform = %client.platform,
        resource_path = %client.resource_path,
        layout = client.resource_path.layout.label(),
        bindings_path = %client.bindings_path.display(),
        "Native client ready"
    );

    Ok(client)
}

/// Bootstrap the running process with the default shared-library loader.
pub fn initialize(options: &BootstrapOptions) -> Result<LoadedClient<NativeEngine>> {
    initialize_with(options, &LibraryLoader)
}

fn trace_state(state: BootstrapState) {
    tracing::trace!(state = state.label(), "Bootstrap state");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ResourceLayout;
    use crate::util::error::{ClientError, LoadError, PlatformError};
    use std::cell::Cell;

    fn options(os: &str, arch: &str, base: &Path) -> BootstrapOptions {
        BootstrapOptions {
            host: HostInfo::new(os, arch),
            base_dir: base.to_path_buf(),
        }
    }

    #[test]
    fn test_resolve_without_loading() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bin").join("mac")).unwrap();

        let res = resolve(&options("Darwin", "arm64", dir.path())).unwrap();
        assert_eq!(res.platform, PlatformTag::Mac);
        assert_eq!(res.resource_path.layout, ResourceLayout::Sibling);
        assert!(res
            .bindings_path
            .to_string_lossy()
            .ends_with("libts3client_mac.dylib"));
    }

    #[test]
    fn test_loader_receives_bindings_path() {
        let dir = tempfile::tempdir().unwrap();
        let seen = std::cell::RefCell::new(None);
        let loader = |path: &Path| -> std::result::Result<u8, LoadError> {
            *seen.borrow_mut() = Some(path.to_path_buf());
            Ok(7)
        };

        let client = initialize_with(&options("Linux", "x64", dir.path()), &loader).unwrap();
        assert_eq!(*client.engine(), 7);
        assert_eq!(seen.borrow().as_deref(), Some(client.bindings_path()));
        assert!(std::ptr::eq(client.constants(), registry::registry()));
    }

    #[test]
    fn test_unsupported_platform_never_reaches_loader() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Cell::new(0);
        let loader = |_: &Path| -> std::result::Result<(), LoadError> {
            calls.set(calls.get() + 1);
            Ok(())
        };

        let err = initialize_with(&options("SunOS", "sparc", dir.path()), &loader).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Platform(PlatformError::Unsupported { .. })
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_load_resolved_keeps_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let res = resolve(&options("Windows_NT", "ia32", dir.path())).unwrap();

        // The layout disappears after resolution; the client still carries
        // exactly what was resolved.
        drop(dir);
        let seen = std::cell::RefCell::new(None);
        let loader = |path: &Path| -> std::result::Result<(), LoadError> {
            *seen.borrow_mut() = Some(path.to_path_buf());
            Ok(())
        };

        let client = load_resolved(res.clone(), &loader).unwrap();
        assert_eq!(client.platform(), res.platform);
        assert_eq!(client.resource_path(), &res.resource_path);
        assert_eq!(client.bindings_path(), res.bindings_path.as_path());
        assert_eq!(seen.borrow().as_deref(), Some(res.bindings_path.as_path()));
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bin").join("linux_amd64")).unwrap();

        let err = initialize(&options("linux", "x86_64", dir.path())).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Load(LoadError::ArtifactLoad { .. })
        ));
    }
}
