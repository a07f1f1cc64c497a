// ts3sdk-client - lib.rs
//
// Library entry point. A host process calls `initialize` once at startup
// and passes the returned `LoadedClient` by reference from then on.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::bootstrap::{
    initialize, initialize_with, load_resolved, resolve, BootstrapOptions, LoadedClient, Resolution,
};
pub use crate::core::model::{PlatformTag, ResourceLayout, ResourceLocation};
pub use crate::core::registry::{registry, ConstantRegistry, Enumeration};
pub use crate::platform::detect::{resolve_platform, resolve_platform_for, HostInfo};
pub use crate::platform::library::{ArtifactLoader, LibraryLoader, NativeEngine};
pub use crate::platform::locate::{resolve_bindings_path, resolve_resource_path};
pub use crate::util::error::{ClientError, Result};
