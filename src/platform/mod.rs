// ts3sdk-client - platform/mod.rs
//
// Platform abstraction layer: host detection, filesystem probing,
// resource location, native library loading, configuration.
// Dependencies: standard library, directories, libloading, core, util.
// Must NOT depend on: app.

pub mod config;
pub mod detect;
pub mod fs;
pub mod library;
pub mod locate;
