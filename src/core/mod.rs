// ts3sdk-client - core/mod.rs
//
// Core data layer: platform tags, resource locations, protocol constants.
// Dependencies: standard library, serde, util.
// Must NOT depend on: platform, app, or perform any I/O.

pub mod model;
pub mod registry;
