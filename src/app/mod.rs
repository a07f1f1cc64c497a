// ts3sdk-client - app/mod.rs
//
// Application layer: bootstrap orchestration.
// Dependencies: core, platform, util.

pub mod bootstrap;
