//! Formation engine for the cinematic portfolio drill-down visualization.
//!
//! Two synchronized state machines form the core: the hierarchical
//! navigation machine ([`navigation`]) tracks where the user is in the
//! portfolio tree and runs the multi-phase selection animations, and the
//! particle store ([`store`]) owns the formation geometry (spiral galaxy,
//! geographic globe, nebula cloud) plus the morphs between them.
//! Rendering, UI controls, and data generation are external collaborators.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod camera;
pub mod config;
pub mod formations;
pub mod hierarchy;
pub mod jitter;
pub mod navigation;
pub mod particle;
pub mod store;
pub mod timer;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
