//! Resolve npm version constraints to concrete versions.
//!
//! - [`version`]: comparison, wildcard matching and registry-backed resolution
//! - [`manifest`]: merges resolved versions into a `package.json`
//! - [`config`]: configuration file and defaults

pub mod config;
pub mod manifest;
pub mod version;
