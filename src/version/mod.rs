//! Version resolution layer
//!
//! Resolves version constraints (`latest`, `canary`, `2.3.*`, literal versions)
//! against a package registry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│   Matcher   │────▶│   Compare   │
//! │  (fan-out)  │     │ (wildcards) │     │ (ordering)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Registry   │
//! │   (npm)     │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`compare`]: Dot-separated numeric version comparison
//! - [`constraint`]: Classification of raw constraint strings
//! - [`matcher`]: Wildcard pattern matching over published versions
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`resolver`]: Concurrent, soft-failing batch resolution
//! - [`types`]: Validated registry metadata (`PackageVersionSet`)
//! - [`warning`]: Injected warning sink
//! - [`error`]: Error types for constraints and registry lookups

pub mod compare;
pub mod constraint;
pub mod error;
pub mod matcher;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod warning;
