//! Version constraint classification
//!
//! Supported constraints:
//! - `latest` - the registry's `latest` dist-tag
//! - `canary` - the registry's `canary` dist-tag, falling back to `latest`
//! - `2.3.*`, `1.*.*` - highest published version matching the pattern
//! - anything else (`1.2.3`, `^1.2.3`) - used as is, no registry lookup

use std::fmt;

use crate::version::error::ConstraintError;
use crate::version::matcher::WildcardPattern;
use crate::version::types::PackageVersionSet;

const LATEST: &str = "latest";
const CANARY: &str = "canary";

/// Split an npm-style package spec into name and constraint.
///
/// Scoped names keep their leading `@`; a spec without a constraint means `latest`.
///
/// Examples:
/// - "react@18.*.*" -> ("react", "18.*.*")
/// - "@types/node@canary" -> ("@types/node", "canary")
/// - "typescript" -> ("typescript", "latest")
pub fn parse_package_spec(spec: &str) -> (String, String) {
    let separator = match spec.strip_prefix('@') {
        Some(rest) => rest.find('@').map(|i| i + 1),
        None => spec.find('@'),
    };

    match separator {
        Some(i) if i + 1 < spec.len() => (spec[..i].to_string(), spec[i + 1..].to_string()),
        Some(i) => (spec[..i].to_string(), LATEST.to_string()),
        None => (spec.to_string(), LATEST.to_string()),
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    Latest,
    Canary,
    Wildcard(WildcardPattern),
    Literal(String),
}

impl Constraint {
    /// Classify a raw constraint string.
    ///
    /// Fails only for wildcard patterns with a segment that is neither digits
    /// nor `*` (e.g. `2.x.*`).
    pub fn parse(raw: &str) -> Result<Self, ConstraintError> {
        match raw {
            LATEST => Ok(Constraint::Latest),
            CANARY => Ok(Constraint::Canary),
            _ if raw.contains('*') => WildcardPattern::parse(raw).map(Constraint::Wildcard),
            _ => Ok(Constraint::Literal(raw.to_string())),
        }
    }

    /// Whether resolving this constraint requires registry metadata
    pub fn needs_lookup(&self) -> bool {
        !matches!(self, Constraint::Literal(_))
    }

    /// Resolve against registry metadata.
    ///
    /// A wildcard with no matching version resolves to the pattern itself;
    /// a literal resolves to itself.
    pub fn apply(&self, package: &PackageVersionSet) -> String {
        match self {
            Constraint::Latest => package.dist_tags.latest.clone(),
            Constraint::Canary => package
                .dist_tags
                .canary
                .clone()
                .unwrap_or_else(|| package.dist_tags.latest.clone()),
            Constraint::Wildcard(pattern) => pattern
                .latest_match(package.versions.iter().map(String::as_str))
                .unwrap_or(pattern.as_str())
                .to_string(),
            Constraint::Literal(version) => version.clone(),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Latest => f.write_str(LATEST),
            Constraint::Canary => f.write_str(CANARY),
            Constraint::Wildcard(pattern) => f.write_str(pattern.as_str()),
            Constraint::Literal(version) => f.write_str(version),
        }
    }
}
