//! Wildcard version matching
//!
//! A pattern has the same shape as a version, with `*` standing for any
//! digits in that segment:
//! - `2.3.*` matches 2.3.0, 2.3.10, but not 2.3.1.5 or 2.4.0
//! - `1.*.*` matches every three-segment 1.x version
//! - `9.1.0` matches exactly 9.1.0
//!
//! The pattern must cover the whole version string, so its segment count
//! fixes the segment count of every match.

use regex::Regex;

use crate::version::compare::compare_versions;
use crate::version::error::ConstraintError;

/// A parsed wildcard pattern such as `2.3.*`.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    raw: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Parse a pattern whose segments are digits or `*`.
    pub fn parse(pattern: &str) -> Result<Self, ConstraintError> {
        let mut segments = Vec::new();
        for segment in pattern.split('.') {
            if segment == "*" {
                segments.push(r"\d+");
            } else if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                segments.push(segment);
            } else {
                return Err(ConstraintError::Malformed {
                    constraint: pattern.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        let regex = Regex::new(&format!("^{}$", segments.join(r"\."))).map_err(|e| {
            ConstraintError::Pattern {
                constraint: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, version: &str) -> bool {
        self.regex.is_match(version)
    }

    /// Highest version matching this pattern, or None if nothing matches.
    ///
    /// Versions comparing equal (`1.0` and `1.0.0`) are interchangeable here;
    /// which one is returned is unspecified.
    pub fn latest_match<'a, I>(&self, versions: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        versions
            .into_iter()
            .filter(|v| self.is_match(v))
            .max_by(|a, b| compare_versions(a, b))
    }
}

/// Find the highest version in `versions` matching `constraint`.
///
/// Returns None when no version matches or the constraint has a segment that
/// is neither digits nor `*`.
pub fn match_latest<S: AsRef<str>>(versions: &[S], constraint: &str) -> Option<String> {
    let pattern = WildcardPattern::parse(constraint).ok()?;
    pattern
        .latest_match(versions.iter().map(AsRef::as_ref))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const VERSIONS: &[&str] = &[
        "1.0.0", "1.0.1", "1.1.0", "2.0.0", "2.1.0", "2.3.0", "2.3.1", "2.3.10", "2.4.0",
        "3.0.0", "10.0.0",
    ];

    #[rstest]
    #[case("2.3.*", Some("2.3.10"))]
    #[case("2.*.*", Some("2.4.0"))]
    #[case("1.*.*", Some("1.1.0"))]
    #[case("10.*.*", Some("10.0.0"))]
    #[case("*.*.*", Some("10.0.0"))]
    #[case("5.*.*", None)] // no major 5
    #[case("2.5.*", None)] // no minor 5 under major 2
    fn match_latest_returns_highest_matching_version(
        #[case] constraint: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            match_latest(VERSIONS, constraint),
            expected.map(|s| s.to_string())
        );
    }

    #[test]
    fn match_latest_returns_none_for_empty_versions() {
        let versions: Vec<String> = vec![];
        assert_eq!(match_latest(&versions, "1.*.*"), None);
    }

    #[test]
    fn match_latest_orders_numerically_not_lexically() {
        let versions = ["2.3.1", "2.3.10", "2.3.2", "2.3.9"];
        assert_eq!(match_latest(&versions, "2.3.*"), Some("2.3.10".to_string()));
    }

    #[rstest]
    #[case("8.*.*", Some("8.57.0"))]
    #[case("9.0.*", Some("9.0.0"))]
    #[case("9.1.*", Some("9.1.1"))]
    #[case("9.1.0", Some("9.1.0"))] // exact pattern without wildcards
    fn match_latest_handles_real_world_versions(
        #[case] constraint: &str,
        #[case] expected: Option<&str>,
    ) {
        let versions = ["8.55.0", "8.56.0", "8.57.0", "9.0.0", "9.1.0", "9.1.1"];
        assert_eq!(
            match_latest(&versions, constraint),
            expected.map(|s| s.to_string())
        );
    }

    #[test]
    fn match_latest_requires_equal_segment_count() {
        let versions = ["1.0", "1.0.0", "1.0.1", "1.1", "1.1.0"];

        assert_eq!(match_latest(&versions, "1.0.*"), Some("1.0.1".to_string()));
        assert_eq!(match_latest(&versions, "1.1.*"), Some("1.1.0".to_string()));
        assert_eq!(match_latest(&["2.3.1.5"], "2.3.*"), None);
        assert_eq!(match_latest(&["2.3.1"], "2.*"), None);
    }

    #[test]
    fn match_latest_ignores_prerelease_versions() {
        let versions = ["2.3.1", "2.3.2-beta.1", "2.3.2-rc.0"];
        assert_eq!(match_latest(&versions, "2.3.*"), Some("2.3.1".to_string()));
    }

    #[test]
    fn match_latest_treats_dot_as_literal_separator() {
        assert_eq!(match_latest(&["2x3x4"], "2.3.*"), None);
    }

    #[rstest]
    #[case("2.x.*", "x")]
    #[case("^2.3.*", "^2")]
    #[case("2..*", "")]
    fn parse_rejects_malformed_segments(#[case] constraint: &str, #[case] segment: &str) {
        let err = WildcardPattern::parse(constraint).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::Malformed {
                constraint: constraint.to_string(),
                segment: segment.to_string(),
            }
        );
        assert_eq!(match_latest(VERSIONS, constraint), None);
    }
}
