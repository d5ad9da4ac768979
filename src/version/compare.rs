//! Dot-separated numeric version comparison

use std::cmp::Ordering;

/// Compare two dot-separated numeric versions segment by segment.
///
/// Missing trailing segments count as `0`, so `1.0` and `1.0.0` are equal.
/// Segments are compared by numeric value with no upper bound on magnitude.
/// A segment that is empty or not made of ASCII digits counts as `0`.
///
/// Examples:
/// - "1.0.0" vs "1.0.1" -> Less
/// - "2.3.10" vs "2.3.9" -> Greater
/// - "1" vs "1.0.0" -> Equal
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut a_parts = a.split('.').map(segment_value);
    let mut b_parts = b.split('.').map(segment_value);

    loop {
        let ordering = match (a_parts.next(), b_parts.next()) {
            (None, None) => return Ordering::Equal,
            (Some(a_part), None) => compare_segments(a_part, ""),
            (None, Some(b_part)) => compare_segments("", b_part),
            (Some(a_part), Some(b_part)) => compare_segments(a_part, b_part),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Reduce a segment to its significant digits; `""` stands for zero.
fn segment_value(segment: &str) -> &str {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return "";
    }
    segment.trim_start_matches('0')
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", "1.0.1", Ordering::Less)]
    #[case("1.0.1", "1.0.0", Ordering::Greater)]
    #[case("1.0.0", "1.0.0", Ordering::Equal)]
    #[case("2.0.0", "1.9.9", Ordering::Greater)] // major wins
    #[case("1.1.9", "1.2.0", Ordering::Less)] // minor wins
    #[case("2.3.10", "2.3.9", Ordering::Greater)] // numeric, not lexical
    fn compare_versions_orders_by_segment(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), expected);
    }

    #[rstest]
    #[case("1.0", "1.0.0", Ordering::Equal)]
    #[case("1.0.0", "1.0", Ordering::Equal)]
    #[case("1", "1.0.0", Ordering::Equal)]
    #[case("1.0.0", "1.0.0.1", Ordering::Less)]
    #[case("1.0.0.1", "1.0.0", Ordering::Greater)]
    fn compare_versions_pads_missing_segments_with_zero(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), expected);
    }

    #[test]
    fn compare_versions_ignores_leading_zeros() {
        assert_eq!(compare_versions("1.01.0", "1.1.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.00", "1"), Ordering::Equal);
    }

    #[test]
    fn compare_versions_handles_segments_beyond_u64() {
        assert_eq!(
            compare_versions("1.99999999999999999999999", "1.100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn compare_versions_treats_non_numeric_segment_as_zero() {
        assert_eq!(compare_versions("1.x", "1.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0-beta", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn compare_versions_is_reflexive_and_antisymmetric() {
        let versions = ["0.1", "1.0.0", "1.0", "2.3.10", "10.0.0", "1.0.0.1"];

        for a in versions {
            assert_eq!(compare_versions(a, a), Ordering::Equal);
            for b in versions {
                assert_eq!(compare_versions(a, b), compare_versions(b, a).reverse());
            }
        }
    }
}
