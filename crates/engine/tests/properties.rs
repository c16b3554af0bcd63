//! Property tests for the analysis invariants.

use proptest::prelude::*;

use dupescan_engine::clusters::build_clusters;
use dupescan_engine::model::FieldValue;
use dupescan_engine::normalize::{normalize, normalize_str};
use dupescan_engine::partition::partition;
use dupescan_engine::similarity::{ratio, ratio_values};

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize_str(&s);
        prop_assert_eq!(normalize_str(&once), once);
    }

    #[test]
    fn normalized_text_is_alphanumeric_and_trimmed(s in ".*") {
        let out = normalize_str(&s);
        prop_assert!(out.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn ratio_is_symmetric(a in ".*", b in ".*") {
        prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
    }

    #[test]
    fn ratio_of_equal_strings_is_100(a in ".*") {
        prop_assert_eq!(ratio(&a, &a), 100);
    }

    #[test]
    fn ratio_stays_in_range(a in ".*", b in ".*") {
        prop_assert!(ratio(&a, &b) <= 100);
    }

    #[test]
    fn missing_operand_scores_zero(s in ".*") {
        let value = FieldValue::Text(s);
        prop_assert_eq!(ratio_values(&FieldValue::Null, &value), 0);
        prop_assert_eq!(ratio_values(&value, &FieldValue::Null), 0);
    }

    #[test]
    fn partition_is_total_and_disjoint(
        keys in proptest::collection::vec("[a-c]{0,3}", 0..40)
    ) {
        let p = partition(&keys);
        prop_assert_eq!(p.unique.len() + p.duplicate.len(), keys.len());
        for row in &p.unique {
            prop_assert!(!p.duplicate.contains(row));
        }
        // Every duplicate key really does occur at least twice.
        for group in &p.groups {
            prop_assert!(group.rows.len() >= 2);
        }
    }

    #[test]
    fn raising_threshold_never_adds_edges(
        names in proptest::collection::vec("[a-d]{0,6}", 0..15),
        low in 0u8..100,
        bump in 1u8..50,
    ) {
        let high = low.saturating_add(bump).min(100);
        let edges = |t: u8| -> usize {
            build_clusters(&names, t, 100).iter().map(|c| c.matches.len()).sum()
        };
        prop_assert!(edges(high) <= edges(low));
    }

}

#[test]
fn missing_field_normalizes_to_empty() {
    assert_eq!(normalize(&FieldValue::Null), "");
}
