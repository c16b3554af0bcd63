use std::collections::HashSet;

use crate::error::AnalysisError;
use crate::key::resolve_columns;
use crate::model::{NameCluster, NameMatch, Table};
use crate::similarity::ratio;

/// Unique, non-missing raw values of `column`, in first-encounter order.
pub fn unique_values(table: &Table, column: &str) -> Result<Vec<String>, AnalysisError> {
    let col = resolve_columns(table, std::slice::from_ref(&column.to_string()))?[0];

    let mut seen: HashSet<String> = HashSet::new();
    let mut values = Vec::new();
    for row in 0..table.row_count() {
        let value = table.value(row, col);
        if value.is_null() {
            continue;
        }
        let raw = value.raw_display();
        if seen.insert(raw.clone()) {
            values.push(raw);
        }
    }
    Ok(values)
}

/// Flag near-duplicate names with a windowed all-pairs scan.
///
/// Only the first `anchor_cap` names initiate comparisons; every anchor is
/// scored against all subsequent names in the full sequence, and an edge is
/// kept when the score is strictly above `threshold`. Anchors with no edge
/// are dropped from the output.
///
/// The scan is asymmetric and the edges are not transitively closed: two
/// names that both match the same anchor are not merged with each other. A
/// connected-components pass over the edge list is the natural extension if
/// transitive clusters are ever needed.
pub fn build_clusters(names: &[String], threshold: u8, anchor_cap: usize) -> Vec<NameCluster> {
    let mut clusters = Vec::new();

    for (i, anchor) in names.iter().take(anchor_cap).enumerate() {
        let mut matches = Vec::new();
        for candidate in &names[i + 1..] {
            let score = ratio(anchor, candidate);
            if score > threshold {
                matches.push(NameMatch {
                    name: candidate.clone(),
                    score,
                });
            }
        }
        if !matches.is_empty() {
            clusters.push(NameCluster {
                anchor: anchor.clone(),
                matches,
            });
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn unique_values_keep_encounter_order() {
        let mut t = Table::new(vec!["name".into()]);
        for v in ["Globex", "Acme", "", "Globex", "Initech"] {
            t.rows.push(vec![FieldValue::from_input(v)]);
        }
        assert_eq!(
            unique_values(&t, "name").unwrap(),
            vec!["Globex", "Acme", "Initech"]
        );
    }

    #[test]
    fn near_duplicates_matched() {
        let clusters = build_clusters(
            &names(&["Acme Incorporated", "Acme Incorporatedd", "Globex"]),
            85,
            100,
        );
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].anchor, "Acme Incorporated");
        assert_eq!(clusters[0].matches.len(), 1);
        assert_eq!(clusters[0].matches[0].name, "Acme Incorporatedd");
    }

    #[test]
    fn unrelated_names_make_no_edge() {
        let clusters = build_clusters(&names(&["Acme Corp", "Totally Different Co"]), 85, 100);
        assert!(clusters.is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        // "abcde" vs "abcdX": distance 1 over length 5 -> exactly 80.
        assert_eq!(ratio("abcde", "abcdX"), 80);
        assert!(build_clusters(&names(&["abcde", "abcdX"]), 80, 100).is_empty());
        assert_eq!(build_clusters(&names(&["abcde", "abcdX"]), 79, 100).len(), 1);
    }

    #[test]
    fn anchors_beyond_cap_never_initiate() {
        // Two identical names placed after the cap: only capped anchors scan,
        // but they scan the whole tail.
        let mut all = Vec::new();
        for i in 0..4 {
            all.push(format!("company number {i}"));
        }
        all.push("Zyxwv Holdings".into());
        all.push("Zyxwv Holdingss".into());

        let capped = build_clusters(&all, 85, 4);
        // The pair sits at positions 4 and 5; neither is an anchor.
        assert!(capped.iter().all(|c| c.anchor != "Zyxwv Holdings"));

        let uncapped = build_clusters(&all, 85, all.len());
        assert!(uncapped.iter().any(|c| c.anchor == "Zyxwv Holdings"));
    }

    #[test]
    fn raising_threshold_never_adds_edges() {
        let input = names(&["acme inc", "acme incx", "acme i", "globex"]);
        let edge_count = |t: u8| -> usize {
            build_clusters(&input, t, 100)
                .iter()
                .map(|c| c.matches.len())
                .sum()
        };
        let mut previous = edge_count(0);
        for t in 1..=100 {
            let current = edge_count(t);
            assert!(current <= previous);
            previous = current;
        }
    }
}
