use crate::error::AnalysisError;
use crate::key::resolve_columns;
use crate::model::{ColumnPairScore, Omission, Table};
use crate::similarity::ratio;

/// Mean pairwise similarity for every unordered pair of the given columns,
/// in configured order (i < j).
///
/// Rows where either side is missing are dropped from that pair. Scores use
/// the raw string casts, not normalized text. A pair with zero aligned rows
/// is omitted from the output and recorded as a degraded product.
pub fn column_pair_scores(
    table: &Table,
    columns: &[String],
) -> Result<(Vec<ColumnPairScore>, Vec<Omission>), AnalysisError> {
    let indexes = resolve_columns(table, columns)?;

    let mut scores = Vec::new();
    let mut omissions = Vec::new();

    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            let mut total: u64 = 0;
            let mut count: usize = 0;

            for row in 0..table.row_count() {
                let a = table.value(row, indexes[i]);
                let b = table.value(row, indexes[j]);
                if a.is_null() || b.is_null() {
                    continue;
                }
                total += ratio(&a.raw_display(), &b.raw_display()) as u64;
                count += 1;
            }

            if count == 0 {
                omissions.push(Omission {
                    product: "similarity".into(),
                    detail: format!(
                        "no rows with both '{}' and '{}' present",
                        columns[i], columns[j]
                    ),
                });
                continue;
            }

            scores.push(ColumnPairScore {
                left: columns[i].clone(),
                right: columns[j].clone(),
                mean_score: total as f64 / count as f64,
                pair_count: count,
            });
        }
    }

    Ok((scores, omissions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn table(columns: &[&str], rows: Vec<Vec<&str>>) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.rows.push(row.iter().map(|v| FieldValue::from_input(v)).collect());
        }
        t
    }

    #[test]
    fn mean_over_aligned_rows() {
        let t = table(
            &["a", "b"],
            vec![vec!["same", "same"], vec!["same", "same"]],
        );
        let (scores, omissions) =
            column_pair_scores(&t, &["a".into(), "b".into()]).unwrap();
        assert!(omissions.is_empty());
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].mean_score, 100.0);
        assert_eq!(scores[0].pair_count, 2);
    }

    #[test]
    fn missing_rows_dropped_from_pair() {
        let t = table(
            &["a", "b"],
            vec![vec!["same", "same"], vec!["same", ""], vec!["", "same"]],
        );
        let (scores, _) = column_pair_scores(&t, &["a".into(), "b".into()]).unwrap();
        assert_eq!(scores[0].pair_count, 1);
    }

    #[test]
    fn no_overlap_omits_pair() {
        let t = table(&["a", "b"], vec![vec!["x", ""], vec!["", "y"]]);
        let (scores, omissions) =
            column_pair_scores(&t, &["a".into(), "b".into()]).unwrap();
        assert!(scores.is_empty());
        assert_eq!(omissions.len(), 1);
        assert!(omissions[0].detail.contains('a') && omissions[0].detail.contains('b'));
    }

    #[test]
    fn three_columns_make_three_pairs() {
        let t = table(
            &["a", "b", "c"],
            vec![vec!["x", "x", "x"]],
        );
        let (scores, _) =
            column_pair_scores(&t, &["a".into(), "b".into(), "c".into()]).unwrap();
        let pairs: Vec<(&str, &str)> = scores
            .iter()
            .map(|p| (p.left.as_str(), p.right.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }
}
