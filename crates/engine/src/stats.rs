use std::collections::HashSet;

use crate::error::AnalysisError;
use crate::key::{normalized_value_groups, resolve_columns};
use crate::model::{ColumnStats, DuplicateValueCount, Table};

/// How many duplicated values to surface per column.
const TOP_DUPLICATES: usize = 5;

/// Distinct / missing / duplicate counts for one column, plus the most
/// frequent duplicated values.
pub fn column_stats(table: &Table, column: &str) -> Result<ColumnStats, AnalysisError> {
    let col = resolve_columns(table, std::slice::from_ref(&column.to_string()))?[0];

    let mut distinct: HashSet<String> = HashSet::new();
    let mut missing = 0usize;
    for row in 0..table.row_count() {
        let value = table.value(row, col);
        if value.is_null() {
            missing += 1;
        } else {
            distinct.insert(value.raw_display());
        }
    }

    let mut duplicated: Vec<(String, usize)> = normalized_value_groups(table, column)?
        .into_iter()
        .filter(|(_, rows)| rows.len() >= 2)
        .map(|(value, rows)| (value, rows.len()))
        .collect();
    let duplicates: usize = duplicated.iter().map(|(_, count)| count).sum();

    // Largest groups first; ties resolve alphabetically (BTreeMap order is
    // stable under the sort).
    duplicated.sort_by(|a, b| b.1.cmp(&a.1));
    let top_duplicates = duplicated
        .into_iter()
        .take(TOP_DUPLICATES)
        .map(|(value, rows)| DuplicateValueCount { value, rows })
        .collect();

    Ok(ColumnStats {
        column: column.to_string(),
        distinct: distinct.len(),
        missing,
        duplicates,
        top_duplicates,
    })
}
