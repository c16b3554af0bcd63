use std::collections::BTreeMap;

use crate::error::AnalysisError;
use crate::model::Table;
use crate::normalize::normalize;

/// Joins normalized values inside a composite key. Normalized content is
/// alphanumeric + whitespace only, so the unit separator can never collide.
pub const KEY_SEPARATOR: char = '\u{1f}';

/// Resolve column names against the table header. Unknown names are collected
/// so the error reports every missing column at once.
pub fn resolve_columns(table: &Table, names: &[String]) -> Result<Vec<usize>, AnalysisError> {
    let mut indexes = Vec::with_capacity(names.len());
    let mut missing = Vec::new();
    for name in names {
        match table.column_index(name) {
            Some(i) => indexes.push(i),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(AnalysisError::UnknownColumns { columns: missing });
    }
    Ok(indexes)
}

/// Composite key for every row: normalized key-column values joined in the
/// configured column order. Column order is part of the key — reordering the
/// key columns yields different keys for the same rows.
pub fn composite_keys(table: &Table, key_columns: &[String]) -> Result<Vec<String>, AnalysisError> {
    if key_columns.is_empty() {
        return Err(AnalysisError::EmptyKeyColumns);
    }
    let indexes = resolve_columns(table, key_columns)?;

    let mut keys = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let parts: Vec<String> = indexes
            .iter()
            .map(|&col| normalize(table.value(row, col)))
            .collect();
        keys.push(parts.join(&KEY_SEPARATOR.to_string()));
    }
    Ok(keys)
}

/// Group row ids by composite key.
pub fn group_by_key(
    table: &Table,
    key_columns: &[String],
) -> Result<BTreeMap<String, Vec<usize>>, AnalysisError> {
    let keys = composite_keys(table, key_columns)?;
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (row, key) in keys.into_iter().enumerate() {
        groups.entry(key).or_default().push(row);
    }
    Ok(groups)
}

/// Group row ids by the normalized value of a single column. Missing values
/// normalize to "" and therefore group together.
pub fn normalized_value_groups(
    table: &Table,
    column: &str,
) -> Result<BTreeMap<String, Vec<usize>>, AnalysisError> {
    let col = resolve_columns(table, std::slice::from_ref(&column.to_string()))?[0];

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..table.row_count() {
        groups
            .entry(normalize(table.value(row, col)))
            .or_default()
            .push(row);
    }
    Ok(groups)
}

/// Every row whose normalized value in `column` is shared by at least one
/// other row (keep-all, in row order).
pub fn duplicates_for_column(table: &Table, column: &str) -> Result<Vec<usize>, AnalysisError> {
    let mut rows: Vec<usize> = normalized_value_groups(table, column)?
        .into_values()
        .filter(|rows| rows.len() >= 2)
        .flatten()
        .collect();
    rows.sort_unstable();
    Ok(rows)
}
