//! `dupescan inspect` — dataset structure report.

use std::path::PathBuf;

use dupescan_engine::model::{FieldValue, Table};
use dupescan_engine::stats::column_stats;

use crate::CliError;

pub fn cmd_inspect(input: PathBuf, sheet: Option<&str>, sample: usize) -> Result<(), CliError> {
    let table = dupescan_io::load_table(&input, sheet).map_err(CliError::source)?;

    println!("{}", input.display());
    println!("rows:    {}", table.row_count());
    println!("columns: {}", table.columns.len());
    println!();

    println!(
        "{:<32} {:<8} {:>9} {:>9} {:>11}",
        "column", "kind", "distinct", "missing", "duplicates"
    );
    for column in &table.columns {
        let stats = column_stats(&table, column)
            .map_err(|e| CliError::general(e.to_string()))?;
        println!(
            "{:<32} {:<8} {:>9} {:>9} {:>11}",
            column,
            column_kind(&table, column),
            stats.distinct,
            stats.missing,
            stats.duplicates,
        );
    }

    if sample > 0 && table.row_count() > 0 {
        println!();
        println!("first {} row(s):", sample.min(table.row_count()));
        for row in 0..table.row_count().min(sample) {
            let fields: Vec<String> = (0..table.columns.len())
                .map(|col| table.value(row, col).raw_display())
                .collect();
            println!("  {row}: {}", fields.join(" | "));
        }
    }

    Ok(())
}

/// Rough per-column type: every non-missing value numeric, textual, or mixed.
fn column_kind(table: &Table, column: &str) -> &'static str {
    let col = match table.column_index(column) {
        Some(i) => i,
        None => return "unknown",
    };

    let mut numbers = 0usize;
    let mut texts = 0usize;
    for row in 0..table.row_count() {
        match table.value(row, col) {
            FieldValue::Number(_) => numbers += 1,
            FieldValue::Text(_) => texts += 1,
            FieldValue::Null => {}
        }
    }

    match (numbers, texts) {
        (0, 0) => "empty",
        (_, 0) => "number",
        (0, _) => "text",
        _ => "mixed",
    }
}
