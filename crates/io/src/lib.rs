//! `dupescan-io` — file collaborators around the analysis engine.
//!
//! Table loading (CSV/TSV via `csv`, Excel via `calamine`) and report
//! writing (Excel workbook via `rust_xlsxwriter`). The engine never touches
//! files; everything here converts between disk formats and its in-memory
//! `Table` / `AnalysisResult` types.

use std::path::Path;

use dupescan_engine::model::Table;

pub mod csv;
pub mod report;
pub mod xlsx;

/// Load a table, dispatching on the file extension. `sheet` applies to Excel
/// sources only.
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match ext.as_str() {
        "csv" => csv::import(path)?,
        "tsv" => csv::import_tsv(path)?,
        "xlsx" | "xls" | "xlsb" | "ods" => xlsx::import(path, sheet)?,
        other => {
            return Err(format!(
                "unsupported source format: {other:?} (expected csv, tsv, xlsx, xls, xlsb, ods)"
            ))
        }
    };

    tracing::info!(
        rows = table.row_count(),
        columns = table.columns.len(),
        path = %path.display(),
        "table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("companies.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name,country").unwrap();
        writeln!(file, "Acme,US").unwrap();

        let table = load_table(&path, None).unwrap();
        assert_eq!(table.columns, vec!["name", "country"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(load_table(Path::new("data.parquet"), None).is_err());
    }
}
