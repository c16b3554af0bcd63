// Excel report workbook for an analysis run.
//
// Presentation snapshot for sharing, not a round-trip format. One sheet per
// product: summary, per-column statistics, column-pair similarity, name
// clusters, and the unique/duplicate row partitions.

use std::path::Path;

use dupescan_engine::model::{AnalysisResult, Table};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

pub fn write_workbook(
    table: &Table,
    result: &AnalysisResult,
    path: &Path,
) -> Result<(), String> {
    build_workbook(table, result, path).map_err(|e| e.to_string())?;
    tracing::info!(path = %path.display(), "report workbook written");
    Ok(())
}

fn build_workbook(table: &Table, result: &AnalysisResult, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_summary(workbook.add_worksheet(), result, &header)?;
    write_column_stats(workbook.add_worksheet(), result, &header)?;
    write_similarity(workbook.add_worksheet(), result, &header)?;
    write_clusters(workbook.add_worksheet(), result, &header)?;
    write_rows(
        workbook.add_worksheet(),
        "Unique Rows",
        table,
        &result.partition.unique,
        &header,
    )?;
    write_rows(
        workbook.add_worksheet(),
        "Duplicate Rows",
        table,
        &result.partition.duplicate,
        &header,
    )?;

    workbook.save(path)
}

fn write_summary(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name("Summary")?;
    sheet.write_string_with_format(0, 0, "Metric", header)?;
    sheet.write_string_with_format(0, 1, "Value", header)?;

    let s = &result.summary;
    let rows: &[(&str, f64)] = &[
        ("Total rows", s.total_rows as f64),
        ("Unique rows", s.unique_rows as f64),
        ("Duplicate rows", s.duplicate_rows as f64),
        ("Duplicate key groups", s.duplicate_groups as f64),
        ("Clustered anchors", s.clustered_anchors as f64),
        ("Column pairs scored", s.defined_pairs as f64),
        ("Column pairs omitted", s.omitted_pairs as f64),
    ];
    for (i, (metric, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *metric)?;
        sheet.write_number(row, 1, *value)?;
    }

    sheet.write_string(rows.len() as u32 + 2, 0, "Run at")?;
    sheet.write_string(rows.len() as u32 + 2, 1, &result.meta.run_at)?;
    Ok(())
}

fn write_column_stats(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name("Column Stats")?;
    for (col, title) in ["Column", "Distinct", "Missing", "Duplicates", "Top duplicated values"]
        .iter()
        .enumerate()
    {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (i, stats) in result.column_stats.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &stats.column)?;
        sheet.write_number(row, 1, stats.distinct as f64)?;
        sheet.write_number(row, 2, stats.missing as f64)?;
        sheet.write_number(row, 3, stats.duplicates as f64)?;

        let examples: Vec<String> = stats
            .top_duplicates
            .iter()
            .map(|d| format!("{} ({})", d.value, d.rows))
            .collect();
        sheet.write_string(row, 4, examples.join(", "))?;
    }
    Ok(())
}

fn write_similarity(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name("Similarity")?;
    for (col, title) in ["Left", "Right", "Mean score", "Pairs"].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (i, pair) in result.similarity.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &pair.left)?;
        sheet.write_string(row, 1, &pair.right)?;
        sheet.write_number(row, 2, pair.mean_score)?;
        sheet.write_number(row, 3, pair.pair_count as f64)?;
    }
    Ok(())
}

fn write_clusters(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name("Name Clusters")?;
    for (col, title) in ["Anchor", "Candidate", "Score"].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    let mut row: u32 = 1;
    for cluster in &result.clusters {
        for m in &cluster.matches {
            sheet.write_string(row, 0, &cluster.anchor)?;
            sheet.write_string(row, 1, &m.name)?;
            sheet.write_number(row, 2, m.score as f64)?;
            row += 1;
        }
    }
    Ok(())
}

/// Full rows for one side of the partition, header first.
fn write_rows(
    sheet: &mut Worksheet,
    name: &str,
    table: &Table,
    row_ids: &[usize],
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(name)?;
    sheet.write_string_with_format(0, 0, "Row", header)?;
    for (col, column) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, (col + 1) as u16, column, header)?;
    }

    for (i, &row_id) in row_ids.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, row_id as f64)?;
        for col in 0..table.columns.len() {
            let value = table.value(row_id, col);
            if !value.is_null() {
                sheet.write_string(row, (col + 1) as u16, value.raw_display())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dupescan_engine::{run, AnalysisConfig};

    #[test]
    fn workbook_written_to_disk() {
        let toml = r#"
name = "report test"

[source]
file = "companies.csv"

[columns]
key = ["name"]
analyze = ["name", "country"]
cluster = "name"
"#;
        let config = AnalysisConfig::from_toml(toml).unwrap();

        let mut table = Table::new(vec!["name".into(), "country".into()]);
        for (name, country) in [("Acme Inc", "US"), ("ACME INC.", "US"), ("Globex", "DE")] {
            table.rows.push(vec![
                dupescan_engine::FieldValue::from_input(name),
                dupescan_engine::FieldValue::from_input(country),
            ]);
        }
        let result = run(&config, &table).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.xlsx");
        write_workbook(&table, &result, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
