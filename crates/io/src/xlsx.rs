// Excel table import (xlsx, xls, xlsb, ods)
//
// One-way conversion: the sheet is read into the engine's table model, first
// row as header. Typed cells keep their type; dates come through as their
// serial number.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use dupescan_engine::model::{FieldValue, Table};

/// Import one worksheet as a table. `sheet` selects by name; `None` takes the
/// first sheet in the workbook.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Table, String> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| format!("failed to open Excel file: {e}"))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("Excel file contains no sheets".to_string());
    }

    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(format!(
                    "sheet {name:?} not found (available: {})",
                    sheet_names.join(", ")
                ));
            }
            name.to_string()
        }
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| format!("failed to read sheet '{sheet_name}': {e}"))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(cells) => cells,
        None => return Err(format!("sheet '{sheet_name}' is empty")),
    };

    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell_to_value(cell).raw_display().trim().to_string())
        .collect();
    let width = columns.len();

    let mut table = Table::new(columns);
    for cells in rows {
        let mut row: Vec<FieldValue> = cells.iter().map(cell_to_value).collect();
        row.resize(width, FieldValue::Null);
        table.rows.push(row);
    }

    Ok(table)
}

fn cell_to_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty => FieldValue::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                FieldValue::Null
            } else {
                FieldValue::Text(trimmed.to_string())
            }
        }
        Data::Float(n) => FieldValue::Number(*n),
        Data::Int(n) => FieldValue::Number(*n as f64),
        Data::Bool(b) => FieldValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        // Serial number; good enough for equality and similarity over casts
        Data::DateTime(dt) => FieldValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => FieldValue::Text(s.clone()),
        Data::Error(_) => FieldValue::Null,
    }
}
