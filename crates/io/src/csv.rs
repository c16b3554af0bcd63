// CSV/TSV table import

use std::io::Read;
use std::path::Path;

use dupescan_engine::model::{FieldValue, Table};

pub fn import(path: &Path) -> Result<Table, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

pub fn import_tsv(path: &Path) -> Result<Table, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, b'\t')
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // Score: (number of lines with same field count as line 1) * field_count
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for Excel-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Parse delimited text into a table. The first record is the header; every
/// later record becomes a row, short rows padded with nulls.
fn import_from_string(content: &str, delimiter: u8) -> Result<Table, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| e.to_string())?,
        None => return Err("source contains no header row".to_string()),
    };
    let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
    let width = columns.len();

    let mut table = Table::new(columns);
    for result in records {
        let record = result.map_err(|e| e.to_string())?;
        let mut row: Vec<FieldValue> =
            record.iter().map(FieldValue::from_input).collect();
        row.resize(width, FieldValue::Null);
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_typed_rows() {
        let table = import_from_string(
            "name,year_founded,note\nAcme Inc,1999,first\nGlobex,,\n",
            b',',
        )
        .unwrap();
        assert_eq!(table.columns, vec!["name", "year_founded", "note"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, 0), &FieldValue::Text("Acme Inc".into()));
        assert_eq!(table.value(0, 1), &FieldValue::Number(1999.0));
        assert!(table.value(1, 1).is_null());
        assert!(table.value(1, 2).is_null());
    }

    #[test]
    fn short_rows_padded_with_null() {
        let table = import_from_string("a,b,c\nonly\n", b',').unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert!(table.value(0, 2).is_null());
    }

    #[test]
    fn sniffs_semicolons() {
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter("a\tb\n1\t2\n"), b'\t');
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(import_from_string("", b',').is_err());
    }
}
