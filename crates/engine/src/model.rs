use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single field of a loaded record.
///
/// Loaders produce exactly these three shapes; everything downstream operates
/// on the string projection (`raw_display`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}

impl FieldValue {
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return FieldValue::Null;
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            return FieldValue::Number(num);
        }

        FieldValue::Text(trimmed.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// String cast used for scoring and display. Fractionless numbers print
    /// without a decimal point so `1000` and `1000.0` compare equal.
    pub fn raw_display(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }
}

/// A pre-loaded table: ordered column names plus rows aligned with them.
/// Row identity is the row index; rows are immutable once loaded.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<FieldValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Field at (row, column index). Rows shorter than the header read as Null.
    pub fn value(&self, row: usize, col: usize) -> &FieldValue {
        static NULL: FieldValue = FieldValue::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL)
    }
}

// ---------------------------------------------------------------------------
// Per-column statistics
// ---------------------------------------------------------------------------

/// One duplicated value and how many rows carry it.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateValueCount {
    pub value: String,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Distinct non-missing values (raw string casts).
    pub distinct: usize,
    pub missing: usize,
    /// Rows whose normalized value is shared with at least one other row.
    pub duplicates: usize,
    /// Most frequent duplicated values, largest group first (up to 5).
    pub top_duplicates: Vec<DuplicateValueCount>,
}

// ---------------------------------------------------------------------------
// Column-pair similarity
// ---------------------------------------------------------------------------

/// Mean fuzzy similarity for one unordered column pair. Only defined pairs
/// (at least one row with both values present) are emitted.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPairScore {
    pub left: String,
    pub right: String,
    pub mean_score: f64,
    pub pair_count: usize,
}

// ---------------------------------------------------------------------------
// Name clusters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct NameMatch {
    pub name: String,
    pub score: u8,
}

/// An anchor name and the later names scored above the threshold against it.
/// Edges are not transitively closed.
#[derive(Debug, Clone, Serialize)]
pub struct NameCluster {
    pub anchor: String,
    pub matches: Vec<NameMatch>,
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// Rows sharing one composite key, keyed group of size >= 2.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    pub key: String,
    pub rows: Vec<usize>,
}

/// Total, disjoint split of all row ids by composite-key multiplicity.
#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    pub unique: Vec<usize>,
    pub duplicate: Vec<usize>,
    pub groups: Vec<DuplicateGroup>,
}

// ---------------------------------------------------------------------------
// Degraded products
// ---------------------------------------------------------------------------

/// A derived product that could not be computed. Recorded alongside the
/// successful results; never fails the run.
#[derive(Debug, Clone, Serialize)]
pub struct Omission {
    pub product: String,
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_rows: usize,
    pub unique_rows: usize,
    pub duplicate_rows: usize,
    pub duplicate_groups: usize,
    pub clustered_anchors: usize,
    pub defined_pairs: usize,
    pub omitted_pairs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
    pub rows_analyzed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub meta: AnalysisMeta,
    pub summary: AnalysisSummary,
    pub column_stats: Vec<ColumnStats>,
    pub similarity: Vec<ColumnPairScore>,
    pub clusters: Vec<NameCluster>,
    pub partition: Partition,
    pub omissions: Vec<Omission>,
}

impl AnalysisResult {
    /// Symmetric lookup into the column-pair scores: `(a, b)` and `(b, a)`
    /// resolve to the same mean. None when the pair was omitted or unknown.
    pub fn pair_score(&self, a: &str, b: &str) -> Option<f64> {
        self.similarity
            .iter()
            .find(|p| (p.left == a && p.right == b) || (p.left == b && p.right == a))
            .map(|p| p.mean_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_shapes() {
        assert_eq!(FieldValue::from_input(""), FieldValue::Null);
        assert_eq!(FieldValue::from_input("   "), FieldValue::Null);
        assert_eq!(FieldValue::from_input("42"), FieldValue::Number(42.0));
        assert_eq!(FieldValue::from_input("-3.5"), FieldValue::Number(-3.5));
        assert_eq!(
            FieldValue::from_input(" Acme Inc "),
            FieldValue::Text("Acme Inc".into())
        );
    }

    #[test]
    fn raw_display_numbers() {
        assert_eq!(FieldValue::Number(1000.0).raw_display(), "1000");
        assert_eq!(FieldValue::Number(3.25).raw_display(), "3.25");
        assert_eq!(FieldValue::Null.raw_display(), "");
    }

    #[test]
    fn short_rows_read_as_null() {
        let mut table = Table::new(vec!["a".into(), "b".into()]);
        table.rows.push(vec![FieldValue::Text("x".into())]);
        assert_eq!(table.value(0, 0), &FieldValue::Text("x".into()));
        assert!(table.value(0, 1).is_null());
        assert!(table.value(9, 0).is_null());
    }
}
