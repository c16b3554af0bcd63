use serde::Deserialize;

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    pub source: SourceConfig,
    pub columns: ColumnsConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Data file, resolved relative to the config file's directory.
    pub file: String,
    /// Worksheet name for Excel sources; defaults to the first sheet.
    #[serde(default)]
    pub sheet: Option<String>,
}

// ---------------------------------------------------------------------------
// Column selection
// ---------------------------------------------------------------------------

/// Column selection is by name. Positional spreadsheet labels (A, B, AL, ...)
/// belong to whoever writes the config, not to the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    /// Composite-key columns, in key order.
    pub key: Vec<String>,
    /// Columns covered by per-column statistics and the similarity matrix.
    #[serde(default)]
    pub analyze: Vec<String>,
    /// Column for near-duplicate name clustering; omit to skip clustering.
    #[serde(default)]
    pub cluster: Option<String>,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// A name-cluster edge is kept when its score is strictly above this.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Only the first `anchor_cap` unique names initiate comparisons.
    #[serde(default = "default_anchor_cap")]
    pub anchor_cap: usize,
}

fn default_threshold() -> u8 {
    85
}

fn default_anchor_cap() -> usize {
    100
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            anchor_cap: default_anchor_cap(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub xlsx: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AnalysisConfig {
    pub fn from_toml(input: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig =
            toml::from_str(input).map_err(|e| AnalysisError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on structurally invalid configs. Column existence is checked
    /// against the table header at run time, once the source is loaded.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.columns.key.is_empty() {
            return Err(AnalysisError::EmptyKeyColumns);
        }

        if self.matching.threshold > 100 {
            return Err(AnalysisError::ConfigValidation(format!(
                "matching.threshold must be at most 100, got {}",
                self.matching.threshold
            )));
        }

        if self.matching.anchor_cap == 0 {
            return Err(AnalysisError::ConfigValidation(
                "matching.anchor_cap must be at least 1".into(),
            ));
        }

        if self.source.file.is_empty() {
            return Err(AnalysisError::ConfigValidation(
                "source.file must not be empty".into(),
            ));
        }

        Ok(())
    }
}
