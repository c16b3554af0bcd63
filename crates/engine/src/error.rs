use std::fmt;

#[derive(Debug)]
pub enum AnalysisError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (bad threshold, missing section, etc.).
    ConfigValidation(String),
    /// Grouping by an empty key-column list is undefined.
    EmptyKeyColumns,
    /// Referenced columns absent from the loaded table's header.
    UnknownColumns { columns: Vec<String> },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::EmptyKeyColumns => write!(f, "key-column list is empty"),
            Self::UnknownColumns { columns } => {
                write!(f, "columns not found in table: {}", columns.join(", "))
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
