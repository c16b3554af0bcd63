//! `dupescan-engine` — duplicate-record analysis engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns structured results.
//! No CLI or IO dependencies.

pub mod clusters;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod matrix;
pub mod model;
pub mod normalize;
pub mod partition;
pub mod similarity;
pub mod stats;
pub mod summary;

pub use config::AnalysisConfig;
pub use engine::run;
pub use error::AnalysisError;
pub use model::{AnalysisResult, FieldValue, Table};
