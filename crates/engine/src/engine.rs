use crate::clusters::{build_clusters, unique_values};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::key::{composite_keys, resolve_columns};
use crate::matrix::column_pair_scores;
use crate::model::{AnalysisMeta, AnalysisResult, Table};
use crate::partition::partition;
use crate::stats::column_stats;
use crate::summary::compute_summary;

/// Run the full analysis per config. Returns per-column statistics, the
/// column-pair similarity scores, name clusters, and the unique/duplicate
/// partition, with degraded products listed in `omissions`.
pub fn run(config: &AnalysisConfig, table: &Table) -> Result<AnalysisResult, AnalysisError> {
    config.validate()?;
    check_columns(config, table)?;

    let mut stats = Vec::with_capacity(config.columns.analyze.len());
    for column in &config.columns.analyze {
        stats.push(column_stats(table, column)?);
    }

    let (similarity, omissions) = column_pair_scores(table, &config.columns.analyze)?;

    let clusters = match &config.columns.cluster {
        Some(column) => {
            let names = unique_values(table, column)?;
            build_clusters(
                &names,
                config.matching.threshold,
                config.matching.anchor_cap,
            )
        }
        None => Vec::new(),
    };

    let keys = composite_keys(table, &config.columns.key)?;
    let partition = partition(&keys);

    let summary = compute_summary(
        table.row_count(),
        &partition,
        &clusters,
        &similarity,
        &omissions,
    );

    Ok(AnalysisResult {
        meta: AnalysisMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            rows_analyzed: table.row_count(),
        },
        summary,
        column_stats: stats,
        similarity,
        clusters,
        partition,
        omissions,
    })
}

/// Resolve every configured column against the table header before any
/// computation starts, reporting all missing names in one error.
fn check_columns(config: &AnalysisConfig, table: &Table) -> Result<(), AnalysisError> {
    let mut referenced: Vec<String> = Vec::new();
    referenced.extend(config.columns.key.iter().cloned());
    for column in &config.columns.analyze {
        if !referenced.contains(column) {
            referenced.push(column.clone());
        }
    }
    if let Some(column) = &config.columns.cluster {
        if !referenced.contains(column) {
            referenced.push(column.clone());
        }
    }
    resolve_columns(table, &referenced).map(|_| ())
}
