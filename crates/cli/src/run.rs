//! `dupescan run` / `dupescan validate` — config-driven analysis.

use std::path::{Path, PathBuf};

use dupescan_engine::{AnalysisConfig, AnalysisError};

use crate::exit_codes::EXIT_DUPLICATES_FOUND;
use crate::CliError;

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    report_file: Option<PathBuf>,
    fail_on_duplicates: bool,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::config(format!("cannot read config: {e}")))?;
    let config = AnalysisConfig::from_toml(&config_str).map_err(engine_err)?;

    // Resolve the source path relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let source_path = base_dir.join(&config.source.file);

    let table = dupescan_io::load_table(&source_path, config.source.sheet.as_deref())
        .map_err(|e| {
            CliError::source(format!("cannot load {}: {e}", source_path.display()))
        })?;

    let result = dupescan_engine::run(&config, &table).map_err(engine_err)?;

    // JSON output
    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;

    let json_target = output_file.or_else(|| {
        config.output.json.as_ref().map(|f| base_dir.join(f))
    });
    if let Some(ref path) = json_target {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::runtime(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }
    if json_output {
        println!("{json_str}");
    }

    // Excel report workbook
    let report_target = report_file.or_else(|| {
        config.output.xlsx.as_ref().map(|f| base_dir.join(f))
    });
    if let Some(ref path) = report_target {
        dupescan_io::report::write_workbook(&table, &result, path)
            .map_err(CliError::runtime)?;
        eprintln!("wrote {}", path.display());
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{}: {} rows — {} unique, {} duplicates in {} key groups, {} similar-name anchors",
        config.name,
        s.total_rows,
        s.unique_rows,
        s.duplicate_rows,
        s.duplicate_groups,
        s.clustered_anchors,
    );
    for omission in &result.omissions {
        eprintln!("note: {} omitted — {}", omission.product, omission.detail);
    }

    if fail_on_duplicates && !result.partition.duplicate.is_empty() {
        return Err(CliError {
            code: EXIT_DUPLICATES_FOUND,
            message: format!("{} duplicate rows found", s.duplicate_rows),
            hint: None,
        });
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::config(format!("cannot read config: {e}")))?;

    match AnalysisConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' with {} key column(s), {} analyzed column(s), threshold {}",
                config.name,
                config.columns.key.len(),
                config.columns.analyze.len(),
                config.matching.threshold,
            );
            Ok(())
        }
        Err(e) => Err(engine_err(e)),
    }
}

/// Engine errors at this boundary are configuration problems (parse,
/// validation, unknown columns) and share one exit code.
fn engine_err(e: AnalysisError) -> CliError {
    match &e {
        AnalysisError::UnknownColumns { .. } => CliError::config(e.to_string())
            .with_hint("run `dupescan inspect` on the source to list its columns"),
        _ => CliError::config(e.to_string()),
    }
}
