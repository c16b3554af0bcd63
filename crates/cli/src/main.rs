// dupescan CLI - config-driven duplicate-record analysis

mod exit_codes;
mod inspect;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_INVALID_CONFIG, EXIT_RUNTIME, EXIT_SOURCE, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "dupescan")]
#[command(about = "Duplicate-record analysis for tabular company data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an analysis from a TOML config file
    #[command(after_help = "\
Examples:
  dupescan run dedup.toml
  dupescan run dedup.toml --json
  dupescan run dedup.toml --output analysis.json --report analysis.xlsx
  dupescan run dedup.toml --fail-on-duplicates")]
    Run {
        /// Path to the analysis config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file (overrides [output].json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the Excel report workbook (overrides [output].xlsx)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Exit nonzero when the duplicate partition is non-empty
        #[arg(long)]
        fail_on_duplicates: bool,
    },

    /// Validate an analysis config without running
    #[command(after_help = "\
Examples:
  dupescan validate dedup.toml")]
    Validate {
        /// Path to the analysis config file
        config: PathBuf,
    },

    /// Print the structure of a data file (columns, types, missing values)
    #[command(after_help = "\
Examples:
  dupescan inspect companies.csv
  dupescan inspect companies.xlsx --sheet Sheet1 --sample 10")]
    Inspect {
        /// Data file (csv, tsv, xlsx, xls, xlsb, ods)
        input: PathBuf,

        /// Worksheet name (Excel sources only)
        #[arg(long)]
        sheet: Option<String>,

        /// Number of sample rows to print
        #[arg(long, default_value_t = 5)]
        sample: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            json,
            output,
            report,
            fail_on_duplicates,
        } => run::cmd_run(config, json, output, report, fail_on_duplicates),
        Commands::Validate { config } => run::cmd_validate(config),
        Commands::Inspect {
            input,
            sheet,
            sample,
        } => inspect::cmd_inspect(input, sheet.as_deref(), sample),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self { code: EXIT_SOURCE, message: msg.into(), hint: None }
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_RUNTIME, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
