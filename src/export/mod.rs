//! Export module for the expense ledger
//!
//! Provides ledger export in multiple formats:
//! - CSV: the flat `Amount,Expense,Date,Category` file (default)
//! - JSON: machine-readable snapshot including balance and limit
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;

pub use self::csv::{export_ledger_csv, CSV_HEADER};
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Flat CSV rows (entries only)
    #[default]
    Csv,
    /// JSON snapshot (entries, balance and limit)
    Json,
    /// YAML snapshot (entries, balance and limit)
    Yaml,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Write the ledger in `format` to any writer
pub fn export_ledger<W: Write>(ledger: &Ledger, writer: W, format: ExportFormat) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_ledger_csv(ledger, writer),
        ExportFormat::Json => export_ledger_json(ledger, writer, true),
        ExportFormat::Yaml => export_ledger_yaml(ledger, writer),
    }
}

/// Write the ledger to `output`, replacing any existing file
///
/// The file handle is released on every path; a failure partway through
/// leaves a partial file but never touches the ledger.
pub fn export_to_path(ledger: &Ledger, output: &Path, format: ExportFormat) -> LedgerResult<()> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export_ledger(ledger, &mut writer, format)?;

    writer.flush().map_err(|e| {
        LedgerError::Export(format!("Failed to write file {}: {}", output.display(), e))
    })?;

    info!(
        path = %output.display(),
        %format,
        entries = ledger.len(),
        "ledger exported"
    );

    Ok(())
}
