//! YAML Export functionality
//!
//! Exports the ledger to YAML for a human-readable record of the session.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    writeln!(writer, "# Expense Ledger Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
