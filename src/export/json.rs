//! JSON Export functionality
//!
//! Exports the whole ledger, including balance and limit, as a versioned JSON
//! document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, LedgerSnapshot};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Structured ledger export shared by the JSON and YAML writers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of entries in `ledger`
    pub entry_count: usize,

    pub ledger: LedgerSnapshot,
}

impl LedgerExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entry_count: ledger.len(),
            ledger: ledger.snapshot(),
        }
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let written = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    written.map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_ledger_json() {
        let mut ledger = Ledger::with_capacity(10, Money::from_cents(50000), None);
        ledger
            .add_entry(Money::from_cents(5000), true, "2024-01-01", "food")
            .unwrap();

        let mut output = Vec::new();
        export_ledger_json(&ledger, &mut output, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.entry_count, 1);
        assert_eq!(parsed.ledger, ledger.snapshot());
        assert_eq!(parsed.ledger.balance, Money::from_cents(45000));
    }

    #[test]
    fn test_disabled_limit_serializes_as_null() {
        let ledger = Ledger::with_capacity(10, Money::zero(), None);

        let mut output = Vec::new();
        export_ledger_json(&ledger, &mut output, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["ledger"]["limit"].is_null());
    }
}
