//! Session controller
//!
//! Executes validated [`Action`]s against a ledger. Nothing here reads input,
//! so a session can be driven by the interactive loop, a script or a test.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::command::Action;
use crate::audit::{AuditEntry, AuditLogger};
use crate::display;
use crate::error::LedgerResult;
use crate::export::{self, ExportFormat};
use crate::models::Ledger;

/// What the caller should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Where and how the session writes exports and audit records
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    /// Audit log file, `None` to disable auditing
    pub audit_log: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("expenses.csv"),
            export_format: ExportFormat::Csv,
            audit_log: None,
        }
    }
}

/// One user session over a single ledger
pub struct Session {
    ledger: Ledger,
    export_path: PathBuf,
    export_format: ExportFormat,
    audit: Option<AuditLogger>,
}

impl Session {
    pub fn new(ledger: Ledger, options: SessionOptions) -> Self {
        Self {
            ledger,
            export_path: options.export_path,
            export_format: options.export_format,
            audit: options.audit_log.map(AuditLogger::new),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Run one action, writing any report to `out`
    ///
    /// Ledger and export failures are returned to the caller; the ledger is
    /// left as it was before the failing action.
    pub fn execute<W: Write>(&mut self, action: Action, out: &mut W) -> LedgerResult<Outcome> {
        match action {
            Action::Display => {
                write!(out, "{}", display::format_ledger(&self.ledger))?;
            }
            Action::AddEntry {
                amount,
                is_expense,
                date,
                category,
            } => {
                let position = self.ledger.len();
                let entry = self
                    .ledger
                    .add_entry(amount, is_expense, date, category)?
                    .clone();
                let kind = if is_expense { "Expense" } else { "Credit" };
                writeln!(out, "{} of {} recorded.", kind, amount)?;
                self.audit(AuditEntry::add(position, &entry, self.ledger.balance()));
            }
            Action::Remove { position } => {
                let removed = self.ledger.delete_entry(position)?;
                writeln!(out, "Removed entry {}: {}", position + 1, removed.render())?;
                self.audit(AuditEntry::delete(position, &removed, self.ledger.balance()));
            }
            Action::Export => {
                export::export_to_path(&self.ledger, &self.export_path, self.export_format)?;
                writeln!(
                    out,
                    "{} export written to {}.",
                    self.export_format.to_string().to_uppercase(),
                    self.export_path.display()
                )?;
                self.audit(AuditEntry::export(&self.export_path, self.ledger.balance()));
            }
            Action::Help => {
                write!(out, "{}", display::format_help())?;
            }
            Action::Quit => {
                info!(entries = self.ledger.len(), "session ended");
                return Ok(Outcome::Quit);
            }
        }

        Ok(Outcome::Continue)
    }

    /// Append to the audit log; failures are logged and never fail the action
    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, path = %logger.path().display(), "audit write failed");
            }
        }
    }
}
