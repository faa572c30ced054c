//! Audit logging for ledger sessions
//!
//! Records every add, delete and export in an append-only audit log so the
//! running balance can be traced back to the actions that produced it.
//!
//! - `AuditEntry`: one record with timestamp, operation, the affected entry
//!   and the resulting balance.
//! - `AuditLogger`: writes records to the log file as JSON lines (JSONL).

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
