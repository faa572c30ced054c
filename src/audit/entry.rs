//! Audit entry data structures
//!
//! Defines the structure of audit log records: which ledger action ran, the
//! entry it touched, and the balance it left behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Entry, Money};

/// Ledger actions that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry appended
    Add,
    /// Entry removed
    Delete,
    /// Ledger written to a file
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 0-based position of the affected entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// The entry added or removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    /// Export destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Running balance after the operation
    pub balance: Money,
}

impl AuditEntry {
    fn new(operation: Operation, balance: Money) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            position: None,
            entry: None,
            destination: None,
            balance,
        }
    }

    /// Record an appended entry
    pub fn add(position: usize, entry: &Entry, balance: Money) -> Self {
        Self {
            position: Some(position),
            entry: Some(entry.clone()),
            ..Self::new(Operation::Add, balance)
        }
    }

    /// Record a removed entry
    pub fn delete(position: usize, entry: &Entry, balance: Money) -> Self {
        Self {
            position: Some(position),
            entry: Some(entry.clone()),
            ..Self::new(Operation::Delete, balance)
        }
    }

    /// Record an export
    pub fn export(destination: &Path, balance: Money) -> Self {
        Self {
            destination: Some(destination.display().to_string()),
            ..Self::new(Operation::Export, balance)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(position) = self.position {
            output.push_str(&format!(" #{}", position + 1));
        }
        if let Some(entry) = &self.entry {
            output.push_str(&format!(" {}", entry.render().trim_end()));
        }
        if let Some(destination) = &self.destination {
            output.push_str(&format!(" -> {}", destination));
        }

        output.push_str(&format!(" (balance {})", self.balance.to_decimal_string()));
        output
    }
}
