//! Expense Ledger - terminal expense tracking with a running balance
//!
//! This library records expenses and credits in an ordered ledger, keeps a
//! running balance, optionally enforces a spending limit, and exports the
//! entries to CSV, JSON or YAML.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, entries and the ledger itself
//! - `error`: Custom error types
//! - `export`: CSV / JSON / YAML writers
//! - `display`: Terminal formatting of the ledger and warnings
//! - `session`: Command parsing, prompting and the menu loop
//! - `config`: Configuration and path management
//! - `audit`: Append-only audit log of ledger actions
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use expense_ledger::models::{Ledger, Money};
//!
//! let mut ledger = Ledger::with_capacity(10, Money::from_cents(50_000), None);
//! ledger.add_entry(Money::from_cents(5_000), true, "2024-01-01", "food")?;
//! ledger.add_entry(Money::from_cents(2_000), false, "2024-01-02", "refund")?;
//!
//! assert_eq!(ledger.balance(), Money::from_cents(47_000));
//! assert_eq!(ledger.total_expense(), Money::from_cents(3_000));
//! assert!(ledger.check_limit());
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{LedgerError, LedgerResult};
pub use models::{Entry, Ledger, Money};
