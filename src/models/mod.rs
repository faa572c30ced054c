//! Core data models for the expense ledger
//!
//! This module contains the data structures that make up the ledger domain:
//! money amounts, entries, and the ledger itself.

pub mod entry;
pub mod ledger;
pub mod money;

pub use entry::Entry;
pub use ledger::{Ledger, LedgerSnapshot, DEFAULT_CAPACITY};
pub use money::{Money, MoneyParseError};
