//! Display formatting for terminal output

pub mod ledger;

pub use ledger::{format_balance, format_help, format_ledger, format_limit_warning};
