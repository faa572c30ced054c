//! Session commands
//!
//! `Command` is the single-key menu choice typed by the user; `Action` is a
//! fully validated request that the session executes.

use crate::models::Money;

/// Menu keys, matched case-insensitively on the first character of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Display,
    AddExpense,
    AddCredit,
    Remove,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse a menu key; anything unrecognized yields `None`
    pub fn parse(token: &str) -> Option<Self> {
        let key = token.trim().chars().next()?.to_ascii_uppercase();
        match key {
            'D' => Some(Self::Display),
            'E' => Some(Self::AddExpense),
            'C' => Some(Self::AddCredit),
            'R' => Some(Self::Remove),
            'P' => Some(Self::Export),
            'H' => Some(Self::Help),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// A validated request against the session's ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the entries and the balance
    Display,
    /// Append an entry
    AddEntry {
        amount: Money,
        is_expense: bool,
        date: String,
        category: String,
    },
    /// Remove the entry at a 0-based position
    Remove { position: usize },
    /// Write the ledger to the configured destination
    Export,
    /// Print the command menu
    Help,
    /// End the session
    Quit,
}

impl Action {
    /// Convenience constructor for an expense
    pub fn expense(amount: Money, date: impl Into<String>, category: impl Into<String>) -> Self {
        Self::AddEntry {
            amount,
            is_expense: true,
            date: date.into(),
            category: category.into(),
        }
    }

    /// Convenience constructor for a credit
    pub fn credit(amount: Money, date: impl Into<String>, category: impl Into<String>) -> Self {
        Self::AddEntry {
            amount,
            is_expense: false,
            date: date.into(),
            category: category.into(),
        }
    }
}
