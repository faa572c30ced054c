//! Ledger display formatting
//!
//! Provides utilities for formatting the ledger for terminal display:
//! the entry listing, the balance line and the limit warning block.

use crate::models::{Ledger, Money};

const RULE_WIDTH: usize = 26;

/// Format the current ledger with 1-based positions and the balance
pub fn format_ledger(ledger: &Ledger) -> String {
    let mut output = String::new();
    output.push_str("Current Ledger\n");

    if ledger.is_empty() {
        output.push_str("No entries recorded.\n");
    }

    let number_width = ledger.len().to_string().len();
    for (i, entry) in ledger.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            i + 1,
            entry.render(),
            width = number_width
        ));
    }

    output.push_str(&format_balance(ledger.balance()));
    output.push('\n');
    output
}

/// Format the balance line
pub fn format_balance(balance: Money) -> String {
    format!("Balance: {}\n", balance.to_decimal_string())
}

/// Format the limit warning block, or `None` when the limit is satisfied
pub fn format_limit_warning(ledger: &Ledger) -> Option<String> {
    if ledger.check_limit() {
        return None;
    }

    let limit = ledger
        .limit()
        .map(|l| l.to_decimal_string())
        .unwrap_or_else(|| "none".to_string());

    let rule = "-".repeat(RULE_WIDTH);
    Some(format!(
        "{rule}\nWARNING: You have surpassed your set expense limit.\n{rule}\nTotal expenses: {} | Expense limit: {}\n",
        ledger.total_expense().to_decimal_string(),
        limit,
        rule = rule,
    ))
}

/// Format the command menu
pub fn format_help() -> String {
    [
        "Press D to display current entries",
        "Press E to add expense",
        "Press C to add credit",
        "Press R to remove an entry",
        "Press P to export the ledger",
        "Press H to show this menu",
        "Press Q to quit",
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}
