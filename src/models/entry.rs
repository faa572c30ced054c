//! Ledger entry model
//!
//! One recorded transaction: an unsigned amount, a direction flag, and two
//! free-text tokens for the date and category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Column width of the date and category fields in rendered rows
pub const FIELD_WIDTH: usize = 15;

/// A single expense or credit
///
/// The amount is a magnitude; the direction lives in `is_expense`. Fields can
/// only be replaced wholesale through [`Entry::overwrite`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    amount: Money,
    is_expense: bool,
    date: String,
    category: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        amount: Money,
        is_expense: bool,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            is_expense,
            date: date.into(),
            category: category.into(),
        }
    }

    /// Shorthand for an expense entry
    pub fn expense(amount: Money, date: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(amount, true, date, category)
    }

    /// Shorthand for a credit entry
    pub fn credit(amount: Money, date: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(amount, false, date, category)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_expense(&self) -> bool {
        self.is_expense
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Effect of this entry on the running balance
    pub fn signed_effect(&self) -> Money {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Contribution to the net expense total (expenses add, credits subtract)
    pub fn net_expense(&self) -> Money {
        -self.signed_effect()
    }

    /// Replace every field with a copy of `source`
    pub fn overwrite(&mut self, source: &Entry) {
        self.clone_from(source);
    }

    /// Fixed-width display row
    ///
    /// Expenses get a `-$` prefix and an 8-wide amount, credits a ` $` prefix
    /// and a 10-wide amount. Date and category are right-aligned in
    /// [`FIELD_WIDTH`] columns and cut to fit.
    pub fn render(&self) -> String {
        let amount = self.amount.to_decimal_string();
        let (prefix, width) = if self.is_expense { ("-$", 8) } else { (" $", 10) };

        format!(
            "{}{:<width$} | {:>field$} | {:>field$}",
            prefix,
            amount,
            truncate(&self.date, FIELD_WIDTH),
            truncate(&self.category, FIELD_WIDTH),
            width = width,
            field = FIELD_WIDTH,
        )
    }

    /// Plain export fields: amount, expense flag, date, category
    pub fn to_row(&self) -> [String; 4] {
        [
            self.amount.to_decimal_string(),
            self.is_expense.to_string(),
            self.date.clone(),
            self.category.clone(),
        ]
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Cut a string to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_effect() {
        let expense = Entry::expense(Money::from_cents(5000), "2024-01-01", "food");
        let credit = Entry::credit(Money::from_cents(2000), "2024-01-02", "salary");

        assert_eq!(expense.signed_effect().cents(), -5000);
        assert_eq!(expense.net_expense().cents(), 5000);
        assert_eq!(credit.signed_effect().cents(), 2000);
        assert_eq!(credit.net_expense().cents(), -2000);
    }

    #[test]
    fn test_render_expense() {
        let entry = Entry::expense(Money::from_cents(2500), "2024-01-01", "food");
        assert_eq!(
            entry.render(),
            "-$25.00    |      2024-01-01 |            food"
        );
    }

    #[test]
    fn test_render_credit() {
        let entry = Entry::credit(Money::from_cents(10000), "2024-01-02", "salary");
        assert_eq!(
            entry.render(),
            " $100.00     |      2024-01-02 |          salary"
        );
    }

    #[test]
    fn test_render_truncates_long_fields() {
        let entry = Entry::expense(
            Money::from_cents(100),
            "2024-01-01",
            "an-extremely-long-category",
        );
        assert!(entry.render().ends_with("| an-extremely-lo"));
    }

    #[test]
    fn test_to_row() {
        let entry = Entry::expense(Money::from_cents(2500), "2024-01-01", "food");
        assert_eq!(entry.to_row(), ["25.00", "true", "2024-01-01", "food"]);

        let entry = Entry::credit(Money::from_cents(10000), "2024-01-02", "salary");
        assert_eq!(entry.to_row(), ["100.00", "false", "2024-01-02", "salary"]);
    }

    #[test]
    fn test_overwrite_copies_all_fields() {
        let mut target = Entry::expense(Money::from_cents(1), "a", "b");
        let source = Entry::credit(Money::from_cents(999), "2024-03-03", "gift");

        target.overwrite(&source);

        assert_eq!(target, source);
        assert!(!target.is_expense());
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("éééé", 2), "éé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
