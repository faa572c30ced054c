//! Ledger model
//!
//! An ordered, append-biased collection of entries together with a running
//! balance and an optional spending limit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::Entry;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Slots reserved by [`Ledger::new`]
pub const DEFAULT_CAPACITY: usize = 10;

/// The session ledger
///
/// `balance` is a running total of every add ever performed. Deleting an
/// entry does not reverse its effect on the balance; only
/// [`Ledger::total_expense`] reflects the entries currently present.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Entry>,
    balance: Money,
    limit: Option<Money>,
}

impl Ledger {
    /// Create a ledger with the default capacity, a zero balance and a
    /// zero limit
    ///
    /// The zero limit is enforced: any net expense at all fails
    /// [`Ledger::check_limit`]. Use [`Ledger::with_capacity`] with `None` for
    /// an unlimited ledger.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, Money::zero(), Some(Money::zero()))
    }

    /// Create an empty ledger
    ///
    /// `limit` of `None` disables limit checks.
    pub fn with_capacity(capacity_hint: usize, starting_balance: Money, limit: Option<Money>) -> Self {
        Self {
            entries: Vec::with_capacity(capacity_hint),
            balance: starting_balance,
            limit,
        }
    }

    /// Append an entry and apply it to the running balance
    ///
    /// Fails with a validation error, leaving the ledger unchanged, when
    /// `amount` is negative or the balance would overflow.
    pub fn add_entry(
        &mut self,
        amount: Money,
        is_expense: bool,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> LedgerResult<&Entry> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Entry amount cannot be negative: {}",
                amount
            )));
        }

        let entry = Entry::new(amount, is_expense, date, category);
        let balance = self
            .balance
            .checked_add(entry.signed_effect())
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Entry of {} would overflow the balance of {}",
                    amount, self.balance
                ))
            })?;
        self.balance = balance;
        debug!(
            amount = %entry.amount(),
            is_expense,
            balance = %self.balance,
            "entry added"
        );

        self.entries.push(entry);
        self.entries
            .last()
            .ok_or_else(|| LedgerError::Validation("Entry was not stored".into()))
    }

    /// Remove the entry at `position`, shifting later entries forward
    ///
    /// The balance keeps the removed entry's effect: it records actions taken,
    /// not the sum of what is currently listed.
    pub fn delete_entry(&mut self, position: usize) -> LedgerResult<Entry> {
        if position >= self.entries.len() {
            return Err(LedgerError::out_of_range(position, self.entries.len()));
        }

        let removed = self.entries.remove(position);
        debug!(position, remaining = self.entries.len(), "entry deleted");
        Ok(removed)
    }

    /// Net expense over the entries currently present
    ///
    /// Expenses add and credits subtract, so a ledger of credits yields a
    /// negative figure. Recomputed on every call; saturates at the bounds of
    /// [`Money`] instead of wrapping.
    pub fn total_expense(&self) -> Money {
        self.entries.iter().map(Entry::net_expense).sum()
    }

    /// True when no limit is set or the net expense is strictly below it
    pub fn check_limit(&self) -> bool {
        match self.limit {
            None => true,
            Some(limit) => self.total_expense() < limit,
        }
    }

    /// Number of entries currently present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running balance after every add so far
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The configured limit, `None` when disabled
    pub fn limit(&self) -> Option<Money> {
        self.limit
    }

    /// Entries in their current order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry at a 0-based position
    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// One row of export fields per entry, in order
    pub fn to_array_rows(&self) -> Vec<[String; 4]> {
        self.entries.iter().map(Entry::to_row).collect()
    }

    /// Serializable view of the whole ledger
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balance: self.balance,
            limit: self.limit,
            total_expense: self.total_expense(),
            entries: self.entries.clone(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Point-in-time copy of a ledger for the structured exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub balance: Money,
    #[serde(default)]
    pub limit: Option<Money>,
    pub total_expense: Money,
    pub entries: Vec<Entry>,
}
