//! Transaction model
//!
//! A single dated entry in the checkbook register, plus the soft-delete
//! state that keeps removed entries in storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Label shown for transactions without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether a stored transaction is still part of the register
///
/// Persisted as the boolean `deleted` key so existing account files keep
/// loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum EntryState {
    #[default]
    Active,
    Deleted,
}

impl EntryState {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl From<bool> for EntryState {
    fn from(deleted: bool) -> Self {
        if deleted {
            Self::Deleted
        } else {
            Self::Active
        }
    }
}

impl From<EntryState> for bool {
    fn from(state: EntryState) -> Self {
        state.is_deleted()
    }
}

/// A checkbook transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category label (None means uncategorized)
    #[serde(default)]
    pub category: Option<String>,

    /// Amount (positive for credits, negative for debits)
    pub amount: Money,

    /// Whether the bank has processed this transaction
    #[serde(default)]
    pub cleared: bool,

    /// Soft-delete state
    #[serde(rename = "deleted", default)]
    pub state: EntryState,
}

impl Transaction {
    /// Create a new, uncleared, uncategorized transaction
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            description: description.into(),
            category: None,
            amount,
            cleared: false,
            state: EntryState::Active,
        }
    }

    /// Set the category; an empty label means uncategorized
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.is_empty());
        self
    }

    /// Set the cleared flag
    pub fn with_cleared(mut self, cleared: bool) -> Self {
        self.cleared = cleared;
        self
    }

    /// Category label for display, falling back to "Uncategorized"
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    /// Check if this is a debit (negative amount)
    pub fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check if this is a credit (positive amount)
    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    /// Flip the cleared flag
    pub fn toggle_cleared(&mut self) {
        self.cleared = !self.cleared;
    }

    /// Mark the transaction as deleted without removing it
    pub fn mark_deleted(&mut self) {
        self.state = EntryState::Deleted;
    }

    /// Text used by the interactive find command
    ///
    /// This is the JSON form of the record, so a search term can hit any
    /// field.
    pub fn search_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
