//! Account model
//!
//! The persisted record: an opening balance and every transaction ever
//! entered, deleted ones included.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;

/// A checkbook account as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Balance before the first recorded transaction
    #[serde(default)]
    pub initial_balance: Money,

    /// All transactions in entry order (not necessarily date order)
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create an empty account with an opening balance
    pub fn new(initial_balance: Money) -> Self {
        Self {
            initial_balance,
            transactions: Vec::new(),
        }
    }

    /// Number of soft-deleted transactions kept in storage
    pub fn deleted_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.is_deleted()).count()
    }
}
