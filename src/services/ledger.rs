//! Ledger service
//!
//! A view over one account that hides soft-deleted transactions. Balances
//! are recomputed from the transaction list on every call; lists are small
//! and this stays correct under arbitrary edits.

use tracing::{debug, info};

use crate::error::{CheckbookError, CheckbookResult};
use crate::models::{Account, Money, Transaction};

use super::reconciliation::Reconciliation;

/// The register view of an account
///
/// Visible indices count only active transactions, in stored order. Each
/// one is resolved against the account's single transaction list.
#[derive(Debug, Clone)]
pub struct Ledger {
    account: Account,
}

impl Ledger {
    /// Wrap an account
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    /// The backing account, deleted transactions included
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Hand the backing account back
    pub fn into_account(self) -> Account {
        self.account
    }

    pub fn initial_balance(&self) -> Money {
        self.account.initial_balance
    }

    /// Storage positions of the active transactions
    fn active(&self) -> impl Iterator<Item = (usize, &Transaction)> + '_ {
        self.account
            .transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_deleted())
    }

    fn storage_position(&self, index: usize) -> Option<usize> {
        self.active().nth(index).map(|(pos, _)| pos)
    }

    /// Visible transactions in stored order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.active().map(|(_, t)| t)
    }

    /// Visible transactions the bank has not processed yet
    pub fn uncleared(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions().filter(|t| !t.cleared)
    }

    /// Number of visible transactions
    pub fn len(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible transaction at `index`
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions().nth(index)
    }

    /// Mutable access to the visible transaction at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Transaction> {
        let pos = self.storage_position(index)?;
        self.account.transactions.get_mut(pos)
    }

    /// Initial balance plus every visible amount
    pub fn register_balance(&self) -> Money {
        self.initial_balance() + self.transactions().map(|t| t.amount).sum::<Money>()
    }

    /// Balance after each visible transaction
    pub fn running_balances(&self) -> Vec<Money> {
        let mut balance = self.initial_balance();
        self.transactions()
            .map(|t| {
                balance += t.amount;
                balance
            })
            .collect()
    }

    /// Compare the register to a bank-stated balance
    pub fn reconcile(&self, bank_balance: Money) -> Reconciliation {
        let uncleared_checks: Money = self
            .uncleared()
            .filter(|t| t.is_debit())
            .map(|t| -t.amount)
            .sum();
        let uncleared_deposits: Money = self
            .uncleared()
            .filter(|t| t.is_credit())
            .map(|t| t.amount)
            .sum();

        Reconciliation::new(
            bank_balance,
            uncleared_checks,
            uncleared_deposits,
            self.register_balance(),
        )
    }

    /// Append a transaction; it becomes the last visible entry
    pub fn add_transaction(&mut self, transaction: Transaction) {
        info!(
            date = %transaction.date,
            amount = %transaction.amount,
            "adding transaction"
        );
        self.account.transactions.push(transaction);
    }

    /// Soft-delete the visible transaction at `index`
    ///
    /// The record stays in the account, flagged deleted.
    pub fn delete_transaction(&mut self, index: usize) -> CheckbookResult<&Transaction> {
        let len = self.len();
        let pos = self
            .storage_position(index)
            .ok_or(CheckbookError::IndexOutOfRange { index, len })?;

        let txn = &mut self.account.transactions[pos];
        txn.mark_deleted();
        debug!(index, storage_position = pos, "soft-deleted transaction");
        Ok(txn)
    }
}

impl From<Account> for Ledger {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
