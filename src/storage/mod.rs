//! Storage layer for the checkbook
//!
//! Loads and saves whole account files as JSON, with atomic writes and
//! automatic directory creation.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};

use std::path::Path;

use tracing::info;

use crate::error::CheckbookResult;
use crate::models::{Account, Money};

/// Persistent home of an account
pub trait AccountStore {
    /// Load the account at `path`
    ///
    /// Fails with `NotFound` when nothing is there and `MalformedData` when
    /// the content cannot be read as an account.
    fn load(&self, path: &Path) -> CheckbookResult<Account>;

    /// Write the full account, deleted transactions included
    fn save(&self, path: &Path, account: &Account) -> CheckbookResult<()>;

    /// A fresh account with no transactions
    fn create(&self, initial_balance: Money) -> Account {
        Account::new(initial_balance)
    }
}

/// Account files stored as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl AccountStore for JsonFileStore {
    fn load(&self, path: &Path) -> CheckbookResult<Account> {
        let account: Account = read_json_required(path)?;
        info!(
            path = %path.display(),
            transactions = account.transactions.len(),
            "loaded account"
        );
        Ok(account)
    }

    fn save(&self, path: &Path, account: &Account) -> CheckbookResult<()> {
        write_json_atomic(path, account)?;
        info!(
            path = %path.display(),
            transactions = account.transactions.len(),
            "saved account"
        );
        Ok(())
    }
}
