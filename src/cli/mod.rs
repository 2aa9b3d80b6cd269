//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger and the reports.

pub mod account;
pub mod report;

pub use account::{handle_add_command, handle_init_command, AddArgs, InitArgs};
pub use report::{
    handle_categories_command, handle_reconcile_command, handle_register_command, CategoriesArgs,
    ReconcileArgs,
};

use std::path::Path;

use crate::error::CheckbookResult;
use crate::services::Ledger;
use crate::storage::AccountStore;

/// Load the account at `path` as a ledger
pub(crate) fn load_ledger(store: &dyn AccountStore, path: &Path) -> CheckbookResult<Ledger> {
    store.load(path).map(Ledger::new)
}
