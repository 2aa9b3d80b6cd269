//! Account CLI commands
//!
//! Creating an account file and appending transactions to it.

use std::path::Path;

use clap::Args;
use tracing::info;

use crate::clock::Clock;
use crate::error::{CheckbookError, CheckbookResult};
use crate::input::{parse_new_category, DateInput};
use crate::models::{Money, Transaction};
use crate::storage::AccountStore;

use super::load_ledger;

/// Arguments for `init`
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Opening balance (e.g., "1000.00" or "-25")
    #[arg(allow_negative_numbers = true)]
    pub balance: String,

    /// Overwrite an existing account file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction date (YYYY-MM-DD, or "." for today)
    pub date: String,

    /// Description
    pub description: String,

    /// Amount (negative for checks and withdrawals)
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Mark as already cleared by the bank
    #[arg(long)]
    pub cleared: bool,
}

/// Create a new account file
pub fn handle_init_command(
    store: &dyn AccountStore,
    path: &Path,
    args: InitArgs,
) -> CheckbookResult<()> {
    let balance = Money::parse(&args.balance)?;

    if path.exists() && !args.force {
        return Err(CheckbookError::AlreadyExists(path.to_path_buf()));
    }

    let account = store.create(balance);
    store.save(path, &account)?;
    info!(path = %path.display(), %balance, "initialized account");

    println!("Created account at {}", path.display());
    println!("  Opening balance: {}", balance);

    Ok(())
}

/// Append one transaction and save
///
/// Every argument is parsed before the account is loaded, so bad input
/// leaves the file untouched.
pub fn handle_add_command(
    store: &dyn AccountStore,
    path: &Path,
    clock: &dyn Clock,
    args: AddArgs,
) -> CheckbookResult<()> {
    let date = DateInput::parse(&args.date)?.resolve(clock);
    let amount = Money::parse(&args.amount)?;
    let category = args.category.as_deref().and_then(parse_new_category);

    let txn = Transaction::new(date, args.description.trim(), amount)
        .with_category(category)
        .with_cleared(args.cleared);

    let mut ledger = load_ledger(store, path)?;
    ledger.add_transaction(txn.clone());
    store.save(path, ledger.account())?;

    println!("Added: {}", txn);
    println!("  Register balance: {}", ledger.register_balance());

    Ok(())
}
