//! CLI commands for reports
//!
//! Prints the register, category totals, and the reconciliation summary.

use std::path::Path;

use chrono::NaiveDate;
use clap::Args;

use crate::clock::Clock;
use crate::error::CheckbookResult;
use crate::input::DateInput;
use crate::models::Money;
use crate::reports::{CategoryReport, DateRange, ReconciliationReport, RegisterReport};
use crate::storage::AccountStore;

use super::load_ledger;

/// Arguments for `categories`
#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,
}

/// Arguments for `reconcile`
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Balance shown on the bank statement
    #[arg(short, long, allow_negative_numbers = true)]
    pub bank_balance: String,
}

/// Print the register
pub fn handle_register_command(store: &dyn AccountStore, path: &Path) -> CheckbookResult<()> {
    let ledger = load_ledger(store, path)?;
    let report = RegisterReport::generate(&ledger);

    print!("{}", report.format_terminal());
    println!();
    println!("Register balance: {}", report.register_balance);

    Ok(())
}

/// Print per-category totals
pub fn handle_categories_command(
    store: &dyn AccountStore,
    path: &Path,
    clock: &dyn Clock,
    args: CategoriesArgs,
) -> CheckbookResult<()> {
    let range = DateRange::new(
        parse_bound(args.start.as_deref(), clock)?,
        parse_bound(args.end.as_deref(), clock)?,
    );

    let ledger = load_ledger(store, path)?;
    let report = CategoryReport::generate(&ledger, range);

    if report.totals.is_empty() {
        println!("No transactions in range.");
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}

/// Print the reconciliation summary for a bank balance
pub fn handle_reconcile_command(
    store: &dyn AccountStore,
    path: &Path,
    args: ReconcileArgs,
) -> CheckbookResult<()> {
    let bank_balance = Money::parse(&args.bank_balance)?;

    let ledger = load_ledger(store, path)?;
    let report = ReconciliationReport::generate(&ledger, bank_balance);

    print!("{}", report.format_terminal());

    Ok(())
}

fn parse_bound(text: Option<&str>, clock: &dyn Clock) -> CheckbookResult<Option<NaiveDate>> {
    text.map(|t| DateInput::parse(t).map(|d| d.resolve(clock)))
        .transpose()
}
