//! Register Report
//!
//! Every visible transaction with its debit/credit split and the running
//! balance after it.

use chrono::NaiveDate;

use crate::models::Money;
use crate::services::Ledger;

use super::{truncate, CLEARED_MARK};

/// A single row of the register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEntry {
    pub cleared: bool,
    pub date: NaiveDate,
    pub description: String,
    /// Category label ("Uncategorized" when none)
    pub category: String,
    /// Magnitude of a negative amount
    pub debit: Option<Money>,
    /// A positive amount
    pub credit: Option<Money>,
    /// Balance after this transaction
    pub balance: Money,
}

/// Register Report
#[derive(Debug, Clone)]
pub struct RegisterReport {
    pub initial_balance: Money,
    pub entries: Vec<RegisterEntry>,
    pub register_balance: Money,
}

impl RegisterReport {
    /// Build the register from a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let entries = ledger
            .transactions()
            .zip(ledger.running_balances())
            .map(|(txn, balance)| RegisterEntry {
                cleared: txn.cleared,
                date: txn.date,
                description: txn.description.clone(),
                category: txn.category_label().to_string(),
                debit: txn.is_debit().then(|| -txn.amount),
                credit: txn.is_credit().then_some(txn.amount),
                balance,
            })
            .collect();

        Self {
            initial_balance: ledger.initial_balance(),
            entries,
            register_balance: ledger.register_balance(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "  {:10} {:30} {:15} {:>10} {:>10} {:>12}\n",
            "Date", "Description", "Category", "Debit", "Credit", "Balance"
        ));
        output.push_str(&"-".repeat(95));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{} {} {:30} {:15} {:>10} {:>10} {:>12}\n",
                if entry.cleared { CLEARED_MARK } else { " " },
                entry.date.format("%Y-%m-%d"),
                truncate(&entry.description, 30),
                truncate(&entry.category, 15),
                format_optional(entry.debit),
                format_optional(entry.credit),
                entry.balance
            ));
        }

        output
    }
}

/// Money as text, or blank
pub(crate) fn format_optional(amount: Option<Money>) -> String {
    amount.map(|m| m.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Transaction};

    fn ledger() -> Ledger {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let mut account = Account::new(Money::from_cents(10000));
        account.transactions = vec![
            Transaction::new(date(1), "Groceries", Money::from_cents(-2000))
                .with_category(Some("Food".into())),
            Transaction::new(date(2), "Paycheck", Money::from_cents(5000)).with_cleared(true),
            Transaction::new(date(3), "Nothing", Money::zero()),
        ];
        Ledger::new(account)
    }

    #[test]
    fn test_entries() {
        let report = RegisterReport::generate(&ledger());
        assert_eq!(report.entries.len(), 3);

        let first = &report.entries[0];
        assert_eq!(first.debit, Some(Money::from_cents(2000)));
        assert_eq!(first.credit, None);
        assert_eq!(first.category, "Food");
        assert_eq!(first.balance, Money::from_cents(8000));

        let second = &report.entries[1];
        assert!(second.cleared);
        assert_eq!(second.credit, Some(Money::from_cents(5000)));
        assert_eq!(second.category, "Uncategorized");

        let zero = &report.entries[2];
        assert_eq!((zero.debit, zero.credit), (None, None));
        assert_eq!(report.register_balance, Money::from_cents(13000));
    }

    #[test]
    fn test_format_terminal() {
        let text = RegisterReport::generate(&ledger()).format_terminal();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Description"));
        assert!(lines[2].starts_with("  2024-01-01 Groceries"));
        assert!(lines[2].trim_end().ends_with("80.00"));
        assert!(lines[3].starts_with("✔ 2024-01-02 Paycheck"));
        assert!(lines[3].contains("50.00"));
        assert!(lines[3].trim_end().ends_with("130.00"));
    }

    #[test]
    fn test_long_description_is_cut() {
        let mut account = Account::new(Money::zero());
        account.transactions.push(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "x".repeat(50),
            Money::from_cents(1),
        ));
        let text = RegisterReport::generate(&Ledger::new(account)).format_terminal();
        assert!(text.contains(&"x".repeat(30)));
        assert!(!text.contains(&"x".repeat(31)));
    }
}
