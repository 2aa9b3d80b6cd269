//! Reconciliation Report
//!
//! The reconcile figures for a bank balance followed by every transaction
//! the bank has not cleared yet.

use crate::models::{Money, Transaction};
use crate::services::{Ledger, Reconciliation};

use super::truncate;

/// Reconciliation Report
#[derive(Debug, Clone)]
pub struct ReconciliationReport {
    pub reconciliation: Reconciliation,
    /// Uncleared transactions sorted by date (entry order within a day)
    pub uncleared: Vec<Transaction>,
}

impl ReconciliationReport {
    pub fn generate(ledger: &Ledger, bank_balance: Money) -> Self {
        let mut uncleared: Vec<Transaction> = ledger.uncleared().cloned().collect();
        uncleared.sort_by_key(|t| t.date);

        Self {
            reconciliation: ledger.reconcile(bank_balance),
            uncleared,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let rec = &self.reconciliation;
        let mut output = String::new();

        output.push_str("\nRECONCILIATION REPORT\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');

        for (i, (label, value)) in rec.lines().iter().enumerate() {
            // Rule between the inputs and the results
            if i == 3 {
                output.push_str(&"-".repeat(52));
                output.push('\n');
            }
            output.push_str(&format!("{:<23}: {:>12}\n", label, value));
        }

        output.push_str("\nUNCLEARED TRANSACTIONS\n");
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for txn in &self.uncleared {
            output.push_str(&format!(
                "{} {:30} {:>10}\n",
                txn.date.format("%Y-%m-%d"),
                truncate(&txn.description, 30),
                txn.amount
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let mut account = Account::new(Money::from_cents(10000));
        account.transactions = vec![
            Transaction::new(date(9), "Late check", Money::from_cents(-2000)),
            Transaction::new(date(2), "Paycheck", Money::from_cents(5000)).with_cleared(true),
            Transaction::new(date(3), "Early check", Money::from_cents(-500)),
            Transaction::new(date(3), "Same day deposit", Money::from_cents(100)),
        ];
        Ledger::new(account)
    }

    #[test]
    fn test_uncleared_sorted_by_date() {
        let report = ReconciliationReport::generate(&ledger(), Money::from_cents(10500));
        let names: Vec<&str> = report
            .uncleared
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(names, vec!["Early check", "Same day deposit", "Late check"]);
    }

    #[test]
    fn test_figures_match_ledger() {
        let ledger = ledger();
        let report = ReconciliationReport::generate(&ledger, Money::from_cents(10500));
        assert_eq!(report.reconciliation, ledger.reconcile(Money::from_cents(10500)));
        assert_eq!(report.reconciliation.uncleared_checks, Money::from_cents(2500));
        assert_eq!(report.reconciliation.uncleared_deposits, Money::from_cents(100));
    }

    #[test]
    fn test_format_terminal() {
        let text = ReconciliationReport::generate(&ledger(), Money::from_cents(10500)).format_terminal();
        assert!(text.contains("RECONCILIATION REPORT"));
        assert!(text.contains(&format!("{:<23}: {:>12}", "Bank balance", "105.00")));
        assert!(text.contains(&format!("{:<23}: {:>12}", "Difference", "-45.00")));
        assert!(text.contains("2024-01-03 Early check"));
    }
}
