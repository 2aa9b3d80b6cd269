//! Reconciliation result
//!
//! The numbers that compare a bank statement to the register once the
//! items the bank has not seen yet are accounted for.

use crate::models::Money;

/// Outcome of reconciling the register against a bank balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Balance reported by the bank
    pub bank_balance: Money,
    /// Magnitude of uncleared debits (positive)
    pub uncleared_checks: Money,
    /// Sum of uncleared credits
    pub uncleared_deposits: Money,
    /// Bank balance adjusted for uncleared items
    pub ending_balance: Money,
    /// Register balance at reconciliation time
    pub register_balance: Money,
    /// ending_balance - register_balance; zero means the books agree
    pub difference: Money,
}

impl Reconciliation {
    pub(crate) fn new(
        bank_balance: Money,
        uncleared_checks: Money,
        uncleared_deposits: Money,
        register_balance: Money,
    ) -> Self {
        let ending_balance = bank_balance - uncleared_checks + uncleared_deposits;
        Self {
            bank_balance,
            uncleared_checks,
            uncleared_deposits,
            ending_balance,
            register_balance,
            difference: ending_balance - register_balance,
        }
    }

    /// Whether the register matches the bank exactly
    pub fn is_balanced(&self) -> bool {
        self.difference.is_zero()
    }

    /// Labelled values in display order
    pub fn lines(&self) -> [(&'static str, Money); 6] {
        [
            ("Bank balance", self.bank_balance),
            ("Uncleared checks", self.uncleared_checks),
            ("Uncleared deposits", self.uncleared_deposits),
            ("Ending balance", self.ending_balance),
            ("Register balance", self.register_balance),
            ("Difference", self.difference),
        ]
    }
}
