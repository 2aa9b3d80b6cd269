//! Category Report
//!
//! Net amount per category, optionally limited to a date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, Transaction};
use crate::services::Ledger;

/// An inclusive date range; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// The unbounded range
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Category Report
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub range: DateRange,
    /// Sorted by category name
    pub totals: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Sum visible transactions per category within `range`
    pub fn generate(ledger: &Ledger, range: DateRange) -> Self {
        Self::from_transactions(ledger.transactions(), range)
    }

    fn from_transactions<'a>(
        transactions: impl Iterator<Item = &'a Transaction>,
        range: DateRange,
    ) -> Self {
        let mut by_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();

        for txn in transactions.filter(|t| range.contains(t.date)) {
            let entry = by_category
                .entry(txn.category_label())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let totals = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| CategoryTotal {
                category: category.to_string(),
                total,
                transaction_count,
            })
            .collect();

        Self { range, totals }
    }

    /// Total for a category, if it had any transactions in range
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        if self.range.start.is_some() || self.range.end.is_some() {
            let bound = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "…".into());
            output.push_str(&format!(
                "Categories: {} to {}\n",
                bound(self.range.start),
                bound(self.range.end)
            ));
        }

        for total in &self.totals {
            output.push_str(&format!("{:20} {:>10}\n", total.category, total.total));
        }

        output
    }
}
