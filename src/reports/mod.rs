//! Reports module for the checkbook
//!
//! Read-only text reports over a ledger: the register, category totals,
//! and the reconciliation summary.

pub mod categories;
pub mod reconciliation;
pub mod register;

pub use categories::{CategoryReport, CategoryTotal, DateRange};
pub use reconciliation::ReconciliationReport;
pub use register::{RegisterEntry, RegisterReport};

pub(crate) use register::format_optional;

/// Mark shown next to cleared transactions
pub const CLEARED_MARK: &str = "✔";

/// Cut a string to at most `max` characters
pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
