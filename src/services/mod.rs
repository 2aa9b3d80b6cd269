//! Business logic layer
//!
//! The ledger view over an account and the reconciliation it computes.

pub mod ledger;
pub mod reconciliation;

pub use ledger::Ledger;
pub use reconciliation::Reconciliation;
