//! Core data models for the checkbook
//!
//! This module contains the persisted records: the account, its
//! transactions, and the money type they are measured in.

pub mod account;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use money::Money;
pub use transaction::{EntryState, Transaction, UNCATEGORIZED};
