//! Checkbook - a personal checkbook register for the terminal
//!
//! Keeps a single account as a JSON file: an opening balance plus an
//! ordered list of transactions. Transactions can be marked cleared as the
//! bank processes them, and the register can be reconciled against the
//! balance on a bank statement.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, transactions, and the account record
//! - `services`: The ledger (visible transactions, balances, reconciliation)
//! - `storage`: Loading and saving account files
//! - `reports`: Register, category, and reconciliation reports
//! - `tui`: The interactive register
//! - `cli`: Command handlers for the `checkbook` binary
//! - `config`: Paths and settings
//! - `logging`: File-based `tracing` setup
//!
//! # Example
//!
//! ```rust,ignore
//! use checkbook::services::Ledger;
//! use checkbook::storage::{AccountStore, JsonFileStore};
//!
//! let ledger = Ledger::new(JsonFileStore.load(path)?);
//! println!("{}", ledger.register_balance());
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{CheckbookError, CheckbookResult};
