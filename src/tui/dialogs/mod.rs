//! Prompt-line dialogs for the TUI

pub mod prompt;
pub mod transaction;

pub use prompt::Prompt;
pub use transaction::{FormMode, TransactionField, TransactionFormState};
