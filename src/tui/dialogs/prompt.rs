//! Prompt line state
//!
//! Every question the session asks is answered on the bottom line of the
//! screen. A prompt is either a single answer or the multi-field
//! transaction form.

use crate::models::Money;
use crate::tui::widgets::input::TextInput;

use super::transaction::TransactionFormState;

/// The question currently on the prompt line
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Bank-stated balance for reconciliation
    BankBalance(TextInput),
    /// Search term
    Find(TextInput),
    /// Add or edit form
    Transaction(TransactionFormState),
}

impl Prompt {
    /// Bank balance question; a known balance is shown as the default
    /// kept by a blank answer
    pub fn bank_balance(current: Option<Money>) -> Self {
        let label = match current {
            Some(balance) => format!("Bank balance [{}]", balance.value()),
            None => "Bank balance".to_string(),
        };
        Self::BankBalance(TextInput::new().label(label))
    }

    pub fn find() -> Self {
        Self::Find(TextInput::new().label("Find"))
    }

    /// The text field being typed into
    pub fn input(&self) -> &TextInput {
        match self {
            Self::BankBalance(input) | Self::Find(input) => input,
            Self::Transaction(form) => &form.input,
        }
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        match self {
            Self::BankBalance(input) | Self::Find(input) => input,
            Self::Transaction(form) => &mut form.input,
        }
    }
}
