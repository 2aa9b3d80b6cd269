//! Transaction add/edit form
//!
//! Collects one answer per field on the prompt line, then turns the
//! answers into a transaction (add) or a set of changes (edit). Answers are
//! parsed in full before anything is touched, so a bad amount discards the
//! whole form.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::error::CheckbookResult;
use crate::input::{parse_new_category, parse_optional_amount, parse_yes, CategoryInput, DateInput};
use crate::models::{Money, Transaction};
use crate::tui::widgets::input::TextInput;

/// Which field the form is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Date,
    Description,
    Category,
    Amount,
    Cleared,
}

impl TransactionField {
    /// Field after this one, or None when the form is complete
    pub fn next(self, mode: FormMode) -> Option<Self> {
        match (self, mode) {
            (Self::Date, _) => Some(Self::Description),
            (Self::Description, _) => Some(Self::Category),
            (Self::Category, _) => Some(Self::Amount),
            (Self::Amount, FormMode::Add) => Some(Self::Cleared),
            (Self::Amount, FormMode::Edit { .. }) => None,
            (Self::Cleared, _) => None,
        }
    }
}

/// Adding a new transaction or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Editing the visible transaction at `index`
    Edit { index: usize },
}

/// Raw answers, one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionAnswers {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub cleared: String,
}

impl TransactionAnswers {
    fn slot(&mut self, field: TransactionField) -> &mut String {
        match field {
            TransactionField::Date => &mut self.date,
            TransactionField::Description => &mut self.description,
            TransactionField::Category => &mut self.category,
            TransactionField::Amount => &mut self.amount,
            TransactionField::Cleared => &mut self.cleared,
        }
    }

    /// Build a new transaction; amount is required
    pub fn build_transaction(&self, clock: &dyn Clock) -> CheckbookResult<Transaction> {
        let date = DateInput::parse(&self.date)?.resolve(clock);
        let amount = Money::parse(&self.amount)?;

        Ok(Transaction::new(date, self.description.trim(), amount)
            .with_category(parse_new_category(&self.category))
            .with_cleared(parse_yes(&self.cleared)))
    }

    /// Parse edit answers; blank answers keep the current value
    pub fn build_edit(&self, clock: &dyn Clock) -> CheckbookResult<TransactionEdit> {
        let date = if self.date.trim().is_empty() {
            None
        } else {
            Some(DateInput::parse(&self.date)?.resolve(clock))
        };
        let description = {
            let trimmed = self.description.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(TransactionEdit {
            date,
            description,
            category: CategoryInput::from_edit_answer(&self.category),
            amount: parse_optional_amount(&self.amount)?,
        })
    }
}

/// Parsed changes to an existing transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEdit {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: CategoryInput,
    pub amount: Option<Money>,
}

impl TransactionEdit {
    pub fn apply(self, txn: &mut Transaction) {
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(description) = self.description {
            txn.description = description;
        }
        txn.category = self.category.apply(txn.category.take());
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
    }
}

/// State of the add/edit form while it is on screen
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub mode: FormMode,
    pub field: TransactionField,
    pub input: TextInput,
    pub answers: TransactionAnswers,
    /// Current values shown as defaults when editing
    original: Option<Transaction>,
}

impl TransactionFormState {
    /// Empty form for a new transaction
    pub fn new() -> Self {
        let mut state = Self {
            mode: FormMode::Add,
            field: TransactionField::Date,
            input: TextInput::new(),
            answers: TransactionAnswers::default(),
            original: None,
        };
        state.reset_input();
        state
    }

    /// Form pre-labelled with the values of an existing transaction
    pub fn edit(index: usize, txn: &Transaction) -> Self {
        let mut state = Self {
            mode: FormMode::Edit { index },
            field: TransactionField::Date,
            input: TextInput::new(),
            answers: TransactionAnswers::default(),
            original: Some(txn.clone()),
        };
        state.reset_input();
        state
    }

    /// Prompt label for the current field
    pub fn label(&self) -> String {
        match &self.original {
            None => match self.field {
                TransactionField::Date => "Date (YYYY-MM-DD or . for today)".into(),
                TransactionField::Description => "Description".into(),
                TransactionField::Category => "Category (blank = uncategorized)".into(),
                TransactionField::Amount => "Amount (negative = debit)".into(),
                TransactionField::Cleared => "Cleared? (y/N)".into(),
            },
            Some(txn) => {
                let (name, current) = match self.field {
                    TransactionField::Date => ("date", txn.date.format("%Y-%m-%d").to_string()),
                    TransactionField::Description => ("description", txn.description.clone()),
                    TransactionField::Category => {
                        ("category", txn.category.clone().unwrap_or_default())
                    }
                    TransactionField::Amount => ("amount", txn.amount.value().to_string()),
                    TransactionField::Cleared => ("cleared", txn.cleared.to_string()),
                };
                format!("{} [{}]", name, current)
            }
        }
    }

    fn reset_input(&mut self) {
        self.input = TextInput::new().label(self.label());
    }

    /// Store the typed answer and move on
    ///
    /// Returns true once every field has been answered.
    pub fn submit_field(&mut self) -> bool {
        *self.answers.slot(self.field) = self.input.value().to_string();
        match self.field.next(self.mode) {
            Some(next) => {
                self.field = next;
                self.reset_input();
                false
            }
            None => true,
        }
    }
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}
