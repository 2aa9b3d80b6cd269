//! Parsing of typed answers into explicit values
//!
//! Prompts and command-line arguments arrive as text. The shortcuts users
//! already rely on are kept here: `.` means today for dates, and a single
//! space clears a category when editing.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::error::{CheckbookError, CheckbookResult};
use crate::models::Money;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// Whatever the clock says today is
    Today,
    /// A specific calendar date
    On(NaiveDate),
}

impl DateInput {
    /// Parse `.` or a `YYYY-MM-DD` date
    pub fn parse(text: &str) -> CheckbookResult<Self> {
        let trimmed = text.trim();
        if trimmed == "." {
            return Ok(Self::Today);
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::On)
            .map_err(|_| CheckbookError::InvalidDate(text.to_string()))
    }

    pub fn resolve(self, clock: &dyn Clock) -> NaiveDate {
        match self {
            Self::Today => clock.today(),
            Self::On(date) => date,
        }
    }
}

/// What an edit answer asks to do with a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryInput {
    /// Leave the current category alone
    Keep,
    /// Make the transaction uncategorized
    Clear,
    /// Replace the category
    Set(String),
}

impl CategoryInput {
    /// Interpret an edit-prompt answer
    ///
    /// Exactly one space clears; blank keeps; anything else is trimmed and set.
    pub fn from_edit_answer(raw: &str) -> Self {
        if raw == " " {
            return Self::Clear;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Keep
        } else {
            Self::Set(trimmed.to_string())
        }
    }

    /// Apply to an existing category value
    pub fn apply(self, current: Option<String>) -> Option<String> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(label) => Some(label),
        }
    }
}

/// Parse an optional category for a new transaction; blank is uncategorized
pub fn parse_new_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse an amount that may be left blank
pub fn parse_optional_amount(raw: &str) -> CheckbookResult<Option<Money>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        Money::parse(raw).map(Some)
    }
}

/// A yes/no answer; anything starting with `y` is yes
pub fn parse_yes(raw: &str) -> bool {
    raw.trim().to_lowercase().starts_with('y')
}
