//! Application state for the TUI
//!
//! The App struct holds the ledger being worked on plus everything the
//! screen needs: cursor, scroll position, bank balance, search term, and
//! whatever prompt is open. All session commands live here so they can be
//! driven without a terminal.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::CheckbookResult;
use crate::models::{Money, Transaction};
use crate::services::{Ledger, Reconciliation};
use crate::storage::AccountStore;

use super::dialogs::transaction::{FormMode, TransactionEdit, TransactionFormState};
use super::dialogs::Prompt;

/// Main application state
pub struct App<'a> {
    /// The account being edited
    pub ledger: Ledger,

    /// Where the account is saved on quit
    store: &'a dyn AccountStore,
    account_path: PathBuf,

    /// Resolves `.` in date answers
    clock: &'a dyn Clock,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last save attempt failed; the next quit leaves without saving
    save_failed: bool,

    /// Visible index of the highlighted transaction
    cursor: usize,

    /// First visible row of the register
    pub scroll_offset: usize,

    /// Register rows that fit on screen
    visible_rows: usize,

    /// Bank-stated balance, once entered
    pub bank_balance: Option<Money>,

    /// Term used by repeat-find
    pub last_search: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Open prompt, if any
    pub prompt: Option<Prompt>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        ledger: Ledger,
        store: &'a dyn AccountStore,
        account_path: impl Into<PathBuf>,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            ledger,
            store,
            account_path: account_path.into(),
            clock,
            should_quit: false,
            save_failed: false,
            cursor: 0,
            scroll_offset: 0,
            visible_rows: 1,
            bank_balance: None,
            last_search: None,
            status_message: None,
            prompt: None,
        }
    }

    /// Start with a known bank balance
    pub fn with_bank_balance(mut self, bank_balance: Option<Money>) -> Self {
        self.bank_balance = bank_balance;
        self
    }

    pub fn account_path(&self) -> &Path {
        &self.account_path
    }

    /// Highlighted transaction index; None when nothing is visible
    pub fn cursor(&self) -> Option<usize> {
        let len = self.ledger.len();
        (len > 0).then(|| self.cursor.min(len - 1))
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Record how many register rows fit on screen
    ///
    /// When the window grows, rows above it are pulled back into view as
    /// long as the cursor stays visible.
    pub fn set_visible_rows(&mut self, rows: usize) {
        let rows = rows.max(1);
        if rows > self.visible_rows {
            let fill_from = self.ledger.len().saturating_sub(rows);
            self.scroll_offset = self.scroll_offset.min(fill_from);
        }
        self.visible_rows = rows;
        self.scroll_into_view();
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Keep the cursor row on screen
    fn scroll_into_view(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = self.cursor + 1 - self.visible_rows;
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index;
        self.scroll_into_view();
    }

    /// Jump straight to a search hit, putting it at the top of the screen
    fn jump_to(&mut self, index: usize) {
        self.cursor = index;
        self.scroll_offset = index;
    }

    pub fn move_up(&mut self) {
        if let Some(cursor) = self.cursor() {
            self.move_to(cursor.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(cursor) = self.cursor() {
            let last = self.ledger.len() - 1;
            self.move_to((cursor + 1).min(last));
        }
    }

    pub fn jump_top(&mut self) {
        if self.cursor().is_some() {
            self.move_to(0);
        }
    }

    pub fn jump_bottom(&mut self) {
        if self.cursor().is_some() {
            self.move_to(self.ledger.len() - 1);
        }
    }

    /// Flip the cleared flag of the highlighted transaction
    pub fn toggle_cleared(&mut self) {
        let Some(cursor) = self.cursor() else {
            return;
        };
        if let Some(txn) = self.ledger.get_mut(cursor) {
            txn.toggle_cleared();
            debug!(index = cursor, cleared = txn.cleared, "toggled cleared");
        }
    }

    /// Set the bank balance from typed text
    ///
    /// Blank text leaves the balance alone.
    pub fn set_bank_balance(&mut self, text: &str) -> CheckbookResult<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let balance = Money::parse(text)?;
        debug!(%balance, "bank balance entered");
        self.bank_balance = Some(balance);
        Ok(())
    }

    /// Append a transaction; the cursor stays where it is
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.ledger.add_transaction(transaction);
        self.set_status("Transaction added");
    }

    /// Apply parsed changes to the visible transaction at `index`
    pub fn edit_transaction(&mut self, index: usize, edit: TransactionEdit) {
        if let Some(txn) = self.ledger.get_mut(index) {
            edit.apply(txn);
            info!(index, "edited transaction");
            self.set_status("Transaction updated");
        }
    }

    /// Soft-delete the highlighted transaction and step the cursor back
    pub fn delete_current(&mut self) {
        let Some(cursor) = self.cursor() else {
            return;
        };
        if self.ledger.delete_transaction(cursor).is_ok() {
            self.move_to(cursor.saturating_sub(1));
            self.set_status("Transaction deleted");
        }
    }

    /// Next uncleared transaction after the cursor, wrapping around
    pub fn next_uncleared(&mut self) {
        self.jump_uncleared(|cursor, step, len| (cursor + step) % len);
    }

    /// Previous uncleared transaction before the cursor, wrapping around
    pub fn prev_uncleared(&mut self) {
        self.jump_uncleared(|cursor, step, len| (cursor + len - step) % len);
    }

    fn jump_uncleared(&mut self, position: impl Fn(usize, usize, usize) -> usize) {
        let Some(cursor) = self.cursor() else {
            return;
        };
        let cleared: Vec<bool> = self.ledger.transactions().map(|t| t.cleared).collect();
        let len = cleared.len();

        let found = (1..len)
            .map(|step| position(cursor, step, len))
            .find(|&i| !cleared[i]);

        match found {
            Some(index) => self.jump_to(index),
            None => self.set_status("No other uncleared transactions"),
        }
    }

    /// Search for `term` after the cursor, wrapping around
    ///
    /// Matches case-insensitively against the stored form of each
    /// transaction. The current row is checked last, so an empty term
    /// steps to the next row.
    pub fn find(&mut self, term: &str) {
        self.last_search = Some(term.to_string());

        let Some(cursor) = self.cursor() else {
            return;
        };
        let needle = term.to_lowercase();
        let haystack: Vec<String> = self
            .ledger
            .transactions()
            .map(|t| t.search_text().to_lowercase())
            .collect();
        let len = haystack.len();

        let found = (1..=len)
            .map(|step| (cursor + step) % len)
            .find(|&i| haystack[i].contains(&needle));

        match found {
            Some(index) => {
                debug!(term, index, "search hit");
                self.jump_to(index);
            }
            None => self.set_status(format!("Not found: {}", term)),
        }
    }

    /// Repeat the last search
    pub fn find_next(&mut self) {
        if let Some(term) = self.last_search.clone() {
            self.find(&term);
        }
    }

    /// Reconcile figures, once a bank balance is known
    pub fn reconciliation(&self) -> Option<Reconciliation> {
        self.bank_balance.map(|b| self.ledger.reconcile(b))
    }

    /// Save the account and end the session
    pub fn save_and_quit(&mut self) -> CheckbookResult<()> {
        self.store.save(&self.account_path, self.ledger.account())?;
        info!(path = %self.account_path.display(), "session saved");
        self.should_quit = true;
        Ok(())
    }

    /// Quit command: save and quit, or just quit if the last save failed
    ///
    /// A failed save keeps the session open and says how to leave anyway.
    pub fn quit(&mut self) {
        if self.save_failed {
            self.quit_without_saving();
            return;
        }
        if let Err(e) = self.save_and_quit() {
            warn!(error = %e, "save failed");
            self.save_failed = true;
            self.set_status(format!(
                "Save failed: {} (q again quits without saving)",
                e
            ));
        }
    }

    /// End the session, dropping unsaved changes
    pub fn quit_without_saving(&mut self) {
        warn!(path = %self.account_path.display(), "quit without saving");
        self.should_quit = true;
    }

    // Prompt handling

    /// Check if a prompt is open
    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn open_prompt(&mut self, prompt: Prompt) {
        self.clear_status();
        self.prompt = Some(prompt);
    }

    /// Drop the open prompt and everything typed into it
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Open the form for a new transaction
    pub fn start_add(&mut self) {
        self.open_prompt(Prompt::Transaction(TransactionFormState::new()));
    }

    /// Open the form for the highlighted transaction
    pub fn start_edit(&mut self) {
        let Some(cursor) = self.cursor() else {
            return;
        };
        if let Some(txn) = self.ledger.get(cursor) {
            let form = TransactionFormState::edit(cursor, txn);
            self.open_prompt(Prompt::Transaction(form));
        }
    }

    /// Enter on the prompt line
    ///
    /// Single prompts act immediately. The transaction form moves to its
    /// next field, and once complete is parsed as a whole: any bad answer
    /// discards the form.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        match prompt {
            Prompt::BankBalance(input) => {
                if let Err(e) = self.set_bank_balance(input.value()) {
                    self.set_status(e.to_string());
                }
            }
            Prompt::Find(input) => self.find(input.value()),
            Prompt::Transaction(mut form) => {
                if !form.submit_field() {
                    self.prompt = Some(Prompt::Transaction(form));
                    return;
                }

                let result = match form.mode {
                    FormMode::Add => form
                        .answers
                        .build_transaction(self.clock)
                        .map(|txn| self.add_transaction(txn)),
                    FormMode::Edit { index } => form
                        .answers
                        .build_edit(self.clock)
                        .map(|edit| self.edit_transaction(index, edit)),
                };

                if let Err(e) = result {
                    debug!(error = %e, "form discarded");
                    self.set_status(format!("Discarded: {}", e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Account;
    use crate::storage::JsonFileStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    fn txn(day: u32, desc: &str, cents: i64, cleared: bool) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            desc,
            Money::from_cents(cents),
        )
        .with_cleared(cleared)
    }

    fn ledger_of(transactions: Vec<Transaction>) -> Ledger {
        let mut account = Account::new(Money::from_cents(10000));
        account.transactions = transactions;
        Ledger::new(account)
    }

    fn sample() -> Ledger {
        ledger_of(vec![
            txn(1, "Rent", -50000, true),
            txn(2, "Groceries", -4000, false),
            txn(3, "Paycheck", 200000, true),
            txn(4, "Coffee", -450, false),
            txn(5, "Refund", 1500, true),
        ])
    }

    const CLOCK: FixedClock = FixedClock(NaiveDate::MIN);

    fn app(ledger: Ledger) -> App<'static> {
        App::new(ledger, &JsonFileStore, "unused.json", &CLOCK)
    }

    fn type_answer(app: &mut App, text: &str) {
        for c in text.chars() {
            app.prompt.as_mut().unwrap().input_mut().insert(c);
        }
        app.submit_prompt();
    }

    #[test]
    fn test_cursor_on_empty_ledger() {
        let mut app = app(ledger_of(vec![]));
        assert_eq!(app.cursor(), None);
        app.move_down();
        app.jump_bottom();
        app.toggle_cleared();
        app.delete_current();
        app.next_uncleared();
        app.find("x");
        assert_eq!(app.cursor(), None);
        assert_eq!(app.last_search.as_deref(), Some("x"));
    }

    #[test]
    fn test_movement_is_clamped() {
        let mut app = app(sample());
        app.move_up();
        assert_eq!(app.cursor(), Some(0));
        app.jump_bottom();
        assert_eq!(app.cursor(), Some(4));
        app.move_down();
        assert_eq!(app.cursor(), Some(4));
        app.move_up();
        assert_eq!(app.cursor(), Some(3));
        app.jump_top();
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut app = app(sample());
        app.set_visible_rows(2);
        app.move_down();
        assert_eq!(app.scroll_offset, 0);
        app.move_down();
        assert_eq!(app.scroll_offset, 1);
        app.jump_bottom();
        assert_eq!(app.scroll_offset, 3);
        app.jump_top();
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_visible_rows_at_least_one() {
        let mut app = app(sample());
        app.set_visible_rows(0);
        assert_eq!(app.visible_rows(), 1);
        app.move_down();
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn test_growing_window_scrolls_back() {
        let mut app = app(sample());
        app.move_down();
        assert_eq!(app.scroll_offset, 1);
        app.set_visible_rows(10);
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.cursor(), Some(1));

        app.set_visible_rows(2);
        app.jump_bottom();
        assert_eq!(app.scroll_offset, 3);
        app.set_visible_rows(3);
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut app = app(sample());
        app.move_down();
        app.toggle_cleared();
        assert!(app.ledger.get(1).unwrap().cleared);
        app.toggle_cleared();
        assert!(!app.ledger.get(1).unwrap().cleared);
    }

    #[test]
    fn test_bank_balance_input() {
        let mut app = app(sample());
        app.set_bank_balance("100.50").unwrap();
        assert_eq!(app.bank_balance, Some(Money::from_cents(10050)));

        app.set_bank_balance("   ").unwrap();
        assert_eq!(app.bank_balance, Some(Money::from_cents(10050)));

        assert!(app.set_bank_balance("abc").is_err());
        assert_eq!(app.bank_balance, Some(Money::from_cents(10050)));
    }

    #[test]
    fn test_reconciliation_needs_bank_balance() {
        let mut app = app(sample());
        assert!(app.reconciliation().is_none());
        app.set_bank_balance("0").unwrap();
        let rec = app.reconciliation().unwrap();
        assert_eq!(rec.uncleared_checks, Money::from_cents(4450));
    }

    #[test]
    fn test_delete_moves_cursor_back() {
        let mut app = app(sample());
        app.jump_bottom();
        app.delete_current();
        assert_eq!(app.ledger.len(), 4);
        assert_eq!(app.cursor(), Some(3));
        assert_eq!(app.ledger.account().transactions.len(), 5);

        app.jump_top();
        app.delete_current();
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.ledger.get(0).unwrap().description, "Groceries");
    }

    #[test]
    fn test_delete_last_remaining() {
        let mut app = app(ledger_of(vec![txn(1, "Only", 100, false)]));
        app.delete_current();
        assert_eq!(app.cursor(), None);
        assert_eq!(app.ledger.register_balance(), Money::from_cents(10000));
    }

    #[test]
    fn test_next_uncleared_wraps() {
        let mut app = app(sample());
        app.next_uncleared();
        assert_eq!(app.cursor(), Some(1));
        app.next_uncleared();
        assert_eq!(app.cursor(), Some(3));
        assert_eq!(app.scroll_offset, 3);
        app.next_uncleared();
        assert_eq!(app.cursor(), Some(1));
    }

    #[test]
    fn test_prev_uncleared_wraps() {
        let mut app = app(sample());
        app.prev_uncleared();
        assert_eq!(app.cursor(), Some(3));
        app.prev_uncleared();
        assert_eq!(app.cursor(), Some(1));
    }

    #[test]
    fn test_uncleared_excludes_current_row() {
        let mut app = app(ledger_of(vec![
            txn(1, "A", 100, true),
            txn(2, "B", 100, false),
            txn(3, "C", 100, true),
        ]));
        app.set_visible_rows(3);
        app.move_down();
        app.next_uncleared();
        assert_eq!(app.cursor(), Some(1));
        assert_eq!(app.scroll_offset, 0);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_find_case_insensitive_and_wraps() {
        let mut app = app(sample());
        app.jump_bottom();
        app.find("RENT");
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.last_search.as_deref(), Some("RENT"));
    }

    #[test]
    fn test_find_matches_serialized_fields() {
        let mut app = app(sample());
        app.find("2024-01-04");
        assert_eq!(app.cursor(), Some(3));
    }

    #[test]
    fn test_find_checks_current_row_last() {
        let mut app = app(ledger_of(vec![
            txn(1, "coffee beans", -100, false),
            txn(2, "rent", -100, false),
            txn(3, "coffee shop", -100, false),
        ]));
        app.find("coffee");
        assert_eq!(app.cursor(), Some(2));
        app.find_next();
        assert_eq!(app.cursor(), Some(0));

        app.find("beans");
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_find_miss_and_empty_term() {
        let mut app = app(sample());
        app.move_down();
        app.find("nowhere");
        assert_eq!(app.cursor(), Some(1));
        assert_eq!(app.last_search.as_deref(), Some("nowhere"));

        app.find("");
        assert_eq!(app.last_search.as_deref(), Some(""));
        assert_eq!(app.cursor(), Some(2));
        app.jump_bottom();
        app.find_next();
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_find_next_without_search() {
        let mut app = app(sample());
        app.find_next();
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_add_form_keeps_cursor() {
        let clock = FixedClock(today());
        let mut app = App::new(sample(), &JsonFileStore, "unused.json", &clock);
        app.move_down();
        app.start_add();
        type_answer(&mut app, ".");
        type_answer(&mut app, "Fireworks");
        type_answer(&mut app, "Fun");
        type_answer(&mut app, "-12.50");
        assert!(app.has_prompt());
        type_answer(&mut app, "Y");
        assert!(!app.has_prompt());

        assert_eq!(app.ledger.len(), 6);
        assert_eq!(app.cursor(), Some(1));
        let added = app.ledger.get(5).unwrap();
        assert_eq!(added.date, today());
        assert_eq!(added.category.as_deref(), Some("Fun"));
        assert_eq!(added.amount, Money::from_cents(-1250));
        assert!(added.cleared);
    }

    #[test]
    fn test_add_form_bad_amount_discards() {
        let mut app = app(sample());
        app.start_add();
        type_answer(&mut app, "2024-02-01");
        type_answer(&mut app, "Oops");
        type_answer(&mut app, "");
        type_answer(&mut app, "twelve");
        type_answer(&mut app, "n");

        assert_eq!(app.ledger.len(), 5);
        assert!(app.status_message.as_deref().unwrap().starts_with("Discarded"));
    }

    #[test]
    fn test_add_form_bad_date_discards() {
        let mut app = app(sample());
        app.start_add();
        for answer in ["01/02/2024", "Oops", "", "5", "n"] {
            type_answer(&mut app, answer);
        }
        assert_eq!(app.ledger.len(), 5);
    }

    #[test]
    fn test_edit_form() {
        let mut app = app(sample());
        app.move_down();
        app.start_edit();
        type_answer(&mut app, "");
        type_answer(&mut app, "Market");
        type_answer(&mut app, "Food");
        type_answer(&mut app, "");
        assert!(!app.has_prompt());

        let edited = app.ledger.get(1).unwrap();
        assert_eq!(edited.description, "Market");
        assert_eq!(edited.category.as_deref(), Some("Food"));
        assert_eq!(edited.amount, Money::from_cents(-4000));
        assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_edit_single_space_clears_category() {
        let mut ledger = sample();
        ledger.get_mut(0).unwrap().category = Some("Housing".into());
        let mut app = app(ledger);
        app.start_edit();
        type_answer(&mut app, "");
        type_answer(&mut app, "");
        type_answer(&mut app, " ");
        type_answer(&mut app, "");
        assert_eq!(app.ledger.get(0).unwrap().category, None);
    }

    #[test]
    fn test_edit_bad_amount_changes_nothing() {
        let mut app = app(sample());
        app.start_edit();
        type_answer(&mut app, "");
        type_answer(&mut app, "Changed");
        type_answer(&mut app, "");
        type_answer(&mut app, "1.2.3");
        assert_eq!(app.ledger.get(0).unwrap().description, "Rent");
    }

    #[test]
    fn test_cancel_prompt_discards() {
        let mut app = app(sample());
        app.start_add();
        type_answer(&mut app, ".");
        app.cancel_prompt();
        assert!(!app.has_prompt());
        assert_eq!(app.ledger.len(), 5);
    }

    #[test]
    fn test_bank_balance_prompt() {
        let mut app = app(sample());
        app.open_prompt(Prompt::bank_balance(None));
        type_answer(&mut app, "bogus");
        assert_eq!(app.bank_balance, None);
        assert!(app.status_message.is_some());

        app.open_prompt(Prompt::bank_balance(None));
        type_answer(&mut app, "1700");
        assert_eq!(app.bank_balance, Some(Money::from_cents(170000)));
    }

    #[test]
    fn test_find_prompt() {
        let mut app = app(sample());
        app.open_prompt(Prompt::find());
        type_answer(&mut app, "coffee");
        assert_eq!(app.cursor(), Some(3));
    }

    #[test]
    fn test_save_and_quit_writes_deleted_records() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        let store = JsonFileStore;

        let mut app = App::new(sample(), &store, &path, &CLOCK);
        app.delete_current();
        app.save_and_quit().unwrap();
        assert!(app.should_quit);

        let saved = store.load(&path).unwrap();
        assert_eq!(saved.transactions.len(), 5);
        assert!(saved.transactions[0].is_deleted());
        assert_eq!(Ledger::new(saved).len(), 4);
    }
}
