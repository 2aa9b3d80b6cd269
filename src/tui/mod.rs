//! Terminal User Interface module
//!
//! The interactive register: browse transactions, mark them cleared, add,
//! edit and delete entries, search, and reconcile against a bank balance.
//! Changes are saved when the session quits.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
