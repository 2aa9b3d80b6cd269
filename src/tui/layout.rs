//! Layout definitions for the TUI
//!
//! Reconciliation panel across the top, register on the left, key help on
//! the right, prompt/status line at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the key-help column
pub const HELP_WIDTH: u16 = 24;

/// Rows above the first register entry (column headings)
pub const REGISTER_HEADER_ROWS: u16 = 1;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Reconciliation figures
    pub reconcile: Rect,
    /// Register table, headings included
    pub register: Rect,
    /// Key help
    pub help: Rect,
    /// Status or prompt line
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    ///
    /// `reconcile_lines` is how many lines the reconciliation panel shows;
    /// one blank line separates it from the register.
    pub fn new(area: Rect, reconcile_lines: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(reconcile_lines + 1), // Reconciliation
                Constraint::Min(1),                      // Register + help
                Constraint::Length(1),                   // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),             // Register
                Constraint::Length(HELP_WIDTH), // Help
            ])
            .split(vertical[1]);

        Self {
            reconcile: vertical[0],
            register: horizontal[0],
            help: horizontal[1],
            status_bar: vertical[2],
        }
    }

    /// Register entries that fit below the headings
    pub fn register_rows(&self) -> usize {
        self.register.height.saturating_sub(REGISTER_HEADER_ROWS) as usize
    }
}
