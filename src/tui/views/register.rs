//! Transaction register view
//!
//! One row per visible transaction with its running balance. Only the rows
//! from the scroll offset down are drawn; the cursor row is highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::reports::{format_optional, truncate, CLEARED_MARK};
use crate::tui::app::App;

const DESCRIPTION_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 12;

/// Render the transaction register
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.ledger.is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(1),                        // Cleared
        Constraint::Length(10),                       // Date
        Constraint::Length(DESCRIPTION_WIDTH as u16), // Description
        Constraint::Length(CATEGORY_WIDTH as u16),    // Category
        Constraint::Length(10),                       // Debit
        Constraint::Length(10),                       // Credit
        Constraint::Length(12),                       // Balance
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Date").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Category").style(bold),
        Cell::from(format!("{:>10}", "Debit")).style(bold),
        Cell::from(format!("{:>10}", "Credit")).style(bold),
        Cell::from(format!("{:>12}", "Balance")).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow));

    let cursor = app.cursor();
    let balances = app.ledger.running_balances();

    let rows: Vec<Row> = app
        .ledger
        .transactions()
        .zip(balances)
        .enumerate()
        .skip(app.scroll_offset)
        .take(app.visible_rows())
        .map(|(index, (txn, balance))| {
            let row_style = if Some(index) == cursor {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let balance_style = if balance.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(if txn.cleared { CLEARED_MARK } else { " " })
                    .style(Style::default().fg(Color::Green)),
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(truncate(&txn.description, DESCRIPTION_WIDTH)),
                Cell::from(truncate(txn.category.as_deref().unwrap_or(""), CATEGORY_WIDTH)),
                Cell::from(format!(
                    "{:>10}",
                    format_optional(txn.is_debit().then(|| -txn.amount))
                )),
                Cell::from(format!(
                    "{:>10}",
                    format_optional(txn.is_credit().then_some(txn.amount))
                )),
                Cell::from(format!("{:>12}", balance)).style(balance_style),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, area);
}
