//! Reconciliation panel
//!
//! The six reconcile figures once a bank balance is known, otherwise a hint.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const NOT_ENTERED: &str = "Bank balance not entered (press r)";

/// Lines the panel needs
pub fn line_count(app: &App) -> u16 {
    match app.reconciliation() {
        Some(rec) => rec.lines().len() as u16,
        None => 1,
    }
}

/// Render the reconciliation panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match app.reconciliation() {
        Some(rec) => {
            let balanced = rec.is_balanced();
            rec.lines()
                .iter()
                .map(|(label, value)| {
                    let value_style = if *label == "Difference" {
                        let color = if balanced { Color::Green } else { Color::Red };
                        Style::default().fg(color).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Cyan)),
                        Span::styled(format!("{:>12}", value), value_style),
                    ])
                })
                .collect()
        }
        None => vec![Line::from(Span::styled(
            NOT_ENTERED,
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Account, Money, Transaction};
    use crate::services::Ledger;
    use crate::storage::JsonFileStore;
    use crate::tui::views::test_support::{draw, screen_text};
    use chrono::NaiveDate;

    const CLOCK: FixedClock = FixedClock(NaiveDate::MIN);

    fn app() -> App<'static> {
        let mut account = Account::new(Money::from_cents(10000));
        account.transactions.push(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Check",
            Money::from_cents(-2500),
        ));
        App::new(Ledger::new(account), &JsonFileStore, "unused.json", &CLOCK)
    }

    #[test]
    fn test_hint_without_bank_balance() {
        let mut app = app();
        assert_eq!(line_count(&app), 1);
        let screen = screen_text(&draw(&mut app, 80, 12));
        assert!(screen[0].starts_with(NOT_ENTERED));
    }

    #[test]
    fn test_figures_with_bank_balance() {
        let mut app = app().with_bank_balance(Some(Money::from_cents(10000)));
        assert_eq!(line_count(&app), 6);
        let screen = screen_text(&draw(&mut app, 80, 16));
        assert!(screen[0].starts_with(&format!("{:<20}{:>12}", "Bank balance", "100.00")));
        assert!(screen[1].contains("25.00"));
        assert!(screen[3].contains("75.00"));
        assert!(screen[5].starts_with(&format!("{:<20}{:>12}", "Difference", "0.00")));
    }
}
