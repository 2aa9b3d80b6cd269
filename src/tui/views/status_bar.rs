//! Status bar view
//!
//! The bottom line shows the open prompt while one is active, otherwise the
//! last status message and the account file.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(prompt) = &app.prompt {
        frame.render_widget(prompt.input(), area);
        return;
    }

    let mut spans = vec![Span::styled(
        format!(" {} ", app.account_path().display()),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
