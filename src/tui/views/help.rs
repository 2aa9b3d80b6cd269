//! Key help column

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::keybindings::{in_context, KeyContext};

/// Render the key help column
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(help_lines()).block(block);
    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Navigation, KeyContext::Action] {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        lines.extend(in_context(context).map(|k| key_line(k.keys, k.description)));
    }

    lines
}

/// Create a key help line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:6}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
