//! TUI Views module
//!
//! The single screen: reconciliation panel, register, key help, and the
//! status line.

pub mod help;
pub mod reconcile;
pub mod register;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area(), reconcile::line_count(app));
    app.set_visible_rows(layout.register_rows());

    reconcile::render(frame, app, layout.reconcile);
    register::render(frame, app, layout.register);
    help::render(frame, layout.help);
    status_bar::render(frame, app, layout.status_bar);
}
