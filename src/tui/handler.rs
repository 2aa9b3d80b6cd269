//! Event handler for the TUI
//!
//! Routes keyboard events to the prompt when one is open, otherwise to the
//! register commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::dialogs::Prompt;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // The next draw picks up the new size
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Raw mode swallows SIGINT, so Ctrl-C is read here as a key
    if is_ctrl(&key, 'c') {
        app.quit_without_saving();
    } else if app.has_prompt() {
        handle_prompt_key(app, key);
    } else {
        handle_register_key(app, key);
    }
}

/// Handle keys while browsing the register
fn handle_register_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('t') => app.jump_top(),
        KeyCode::Char('b') => app.jump_bottom(),
        KeyCode::Char('n') => app.next_uncleared(),
        KeyCode::Char('N') => app.prev_uncleared(),
        KeyCode::Char('F') => app.open_prompt(Prompt::find()),
        KeyCode::Char('f') => app.find_next(),

        // Actions
        KeyCode::Char(' ') => app.toggle_cleared(),
        KeyCode::Char('r') => app.open_prompt(Prompt::bank_balance(app.bank_balance)),
        KeyCode::Char('a') => app.start_add(),
        KeyCode::Char('e') => app.start_edit(),
        KeyCode::Char('d') => app.delete_current(),

        _ => {}
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Handle keys while a prompt is open
fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        code => {
            let Some(prompt) = app.prompt.as_mut() else {
                return;
            };
            let input = prompt.input_mut();
            match code {
                KeyCode::Char('u') if is_ctrl(&key, 'u') => input.clear(),
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}
