use crate::app::{AppState, Submission};
use crate::domain::{FilterMode, SortMode, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::TextEntry => handle_text_entry_mode(app, key),
    }
}

/// Handle keys while navigating the list
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle complete
        KeyCode::Char(' ') => app.toggle_selected(),

        // Edit selected task in the input line
        KeyCode::Char('e') | KeyCode::Char('E') => app.edit_selected(),

        // Remove
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.remove_selected(),

        // Focus the input line
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => {
            app.ui_mode = UiMode::TextEntry;
        }

        // Filter
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Completed),
        KeyCode::Char('3') => app.set_filter(FilterMode::Incomplete),
        KeyCode::Char('f') => app.cycle_filter(),

        // Sort
        KeyCode::Char('0') => app.set_sort(SortMode::None),
        KeyCode::Char('<') => app.set_sort(SortMode::Ascending),
        KeyCode::Char('>') => app.set_sort(SortMode::Descending),
        KeyCode::Char('s') => app.cycle_sort(),

        // Drop an edit left open
        KeyCode::Esc => app.cancel_edit(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing into the input line
fn handle_text_entry_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            if app.submit() == Submission::Saved {
                app.ui_mode = UiMode::Normal;
            }
        }

        // Cancel an edit, or just leave the input line
        KeyCode::Esc => {
            app.cancel_edit();
            app.ui_mode = UiMode::Normal;
        }

        KeyCode::Backspace => app.input_backspace(),

        KeyCode::Char(c) => app.input_push_char(c),

        _ => {}
    }
    false
}
