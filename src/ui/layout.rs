use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Option<Rect>,
    pub list_area: Rect,
    pub status_area: Rect,
    pub input_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row, optional)
/// - Task list (fills the rest)
/// - Status line: filter, sort and counts (1 row)
/// - Input box (3 rows, bordered)
pub fn create_layout(area: Rect, show_keybindings: bool) -> MainLayout {
    let hint_height = if show_keybindings { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hint_height), // Keybindings bar
            Constraint::Min(0),              // Task list
            Constraint::Length(1),           // Status line
            Constraint::Length(3),           // Input box
        ])
        .split(area);

    MainLayout {
        keybindings_area: show_keybindings.then_some(chunks[0]),
        list_area: chunks[1],
        status_area: chunks[2],
        input_area: chunks[3],
    }
}
