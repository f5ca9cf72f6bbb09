pub mod input_line;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use input_line::{render_input_line, render_status_line};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size(), app.show_keybindings);

    if let Some(area) = layout.keybindings_area {
        render_keybindings(f, app.ui_mode, app.edit.is_some(), area);
    }

    render_list_pane(f, app, layout.list_area);
    render_status_line(f, app, layout.status_area);
    render_input_line(f, app, layout.input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIds;
    use crate::persistence::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_shows_tasks_and_input() {
        let mut app = AppState::load(
            Box::new(MemoryStore::new()),
            Box::new(SequentialIds::default()),
        );
        app.use_ascii = true;
        app.add_task("Water plants".to_string());
        app.input = "draft".to_string();

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("[ ] Water plants"));
        assert!(text.contains("> draft"));
        assert!(text.contains("Filter: All"));
    }
}
