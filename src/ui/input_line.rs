use crate::app::AppState;
use crate::domain::{count_completed, UiMode};
use crate::ui::styles::{
    border_style, focused_border_style, hint_style, input_style, mode_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title of the input box
fn input_title(app: &AppState) -> &'static str {
    if app.edit.is_some() {
        " Edit task "
    } else {
        " Add a new task "
    }
}

/// Render the text input box for new or edited task content
pub fn render_input_line(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::TextEntry;

    let mut spans = vec![
        Span::raw("> "),
        Span::styled(app.active_text().to_string(), input_style()),
    ];
    if focused {
        spans.push(Span::styled("█", input_style())); // Cursor
    }

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(input_title(app), title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Status line: active filter and sort, plus counts
pub fn status_line(app: &AppState) -> Line<'static> {
    let (total, done) = count_completed(&app.tasks);
    let shown = app.visible_tasks().len();

    Line::from(vec![
        Span::raw(" Filter: "),
        Span::styled(app.filter.label(), mode_style()),
        Span::raw("   Sort: "),
        Span::styled(app.sort.label(), mode_style()),
        Span::styled(
            format!("   {} shown · {} done / {} total", shown, done, total),
            hint_style(),
        ),
    ])
}

pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIds;
    use crate::domain::FilterMode;
    use crate::persistence::MemoryStore;

    fn create_test_app() -> AppState {
        let mut app = AppState::load(
            Box::new(MemoryStore::new()),
            Box::new(SequentialIds::default()),
        );
        app.add_task("one".to_string());
        app.add_task("two".to_string());
        app.toggle_complete("1");
        app
    }

    #[test]
    fn test_status_line_counts() {
        let mut app = create_test_app();
        app.set_filter(FilterMode::Incomplete);

        let text: String = status_line(&app)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Filter: Incomplete"));
        assert!(text.contains("Sort: No sort"));
        assert!(text.contains("1 shown · 1 done / 2 total"));
    }

    #[test]
    fn test_input_title_follows_edit_session() {
        let mut app = create_test_app();
        assert_eq!(input_title(&app), " Add a new task ");
        app.begin_edit("2");
        assert_eq!(input_title(&app), " Edit task ");
    }
}
