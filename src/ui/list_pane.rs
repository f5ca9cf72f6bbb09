use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, editing_style, selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Checkbox glyph for a task
fn checkbox(completed: bool, ascii: bool) -> &'static str {
    match (completed, ascii) {
        (true, false) => "☑",
        (false, false) => "☐",
        (true, true) => "[x]",
        (false, true) => "[ ]",
    }
}

/// Render the task list (the filtered, sorted view)
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            let scratch = if app.is_editing(&task.id) {
                Some(app.active_text())
            } else {
                None
            };
            ListItem::new(create_task_line(task, scratch, app.use_ascii))
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" To-Do List ({}) ", date);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected_index));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task.
/// A task under edit shows its scratch text instead of the committed text.
fn create_task_line(task: &Task, scratch: Option<&str>, ascii: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {} ", checkbox(task.completed, ascii)))];

    match scratch {
        Some(text) => {
            spans.push(Span::styled(format!("✎ {}", text), editing_style()));
        }
        None if task.completed => {
            spans.push(Span::styled(task.text.clone(), done_style()));
        }
        None => {
            spans.push(Span::styled(task.text.clone(), default_style()));
        }
    }

    Line::from(spans)
}
