use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hint text for the given mode
pub fn hints_for(mode: UiMode, editing: bool) -> Line<'static> {
    match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("space done   "),
            Span::raw("a add   "),
            Span::raw("e edit   "),
            Span::raw("d remove   "),
            Span::raw("1/2/3 all/done/open   "),
            Span::raw("0 / < / > sort   "),
            Span::raw("q quit"),
        ]),
        UiMode::TextEntry if editing => Line::from(vec![
            Span::raw(" Enter save   "),
            Span::raw("Esc cancel edit"),
        ]),
        UiMode::TextEntry => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc back to list"),
        ]),
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, editing: bool, area: Rect) {
    let paragraph = Paragraph::new(hints_for(mode, editing)).style(hint_style());
    f.render_widget(paragraph, area);
}
