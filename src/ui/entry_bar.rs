use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the quick-entry bar. Enter creates a To-Do task due today.
pub fn render_entry_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let active = app.ui_mode == UiMode::QuickEntry;

    let line = if active {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.entry.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ])
    } else {
        Line::from(Span::styled(
            "press i to add a quick To-Do",
            hint_style(),
        ))
    };

    let border = if active {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" New task ", title_style())),
    );

    f.render_widget(paragraph, area);
}
