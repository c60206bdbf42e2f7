use crate::app::AppState;
use crate::domain::Status;
use crate::ui::styles::{
    border_style, default_style, focused_border_style, marked_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render one board column: the tasks occupying that status, with the
/// highlighted row and deletion marks visible
pub fn render_column(f: &mut Frame, app: &AppState, column: usize, area: Rect) {
    let status = Status::ALL[column];
    let tasks = app.store.tasks_in(status);
    let today = chrono::Local::now().date_naive();
    let is_focused = column == app.focused_column;
    let selected = app.clamped_row(column);

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(row, task)| {
            let mark = if app.marked.contains(&task.title) {
                "✓ "
            } else {
                "  "
            };
            let line = Line::from(vec![
                Span::styled(mark.to_string(), marked_style()),
                Span::raw(task.display_line(today)),
            ]);

            let style = if is_focused && row == selected {
                selected_style()
            } else if app.marked.contains(&task.title) {
                marked_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" {} ({}) ", status.name(), tasks.len());
    let border = if is_focused {
        focused_border_style()
    } else {
        border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
