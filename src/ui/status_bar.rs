use crate::app::AppState;
use crate::ui::styles::{hint_style, status_style};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the one-line status bar: feedback from the last operation,
/// or a count summary when there is none
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = match &app.status_message {
        Some(message) => {
            Paragraph::new(Span::styled(format!(" {}", message), status_style()))
        }
        None => {
            let marked = app.marked.len();
            let summary = if marked > 0 {
                format!(" {} tasks · {} marked", app.store.len(), marked)
            } else {
                format!(" {} tasks", app.store.len())
            };
            Paragraph::new(Span::styled(summary, hint_style()))
        }
    };

    f.render_widget(paragraph, area);
}
