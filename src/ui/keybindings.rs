use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("←/→ column   "),
        Span::raw("Shift+←/→ move   "),
        Span::raw("i quick add   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("Space mark   "),
        Span::raw("d delete   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
