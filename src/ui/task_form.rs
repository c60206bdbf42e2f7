use crate::app::{AppState, FORM_FIELD_COMMENTS, FORM_FIELD_DUE, FORM_FIELD_TITLE};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit task form as a centered modal
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let title_text = if form.original_title.is_some() {
        " Edit Task "
    } else {
        " Add Task "
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    push_field(
        &mut lines,
        "Title:",
        &form.title,
        form.editing_field == FORM_FIELD_TITLE,
    );
    push_multiline_field(
        &mut lines,
        "Comments (blank line separates):",
        &form.comments,
        form.editing_field == FORM_FIELD_COMMENTS,
    );
    push_field(
        &mut lines,
        "Due date (dd.mm.yy, empty for none):",
        &form.due,
        form.editing_field == FORM_FIELD_DUE,
    );

    lines.push(Line::raw(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            error_style(),
        )));
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw(
        "Tab switch field  ·  Enter submit (newline in comments)  ·  Esc cancel",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, editing: bool) {
    let label = if editing {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label));

    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if editing {
        spans.push(Span::styled("█", modal_title_style()));
    }
    lines.push(Line::from(spans));
    lines.push(Line::raw(""));
}

fn push_multiline_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, editing: bool) {
    let label = if editing {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label));

    let mut rows: Vec<&str> = value.lines().collect();
    if rows.is_empty() {
        rows.push("");
    }
    let last = rows.len() - 1;
    for (i, row) in rows.into_iter().enumerate() {
        let mut spans = vec![
            Span::raw("> "),
            Span::styled(row.to_string(), modal_title_style()),
        ];
        if editing && i == last && !value.ends_with('\n') {
            spans.push(Span::styled("█", modal_title_style()));
        }
        lines.push(Line::from(spans));
    }
    // Cursor sits on a fresh line after a trailing newline
    if editing && value.ends_with('\n') {
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled("█", modal_title_style()),
        ]));
    }
    lines.push(Line::raw(""));
}
