pub mod board_pane;
pub mod entry_bar;
pub mod keybindings;
pub mod layout;
pub mod status_bar;
pub mod styles;
pub mod task_form;

use crate::app::AppState;
use board_pane::render_column;
use entry_bar::render_entry_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use status_bar::render_status_bar;
use task_form::render_task_form;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_entry_bar(f, app, layout.entry_area);

    for (column, area) in layout.column_areas.iter().enumerate() {
        render_column(f, app, column, *area);
    }

    render_status_bar(f, app, layout.status_area);

    // Task form modal sits on top of everything
    if app.form.is_some() {
        render_task_form(f, app, size);
    }
}
