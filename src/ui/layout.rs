use crate::domain::Status;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub entry_area: Rect,
    pub column_areas: Vec<Rect>,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Entry bar: quick entry (3 rows, bordered)
/// - Board: one column per status, split evenly
/// - Bottom: status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Quick entry
            Constraint::Min(0),    // Board columns
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let per_column = (100 / Status::ALL.len() as u16).max(1);
    let column_constraints: Vec<Constraint> = Status::ALL
        .iter()
        .map(|_| Constraint::Percentage(per_column))
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(vertical[2]);

    MainLayout {
        keybindings_area: vertical[0],
        entry_area: vertical[1],
        column_areas: columns.to_vec(),
        status_area: vertical[3],
    }
}

/// Create centered modal area (for the task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(18),
            Constraint::Percentage(20),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
