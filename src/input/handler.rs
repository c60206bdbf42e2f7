use crate::app::{AppState, FORM_FIELD_COMMENTS};
use crate::domain::{Direction, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::QuickEntry => handle_quick_entry_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Row selection within the focused column
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Column focus (Shift moves the task instead)
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.shift_selected(Direction::Left);
            } else {
                app.focus_left();
            }
            Ok(false)
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.shift_selected(Direction::Right);
            } else {
                app.focus_right();
            }
            Ok(false)
        }

        // Move the selected task between columns (vim-flavored aliases)
        KeyCode::Char('H') => {
            app.shift_selected(Direction::Left);
            Ok(false)
        }
        KeyCode::Char('L') => {
            app.shift_selected(Direction::Right);
            Ok(false)
        }

        // Quick entry for a minimal To-Do task
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.start_quick_entry();
            Ok(false)
        }

        // Add via the full task form
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit the selected task (double-click in the original)
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
            app.start_edit_task();
            Ok(false)
        }

        // Toggle the multi-selection mark
        KeyCode::Char(' ') => {
            app.toggle_mark();
            Ok(false)
        }

        // Delete the marked tasks (or the highlighted one)
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selection();
            Ok(false)
        }

        // Clear marks and any status message
        KeyCode::Esc => {
            app.marked.clear();
            app.clear_report();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the quick-entry bar has focus
fn handle_quick_entry_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_quick_entry();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_quick_entry();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.entry.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.entry.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the task form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Enter inserts a newline only in the comments field,
        // everywhere else it submits
        KeyCode::Enter => {
            let in_comments = app
                .form
                .as_ref()
                .map_or(false, |f| f.editing_field == FORM_FIELD_COMMENTS);
            if in_comments {
                app.form_newline();
            } else {
                app.submit_form();
            }
            Ok(false)
        }

        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }

        KeyCode::Tab => {
            app.form_next_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DueDate, Status, Task, TaskStore};
    use crate::persistence::BoardMetadata;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shifted(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn app_with_task(title: &str, status: Status) -> AppState {
        let tasks = vec![Task::new(
            title.to_string(),
            vec![],
            status,
            DueDate::Unspecified,
        )];
        AppState::new(TaskStore::from_tasks(tasks), BoardMetadata::default())
    }

    #[test]
    fn test_quit_key() {
        let mut app = app_with_task("Task", Status::Todo);
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_arrow_keys_change_focus_not_tasks() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.focused_status(), Status::InProgress);
        assert_eq!(app.store.get("Task").unwrap().status, Status::Todo);
    }

    #[test]
    fn test_shift_arrow_moves_task() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, shifted(KeyCode::Left)).unwrap();
        // Wrapped left from the first column to the last
        assert_eq!(app.store.get("Task").unwrap().status, Status::Done);
    }

    #[test]
    fn test_quick_entry_flow() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::QuickEntry);

        for c in "New one".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.store.contains("New one"));
    }

    #[test]
    fn test_mark_and_delete() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.marked.contains("Task"));
        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_form_enter_submits_outside_comments() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Formed".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.store.contains("Formed"));
    }

    #[test]
    fn test_form_enter_adds_newline_in_comments() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap(); // move to comments
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.comments, "x\ny");
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_form_escape_cancels() {
        let mut app = app_with_task("Task", Status::Todo);
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
