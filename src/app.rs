use crate::domain::{Direction, DueDate, Status, TaskStore, UiMode};
use crate::persistence::{
    atomic_write, board_file, meta_file, save_metadata, serialize_board, BoardMetadata,
};
use anyhow::Result;
use std::collections::BTreeSet;

/// Which task form field currently has the cursor
pub const FORM_FIELD_TITLE: usize = 0;
pub const FORM_FIELD_COMMENTS: usize = 1;
pub const FORM_FIELD_DUE: usize = 2;

/// State of the add/edit task form
#[derive(Debug, Clone)]
pub struct TaskFormState {
    /// Title of the task being edited; None when adding a new one
    pub original_title: Option<String>,
    pub title: String,
    /// Comments as shown in the form: blank-line separated blocks
    pub comments: String,
    /// Due date in wire format, or empty for unspecified
    pub due: String,
    pub editing_field: usize,
    /// Validation error from the last submit attempt
    pub error: Option<String>,
}

impl TaskFormState {
    fn empty(due: String) -> Self {
        Self {
            original_title: None,
            title: String::new(),
            comments: String::new(),
            due,
            editing_field: FORM_FIELD_TITLE,
            error: None,
        }
    }

    /// Mutable reference to whichever field is being edited
    fn active_field(&mut self) -> &mut String {
        match self.editing_field {
            FORM_FIELD_COMMENTS => &mut self.comments,
            FORM_FIELD_DUE => &mut self.due,
            _ => &mut self.title,
        }
    }
}

/// Main application state: the store plus board-view bookkeeping
pub struct AppState {
    pub store: TaskStore,
    pub ui_mode: UiMode,
    /// Index into Status::ALL of the focused column
    pub focused_column: usize,
    /// Highlighted row per column
    pub selected_row: [usize; Status::ALL.len()],
    /// Titles marked for batch deletion, across all columns
    pub marked: BTreeSet<String>,
    /// Quick-entry buffer
    pub entry: String,
    pub form: Option<TaskFormState>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(store: TaskStore, metadata: BoardMetadata) -> Self {
        Self {
            store,
            ui_mode: UiMode::Normal,
            focused_column: metadata.focused_column.min(Status::ALL.len() - 1),
            selected_row: [0; Status::ALL.len()],
            marked: BTreeSet::new(),
            entry: String::new(),
            form: None,
            status_message: None,
        }
    }

    pub fn focused_status(&self) -> Status {
        Status::ALL[self.focused_column]
    }

    /// Titles in the focused column, in render order. Rows carry the title
    /// directly so interaction never has to parse identity back out of the
    /// formatted display text.
    pub fn focused_titles(&self) -> Vec<String> {
        self.store
            .tasks_in(self.focused_status())
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    /// The highlighted task's title, if the focused column has any rows
    pub fn selected_title(&self) -> Option<String> {
        let titles = self.focused_titles();
        if titles.is_empty() {
            return None;
        }
        let row = self.selected_row[self.focused_column].min(titles.len() - 1);
        Some(titles[row].clone())
    }

    /// Clamped selected row for a column (render + navigation helper)
    pub fn clamped_row(&self, column: usize) -> usize {
        let count = self.store.tasks_in(Status::ALL[column]).len();
        if count == 0 {
            0
        } else {
            self.selected_row[column].min(count - 1)
        }
    }

    pub fn report<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    pub fn clear_report(&mut self) {
        self.status_message = None;
    }

    // --- navigation ---------------------------------------------------

    pub fn focus_left(&mut self) {
        self.focused_column =
            (self.focused_column + Status::ALL.len() - 1) % Status::ALL.len();
    }

    pub fn focus_right(&mut self) {
        self.focused_column = (self.focused_column + 1) % Status::ALL.len();
    }

    pub fn move_selection_up(&mut self) {
        let row = self.clamped_row(self.focused_column);
        self.selected_row[self.focused_column] = row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let count = self.store.tasks_in(self.focused_status()).len();
        if count == 0 {
            return;
        }
        let row = self.clamped_row(self.focused_column);
        self.selected_row[self.focused_column] = (row + 1).min(count - 1);
    }

    // --- quick entry ---------------------------------------------------

    pub fn start_quick_entry(&mut self) {
        self.ui_mode = UiMode::QuickEntry;
        self.entry.clear();
        self.clear_report();
    }

    pub fn cancel_quick_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
        self.entry.clear();
    }

    /// Enter on the quick-entry bar: a minimal To-Do task due today.
    /// An empty title is ignored, matching the original entry field.
    pub fn submit_quick_entry(&mut self) {
        let title = self.entry.trim().to_string();
        if title.is_empty() {
            self.cancel_quick_entry();
            return;
        }

        let today = today_wire();
        match self
            .store
            .add(&title, Vec::new(), Status::ALL[0].name(), &today)
        {
            Ok(()) => self.report(format!("Added '{}'", title)),
            Err(e) => self.report(e.to_string()),
        }
        self.cancel_quick_entry();
    }

    // --- task form -----------------------------------------------------

    pub fn start_add_task(&mut self) {
        // Pre-fill today's date, the original dialog's default
        self.form = Some(TaskFormState::empty(today_wire()));
        self.ui_mode = UiMode::AddingTask;
        self.clear_report();
    }

    pub fn start_edit_task(&mut self) {
        let Some(title) = self.selected_title() else {
            self.report("Nothing selected");
            return;
        };
        let Some(task) = self.store.get(&title) else {
            return;
        };

        self.form = Some(TaskFormState {
            original_title: Some(task.title.clone()),
            title: task.title.clone(),
            comments: task.comments_for_display(),
            due: match task.due {
                DueDate::Unspecified => String::new(),
                _ => task.due.to_wire(),
            },
            editing_field: FORM_FIELD_TITLE,
            error: None,
        });
        self.ui_mode = UiMode::EditingTask;
        self.clear_report();
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.editing_field = (form.editing_field + 1) % 3;
        }
    }

    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = self.form.as_mut() {
            form.active_field().push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.active_field().pop();
        }
    }

    /// Newline is only meaningful inside the comments field
    pub fn form_newline(&mut self) {
        if let Some(form) = self.form.as_mut() {
            if form.editing_field == FORM_FIELD_COMMENTS {
                form.comments.push('\n');
            }
        }
    }

    /// Submit the form: add when it was opened empty, edit (rename
    /// included) when it was opened on an existing task. Validation
    /// failures keep the form open with the error shown.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };

        let title = form.title.trim().to_string();
        if title.is_empty() {
            if let Some(f) = self.form.as_mut() {
                f.error = Some("Title must not be empty".to_string());
            }
            return;
        }

        let comments = split_comment_blocks(&form.comments);
        let status = match &form.original_title {
            // Edits keep the task's column; the form does not change it
            Some(old) => self
                .store
                .get(old)
                .map(|t| t.status)
                .unwrap_or(Status::ALL[0]),
            None => Status::ALL[0],
        };

        let result = match &form.original_title {
            Some(old) => self
                .store
                .edit(old, &title, comments, status.name(), &form.due),
            None => self.store.add(&title, comments, status.name(), &form.due),
        };

        match result {
            Ok(()) => {
                // Keep marks pointing at live titles after a rename
                if let Some(old) = &form.original_title {
                    if self.marked.remove(old) {
                        self.marked.insert(title.clone());
                    }
                }
                self.report(format!("Saved '{}'", title));
                self.cancel_form();
            }
            Err(e) => {
                if let Some(f) = self.form.as_mut() {
                    f.error = Some(e.to_string());
                }
            }
        }
    }

    // --- selection marks & delete ---------------------------------------

    pub fn toggle_mark(&mut self) {
        let Some(title) = self.selected_title() else {
            return;
        };
        if !self.marked.remove(&title) {
            self.marked.insert(title);
        }
    }

    /// Delete every marked task, or the highlighted one when nothing is
    /// marked. One persistence rewrite covers the whole batch.
    pub fn delete_selection(&mut self) {
        let titles: Vec<String> = if self.marked.is_empty() {
            match self.selected_title() {
                Some(title) => vec![title],
                None => {
                    self.report("Nothing selected");
                    return;
                }
            }
        } else {
            self.marked.iter().cloned().collect()
        };

        let removed = self.store.remove_all(&titles);
        self.marked.clear();
        self.report(format!(
            "Deleted {} task{}",
            removed,
            if removed == 1 { "" } else { "s" }
        ));
    }

    // --- column moves ----------------------------------------------------

    /// Move the highlighted task one column in the given direction,
    /// wrapping cyclically, and follow it with the focus
    pub fn shift_selected(&mut self, direction: Direction) {
        let Some(title) = self.selected_title() else {
            self.report("Nothing selected");
            return;
        };
        match self.store.shift(&title, direction) {
            Ok(new_status) => {
                self.focused_column = new_status.index();
                // Land the selection on the moved task in its new column
                let titles = self.focused_titles();
                if let Some(row) = titles.iter().position(|t| t == &title) {
                    self.selected_row[self.focused_column] = row;
                }
                self.report(format!("'{}' → {}", title, new_status.name()));
            }
            Err(e) => self.report(e.to_string()),
        }
    }

    // --- persistence -----------------------------------------------------

    /// Rewrite the board file if anything changed. A failure is reported
    /// by the caller; the in-memory state stays valid (and dirty, so the
    /// next attempt retries the write).
    pub fn save(&mut self) -> Result<()> {
        if !self.store.is_dirty() {
            return Ok(());
        }
        let content = serialize_board(self.store.tasks());
        atomic_write(board_file()?, &content)?;
        self.store.mark_clean();
        Ok(())
    }

    pub fn save_metadata(&self) -> Result<()> {
        let metadata = BoardMetadata {
            focused_column: self.focused_column,
        };
        save_metadata(meta_file()?, &metadata)
    }
}

/// Today's date in the board wire format
fn today_wire() -> String {
    chrono::Local::now()
        .date_naive()
        .format(crate::domain::DATE_FORMAT)
        .to_string()
}

/// Split the form's comments text into the stored comment list: blocks
/// separated by blank lines, inner newlines collapsed so the comma-joined
/// wire format stays one line per task
fn split_comment_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        blocks.push(current.join(" "));
    }

    blocks
}
