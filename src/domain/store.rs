use super::enums::{Direction, Status};
use super::task::{DueDate, Task};
use std::collections::BTreeMap;
use thiserror::Error;

/// Rejections a store mutation can produce. Every variant leaves the
/// store exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
    #[error("date '{0}' does not match the dd.mm.yy format")]
    InvalidDate(String),
    #[error("no task titled '{0}'")]
    NotFound(String),
}

/// In-memory mapping from task title to task record.
///
/// The store knows nothing about presentation or files; callers watch the
/// dirty flag and rewrite the persisted board after each mutation.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: BTreeMap<String, Task>,
    dirty: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the store from already-validated tasks (startup load path)
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let tasks = tasks
            .into_iter()
            .map(|task| (task.title.clone(), task))
            .collect();
        Self {
            tasks,
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Task> {
        self.tasks.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.tasks.contains_key(title)
    }

    /// All tasks in title order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Tasks occupying one column, in title order
    pub fn tasks_in(&self, status: Status) -> Vec<&Task> {
        self.tasks.values().filter(|t| t.status == status).collect()
    }

    /// True when a mutation happened since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Validate status and due date strings and insert the task.
    /// An existing task with the same title is overwritten silently.
    pub fn add(
        &mut self,
        title: &str,
        comments: Vec<String>,
        status: &str,
        due: &str,
    ) -> Result<(), StoreError> {
        let status = Status::from_name(status)
            .ok_or_else(|| StoreError::UnknownStatus(status.trim().to_string()))?;
        let due =
            DueDate::parse(due).ok_or_else(|| StoreError::InvalidDate(due.trim().to_string()))?;

        self.insert(Task::new(title.to_string(), comments, status, due));
        Ok(())
    }

    /// Insert a pre-validated task, overwriting any task with the same title
    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.title.clone(), task);
        self.dirty = true;
    }

    /// Replace a task wholesale. Rename is delete-then-insert: no history
    /// of the prior record survives. Validation failures leave the old
    /// record untouched.
    pub fn edit(
        &mut self,
        old_title: &str,
        new_title: &str,
        comments: Vec<String>,
        status: &str,
        due: &str,
    ) -> Result<(), StoreError> {
        if !self.tasks.contains_key(old_title) {
            return Err(StoreError::NotFound(old_title.to_string()));
        }
        let status = Status::from_name(status)
            .ok_or_else(|| StoreError::UnknownStatus(status.trim().to_string()))?;
        let due =
            DueDate::parse(due).ok_or_else(|| StoreError::InvalidDate(due.trim().to_string()))?;

        self.tasks.remove(old_title);
        self.insert(Task::new(new_title.to_string(), comments, status, due));
        Ok(())
    }

    /// Move a task to the adjacent column, wrapping cyclically
    pub fn shift(&mut self, title: &str, direction: Direction) -> Result<Status, StoreError> {
        let task = self
            .tasks
            .get_mut(title)
            .ok_or_else(|| StoreError::NotFound(title.to_string()))?;
        task.status = task.status.shifted(direction);
        self.dirty = true;
        Ok(task.status)
    }

    /// Delete every listed title; one dirty-mark for the whole batch.
    /// Returns how many tasks were actually removed.
    pub fn remove_all<I, S>(&mut self, titles: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut removed = 0;
        for title in titles {
            if self.tasks.remove(title.as_ref()).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }
}
