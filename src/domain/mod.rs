pub mod enums;
pub mod store;
pub mod task;

pub use enums::{Direction, Status, UiMode};
pub use store::{StoreError, TaskStore};
pub use task::{DueDate, Task, DATE_FORMAT, DATE_UNSPECIFIED, NO_DUE_DATE_MARKER};
