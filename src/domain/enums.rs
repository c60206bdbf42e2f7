/// The fixed, ordered set of board columns a task can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

/// Direction for moving a task between columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Status {
    /// Column order for the board; moves cycle through this list
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Parse a status from its persisted/display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "To Do" => Some(Self::Todo),
            "In Progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Persisted/display name of the column
    pub fn name(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Position of this column in the board order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The adjacent column in the given direction, wrapping at either end
    pub fn shifted(&self, direction: Direction) -> Self {
        let len = Self::ALL.len();
        let idx = self.index();
        let next = match direction {
            Direction::Right => (idx + 1) % len,
            Direction::Left => (idx + len - 1) % len,
        };
        Self::ALL[next]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    QuickEntry,
    AddingTask,
    EditingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_name() {
        assert_eq!(Status::from_name("To Do"), Some(Status::Todo));
        assert_eq!(Status::from_name("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::from_name("Done"), Some(Status::Done));
        assert_eq!(Status::from_name("  Done  "), Some(Status::Done));
        assert_eq!(Status::from_name("Archived"), None);
        assert_eq!(Status::from_name(""), None);
    }

    #[test]
    fn test_status_name_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_name(status.name()), Some(status));
        }
    }

    #[test]
    fn test_shifted_wraps_both_directions() {
        // Right from the last column lands on the first
        assert_eq!(Status::Done.shifted(Direction::Right), Status::Todo);
        // Left from the first column lands on the last
        assert_eq!(Status::Todo.shifted(Direction::Left), Status::Done);

        assert_eq!(Status::Todo.shifted(Direction::Right), Status::InProgress);
        assert_eq!(Status::InProgress.shifted(Direction::Right), Status::Done);
        assert_eq!(Status::Done.shifted(Direction::Left), Status::InProgress);
    }

    #[test]
    fn test_shifted_full_cycle_returns_home() {
        let mut status = Status::Todo;
        for _ in 0..Status::ALL.len() {
            status = status.shifted(Direction::Right);
        }
        assert_eq!(status, Status::Todo);
    }
}
