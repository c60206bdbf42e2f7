use super::enums::Status;
use chrono::NaiveDate;

/// Wire format for due dates: day.month.two-digit-year (e.g. "03.09.26")
pub const DATE_FORMAT: &str = "%d.%m.%y";

/// On-disk sentinel for an unspecified due date.
/// Kept byte-for-byte compatible with boards written by earlier versions.
pub const DATE_UNSPECIFIED: &str = "Не указано";

/// Marker shown in place of a date when none is set
pub const NO_DUE_DATE_MARKER: &str = "[no due date]";

/// A task's due date: either explicitly unspecified or a concrete day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Unspecified,
    On(NaiveDate),
}

impl DueDate {
    /// Strict parse for mutations: the sentinel (or nothing) means
    /// Unspecified, anything else must match the wire format exactly.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s == DATE_UNSPECIFIED {
            return Some(Self::Unspecified);
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok().map(Self::On)
    }

    /// Lenient parse for loading persisted state: malformed or legacy
    /// values ("None", absent) normalize to Unspecified instead of failing.
    pub fn parse_lossy(s: Option<&str>) -> Self {
        match s {
            Some(raw) => Self::parse(raw).unwrap_or(Self::Unspecified),
            None => Self::Unspecified,
        }
    }

    /// Serialize back to the wire format (sentinel when unspecified)
    pub fn to_wire(&self) -> String {
        match self {
            Self::Unspecified => DATE_UNSPECIFIED.to_string(),
            Self::On(date) => date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Signed day count from `today` to the due date, counting the end day
    /// itself (due today = 1, due yesterday = 0)
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        match self {
            Self::Unspecified => None,
            Self::On(date) => Some((*date - today).num_days() + 1),
        }
    }
}

/// The sole board entity: a titled card in one of the columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique key across the board
    pub title: String,
    /// Free-text notes; comma-joined on disk, so commas inside a comment
    /// are a known fragility of the format
    pub comments: Vec<String>,
    /// Column the task currently occupies
    pub status: Status,
    /// Optional due date
    pub due: DueDate,
}

impl Task {
    pub fn new(title: String, comments: Vec<String>, status: Status, due: DueDate) -> Self {
        Self {
            title,
            comments,
            status,
            due,
        }
    }

    /// Comments joined for redisplay in the task form (blank-line separated,
    /// the inverse of the form's split-on-blank-line on submit)
    pub fn comments_for_display(&self) -> String {
        self.comments.join("\n\n")
    }

    /// Human-facing row text: title plus due info, recomputed per render
    pub fn display_line(&self, today: NaiveDate) -> String {
        match self.due {
            DueDate::Unspecified => format!("{}  {}", self.title, NO_DUE_DATE_MARKER),
            DueDate::On(_) => {
                let days = self.due.days_left(today).unwrap_or(0);
                format!("{}  {} ({}d)", self.title, self.due.to_wire(), days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            DueDate::parse("03.09.26"),
            Some(DueDate::On(date(2026, 9, 3)))
        );
        assert_eq!(
            DueDate::parse("29.02.24"),
            Some(DueDate::On(date(2024, 2, 29)))
        );
    }

    #[test]
    fn test_parse_sentinel_and_empty() {
        assert_eq!(DueDate::parse(DATE_UNSPECIFIED), Some(DueDate::Unspecified));
        assert_eq!(DueDate::parse(""), Some(DueDate::Unspecified));
        assert_eq!(DueDate::parse("   "), Some(DueDate::Unspecified));
    }

    #[test]
    fn test_parse_rejects_bad_calendar_date() {
        // February 31st does not exist
        assert_eq!(DueDate::parse("31.02.24"), None);
        assert_eq!(DueDate::parse("2026-09-03"), None);
        assert_eq!(DueDate::parse("garbage"), None);
    }

    #[test]
    fn test_parse_lossy_normalizes() {
        assert_eq!(DueDate::parse_lossy(None), DueDate::Unspecified);
        assert_eq!(DueDate::parse_lossy(Some("None")), DueDate::Unspecified);
        assert_eq!(DueDate::parse_lossy(Some("31.02.24")), DueDate::Unspecified);
        assert_eq!(
            DueDate::parse_lossy(Some("01.01.27")),
            DueDate::On(date(2027, 1, 1))
        );
    }

    #[test]
    fn test_wire_round_trip() {
        let due = DueDate::On(date(2026, 12, 31));
        assert_eq!(due.to_wire(), "31.12.26");
        assert_eq!(DueDate::parse(&due.to_wire()), Some(due));
        assert_eq!(DueDate::Unspecified.to_wire(), DATE_UNSPECIFIED);
    }

    #[test]
    fn test_days_left_counts_end_day() {
        let today = date(2026, 8, 29);
        assert_eq!(DueDate::On(today).days_left(today), Some(1));
        assert_eq!(DueDate::On(date(2026, 8, 31)).days_left(today), Some(3));
        // Already past: yesterday counts as zero
        assert_eq!(DueDate::On(date(2026, 8, 28)).days_left(today), Some(0));
        assert_eq!(DueDate::Unspecified.days_left(today), None);
    }

    #[test]
    fn test_display_line() {
        let today = date(2026, 8, 29);
        let task = Task::new(
            "Ship release".to_string(),
            vec![],
            Status::Todo,
            DueDate::On(date(2026, 8, 31)),
        );
        assert_eq!(task.display_line(today), "Ship release  31.08.26 (3d)");

        let undated = Task::new(
            "Tidy backlog".to_string(),
            vec![],
            Status::Todo,
            DueDate::Unspecified,
        );
        assert_eq!(
            undated.display_line(today),
            format!("Tidy backlog  {}", NO_DUE_DATE_MARKER)
        );
    }

    #[test]
    fn test_comments_for_display() {
        let task = Task::new(
            "Review PR".to_string(),
            vec!["first pass done".to_string(), "ping Alex".to_string()],
            Status::InProgress,
            DueDate::Unspecified,
        );
        assert_eq!(task.comments_for_display(), "first pass done\n\nping Alex");
    }
}
