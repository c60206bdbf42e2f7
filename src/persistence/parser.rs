use crate::domain::{DueDate, Status, Task};
use anyhow::Result;

/// Parse the board file (INI-style key-value sections, one per task).
///
/// Expected shape:
///
/// ```text
/// [Buy milk]
/// comments = run out,again
/// status = To Do
/// end_date = 03.09.26
/// ```
///
/// Malformed or missing due dates normalize to the unspecified sentinel;
/// a section with an unknown status is skipped with a warning rather than
/// failing the whole load.
pub fn parse_board(content: &str) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    let mut current: Option<RawSection> = None;

    for (line_no, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // Section header: "[Title]"
        if line.starts_with('[') && line.ends_with(']') {
            if let Some(section) = current.take() {
                finish_section(section, &mut tasks);
            }
            let title = line[1..line.len() - 1].trim().to_string();
            if title.is_empty() {
                eprintln!("Warning: empty task title at line {}, skipping", line_no + 1);
                continue;
            }
            current = Some(RawSection::new(title));
            continue;
        }

        // Key-value line: "key = value"
        let Some(section) = current.as_mut() else {
            eprintln!(
                "Warning: field outside any task section at line {}, skipping",
                line_no + 1
            );
            continue;
        };
        match line.split_once('=') {
            Some((key, value)) => section.set(key.trim(), value.trim()),
            None => eprintln!(
                "Warning: malformed line {} in board file, skipping",
                line_no + 1
            ),
        }
    }

    if let Some(section) = current.take() {
        finish_section(section, &mut tasks);
    }

    Ok(tasks)
}

/// One task section as read off disk, before validation
struct RawSection {
    title: String,
    comments: Option<String>,
    status: Option<String>,
    end_date: Option<String>,
}

impl RawSection {
    fn new(title: String) -> Self {
        Self {
            title,
            comments: None,
            status: None,
            end_date: None,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "comments" => self.comments = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "end_date" => self.end_date = Some(value.to_string()),
            // Unknown field, ignore
            _ => {}
        }
    }
}

fn finish_section(section: RawSection, tasks: &mut Vec<Task>) {
    let status_str = section.status.unwrap_or_default();
    let Some(status) = Status::from_name(&status_str) else {
        eprintln!(
            "Warning: task '{}' has unknown status '{}', skipping",
            section.title, status_str
        );
        return;
    };

    let comments = split_comments(section.comments.as_deref().unwrap_or(""));
    let due = DueDate::parse_lossy(section.end_date.as_deref());

    tasks.push(Task::new(section.title, comments, status, due));
}

/// Split the comma-joined comments field back into the ordered list
pub fn split_comments(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DATE_UNSPECIFIED;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_single_task() {
        let content = "\
[Buy milk]
comments = run out,again
status = To Do
end_date = 03.09.26
";
        let tasks = parse_board(content).unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.comments, vec!["run out".to_string(), "again".to_string()]);
        assert_eq!(task.status, Status::Todo);
        assert_eq!(
            task.due,
            DueDate::On(NaiveDate::from_ymd_opt(2026, 9, 3).unwrap())
        );
    }

    #[test]
    fn test_parse_multiple_tasks() {
        let content = "\
[First]
comments =
status = To Do
end_date = Не указано

[Second]
comments = one
status = In Progress
end_date = None

[Third]
comments =
status = Done
";
        let tasks = parse_board(content).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "First");
        assert_eq!(tasks[1].title, "Second");
        assert_eq!(tasks[2].title, "Third");
        assert_eq!(tasks[1].status, Status::InProgress);
        // Sentinel, "None" and an absent field all normalize to Unspecified
        assert!(tasks.iter().all(|t| t.due == DueDate::Unspecified));
    }

    #[test]
    fn test_parse_normalizes_malformed_date() {
        let content = "\
[Broken date]
comments =
status = Done
end_date = 31.02.24
";
        let tasks = parse_board(content).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].due, DueDate::Unspecified);
    }

    #[test]
    fn test_parse_skips_unknown_status() {
        let content = "\
[Bad one]
status = Blocked

[Good one]
status = Done
";
        let tasks = parse_board(content).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Good one");
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_board("").unwrap().is_empty());
        assert!(parse_board("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ignores_comment_lines() {
        let content = "\
# written by lanes
[Task]
status = To Do
; trailing remark
";
        let tasks = parse_board(content).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_split_comments() {
        assert_eq!(split_comments(""), Vec::<String>::new());
        assert_eq!(split_comments("one"), vec!["one".to_string()]);
        assert_eq!(
            split_comments("one,two"),
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_sentinel_matches_legacy_boards() {
        // The literal the original boards carry on disk
        assert_eq!(DATE_UNSPECIFIED, "Не указано");
    }
}
