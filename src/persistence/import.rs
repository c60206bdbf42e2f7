use crate::domain::{Status, TaskStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Outcome of a bulk import
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub rejected: usize,
}

/// Bulk-import tasks from a delimited text file, one row per task:
///
/// ```text
/// title, comment?, status?, end_date?
/// ```
///
/// A missing status defaults to the first column, a missing date stays
/// unspecified, and only the first comment field is taken. Rows the store
/// rejects (unknown status, malformed date) are reported and skipped; the
/// rest of the file still imports.
pub fn import_file<P: AsRef<Path>>(store: &mut TaskStore, path: P) -> Result<ImportSummary> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;
    Ok(import_rows(store, &content))
}

/// Import rows from already-read file content
pub fn import_rows(store: &mut TaskStore, content: &str) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        // First field is always the title; the rest are optional
        let title = fields.next().unwrap_or("");
        let comment = fields.next();
        let status = fields.next().unwrap_or(Status::ALL[0].name());
        let due = fields.next().unwrap_or("");

        if title.is_empty() {
            eprintln!("Warning: row {} has no title, skipping", line_no + 1);
            summary.rejected += 1;
            continue;
        }

        let comments = match comment {
            Some(c) if !c.is_empty() => vec![c.to_string()],
            _ => Vec::new(),
        };

        match store.add(title, comments, status, due) {
            Ok(()) => summary.added += 1,
            Err(e) => {
                eprintln!("Warning: row {} rejected: {}", line_no + 1, e);
                summary.rejected += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DueDate;

    #[test]
    fn test_import_title_only_row() {
        let mut store = TaskStore::new();
        let summary = import_rows(&mut store, "Buy milk");

        assert_eq!(summary, ImportSummary { added: 1, rejected: 0 });
        let task = store.get("Buy milk").unwrap();
        // Defaults: first column, no due date, no comments
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.due, DueDate::Unspecified);
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_import_full_row() {
        let mut store = TaskStore::new();
        import_rows(&mut store, "Ship release, final QA pass, In Progress, 03.09.26");

        let task = store.get("Ship release").unwrap();
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.comments, vec!["final QA pass".to_string()]);
        assert!(!task.due.is_unspecified());
    }

    #[test]
    fn test_import_skips_blank_rows() {
        let mut store = TaskStore::new();
        let summary = import_rows(&mut store, "First\n\n   \nSecond\n");

        assert_eq!(summary.added, 2);
        assert_eq!(summary.rejected, 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_import_rejects_bad_rows_and_continues() {
        let mut store = TaskStore::new();
        let content = "\
Good one
Bad status, note, Blocked
Bad date, note, Done, 31.02.24
Good two, , Done, 01.01.27
";
        let summary = import_rows(&mut store, content);

        assert_eq!(summary, ImportSummary { added: 2, rejected: 2 });
        assert!(store.contains("Good one"));
        assert!(store.contains("Good two"));
        assert!(!store.contains("Bad status"));
        assert!(!store.contains("Bad date"));
    }

    #[test]
    fn test_import_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.csv");
        std::fs::write(&path, "Buy milk\nWalk dog, leash by door\n").unwrap();

        let mut store = TaskStore::new();
        let summary = import_file(&mut store, &path).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(
            store.get("Walk dog").unwrap().comments,
            vec!["leash by door".to_string()]
        );
    }

    #[test]
    fn test_import_missing_file_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::new();
        assert!(import_file(&mut store, temp_dir.path().join("nope.csv")).is_err());
    }
}
