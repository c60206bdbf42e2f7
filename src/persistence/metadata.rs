use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// UI metadata stored in meta.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMetadata {
    /// Index of the column that had focus when the app last closed
    #[serde(default)]
    pub focused_column: usize,
}

impl Default for BoardMetadata {
    fn default() -> Self {
        Self { focused_column: 0 }
    }
}

/// Load board metadata from meta.json; missing or unreadable files fall
/// back to defaults
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<BoardMetadata> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(BoardMetadata::default());
    }

    let content = std::fs::read_to_string(path)?;
    let metadata: BoardMetadata = serde_json::from_str(&content)?;
    Ok(metadata)
}

/// Save board metadata to meta.json
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &BoardMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = load_metadata(&meta_path).unwrap();
        assert_eq!(metadata.focused_column, 0);
    }

    #[test]
    fn test_save_and_load_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = BoardMetadata { focused_column: 2 };
        save_metadata(&meta_path, &metadata).unwrap();

        let loaded = load_metadata(&meta_path).unwrap();
        assert_eq!(loaded.focused_column, 2);
    }
}
