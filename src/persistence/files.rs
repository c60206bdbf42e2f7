use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the lanes directory - checks for a local .lanes first, then falls
/// back to the global ~/.lanes
pub fn get_lanes_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_lanes(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".lanes"))
}

/// Find a local .lanes directory by walking up the directory tree
fn find_local_lanes(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let lanes_dir = current.join(".lanes");
        if lanes_dir.exists() && lanes_dir.is_dir() {
            return Some(lanes_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the lanes directory exists
pub fn ensure_lanes_dir() -> Result<PathBuf> {
    let dir = get_lanes_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .lanes directory in the current directory
pub fn init_local_lanes() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let lanes_dir = current_dir.join(".lanes");

    if lanes_dir.exists() {
        anyhow::bail!("Lanes directory already exists: {}", lanes_dir.display());
    }

    fs::create_dir_all(&lanes_dir)
        .with_context(|| format!("Failed to create directory: {}", lanes_dir.display()))?;

    Ok(lanes_dir)
}

/// Path to the board file (tasks.ini)
pub fn board_file() -> Result<PathBuf> {
    Ok(ensure_lanes_dir()?.join("tasks.ini"))
}

/// Path to meta.json (stores UI metadata such as the focused column)
pub fn meta_file() -> Result<PathBuf> {
    Ok(ensure_lanes_dir()?.join("meta.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
