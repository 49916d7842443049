//! Whole-file replacement for result documents.
//!
//! A result file is never appended to or edited in place:
//! - content goes to a temporary file in the target directory
//! - the temporary file is fsynced
//! - it is renamed over the target (bounded retry on Windows, where a reader
//!   holding the old file open can make the rename fail transiently)
//!
//! A concurrent reader therefore sees either the previous document or the new
//! one, never a truncated mix. Two concurrent writers race; the last rename wins.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

/// Outcome of a replacement
#[derive(Debug, Clone, Default)]
pub struct ReplaceOutcome {
    /// Number of rename retries that occurred (Windows only)
    pub rename_retry_count: u32,
    /// Whether the target existed before the write
    pub replaced_existing: bool,
}

/// Atomically replace `path` with `content`, creating parent directories.
pub fn write_file_atomic(path: &Utf8Path, content: &str) -> Result<ReplaceOutcome> {
    let replaced_existing = path.exists();

    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {dir}"))?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {dir}"))?;
    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write content to temporary file")?;
    temp_file
        .as_file()
        .sync_all()
        .with_context(|| "Failed to fsync temporary file")?;

    let rename_retry_count = persist(temp_file, path)
        .with_context(|| format!("Failed to atomically write file: {path}"))?;

    Ok(ReplaceOutcome {
        rename_retry_count,
        replaced_existing,
    })
}

#[cfg(not(target_os = "windows"))]
fn persist(temp_file: NamedTempFile, target: &Utf8Path) -> Result<u32> {
    temp_file
        .persist(target.as_std_path())
        .map(|_| 0)
        .map_err(|e| anyhow::anyhow!(e.error))
}

/// Retry the rename with exponential backoff, at most 250ms in total.
#[cfg(target_os = "windows")]
fn persist(mut temp_file: NamedTempFile, target: &Utf8Path) -> Result<u32> {
    use std::io::ErrorKind;
    use std::{thread, time::Duration};

    const MAX_RETRIES: u32 = 5;
    const INITIAL_DELAY_MS: u64 = 10;
    const MAX_TOTAL_DELAY_MS: u64 = 250;

    let mut retries = 0;
    let mut slept_ms = 0;

    loop {
        match temp_file.persist(target.as_std_path()) {
            Ok(_) => return Ok(retries),
            Err(err) => {
                let transient = matches!(
                    err.error.kind(),
                    ErrorKind::PermissionDenied | ErrorKind::Other
                );
                let delay_ms = INITIAL_DELAY_MS * 2_u64.pow(retries);
                if !transient || retries >= MAX_RETRIES || slept_ms + delay_ms > MAX_TOTAL_DELAY_MS
                {
                    return Err(anyhow::anyhow!(err.error));
                }
                thread::sleep(Duration::from_millis(delay_ms));
                slept_ms += delay_ms;
                retries += 1;
                temp_file = err.file;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn target_in(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = target_in(&dir, "result.json");

        let outcome = write_file_atomic(&path, "{}\n").unwrap();

        assert_eq!(outcome.rename_retry_count, 0);
        assert!(!outcome.replaced_existing);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_replaces_longer_content_entirely() {
        let dir = TempDir::new().unwrap();
        let path = target_in(&dir, "result.json");

        write_file_atomic(&path, "a much longer first document").unwrap();
        let outcome = write_file_atomic(&path, "short").unwrap();

        assert!(outcome.replaced_existing);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = target_in(&dir, "nested/deeper/result.json");

        write_file_atomic(&path, "x").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let path = target_in(&dir, "result.json");

        write_file_atomic(&path, "one").unwrap();
        write_file_atomic(&path, "two").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = target_in(&dir, "occupied");
        fs::create_dir(&path).unwrap();

        assert!(write_file_atomic(&path, "x").is_err());
    }
}
