// SPDX-License-Identifier: MPL-2.0
//! Writing build logs and tree images to user-chosen files.

use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name of a downloaded tree image.
pub const IMAGE_FILE_NAME: &str = "decision-tree.png";

/// Default file name of an exported build log for `date`.
///
/// Format: `decision-tree-log-YYYY-MM-DD.txt`
#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!("decision-tree-log-{}.txt", date.format("%Y-%m-%d"))
}

/// Writes content to a file atomically.
///
/// Writes to a sibling `.tmp` file first, then renames it over `path`.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Starting directory for save dialogs.
///
/// Uses the user's Downloads folder if available, then Documents, then the
/// current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(log_file_name(date), "decision-tree-log-2024-03-07.txt");
    }

    #[test]
    fn write_atomic_replaces_content_and_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("decision-tree-log.txt");
        fs::write(&path, "old").expect("seed");

        write_atomic(&path, b"[10:00:00] new").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "[10:00:00] new");
        let leftovers = fs::read_dir(dir.path())
            .expect("list")
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn write_atomic_fails_for_missing_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.png");
        assert!(write_atomic(&path, &[1, 2, 3]).is_err());
    }
}
