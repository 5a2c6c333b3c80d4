//! Filesystem probes for task precondition checks.
//!
//! Probes follow symlinks, so a link to an existing target counts as existing.

use std::fs;
use std::io;
use std::path::Path;

/// Check whether `path` currently exists.
///
/// A "not found" result is `Ok(false)`; any other failure (permission
/// denied, a non-directory path component) is returned to the caller.
pub fn path_exists(path: impl AsRef<Path>) -> io::Result<bool> {
    match fs::metadata(path.as_ref()) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check whether the directory at `path` contains at least one entry.
///
/// Fails if `path` is not a readable directory.
pub fn dir_has_entries(path: impl AsRef<Path>) -> io::Result<bool> {
    let mut entries = fs::read_dir(path.as_ref())?;
    Ok(entries.next().transpose()?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_path_exists() {
        let temp_dir = TempDir::new().unwrap();
        assert!(path_exists(temp_dir.path()).unwrap());
        assert!(!path_exists(temp_dir.path().join("missing")).unwrap());
    }

    #[test]
    fn test_dir_has_entries() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!dir_has_entries(temp_dir.path()).unwrap());

        File::create(temp_dir.path().join("entry.txt")).unwrap();
        assert!(dir_has_entries(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_dir_has_entries_on_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        File::create(&file_path).unwrap();
        assert!(dir_has_entries(&file_path).is_err());
    }
}
