use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use tempfile::Builder;

use crate::editor::EditorError;

/// Checks if a file exists at the given path
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Read a whole file as text
pub fn file_get(path: &Path) -> Result<String, EditorError> {
    fs::read_to_string(path).map_err(|e| EditorError::io(path, e))
}

/// Create an empty file at `path` unless one is already there
pub fn touch(path: &Path) -> Result<(), EditorError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| EditorError::io(path, e))
}

/// Replace the contents of `path` in one step
///
/// The new text goes to a uniquely named temp file next to `path`, which is
/// then renamed over it. Readers see either the old file or the new one.
/// The temp file is deleted on every failure path; it is owned by a
/// `NamedTempFile` until the rename succeeds.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), EditorError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut tmp = Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| EditorError::io(parent, e))?;
    debug!("Writing {} via {}", path.display(), tmp.path().display());

    if let Ok(meta) = fs::metadata(path) {
        if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
            warn!(
                "Could not copy permissions of {} to temp file: {}",
                path.display(),
                e
            );
        }
    }

    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.flush())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| EditorError::io(tmp.path(), e))?;

    tmp.persist(path).map_err(|e| EditorError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "old\n").unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(entries(dir.path()), vec!["config.txt".to_string()]);
    }

    #[test]
    fn test_write_atomic_cleans_up_on_rename_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the final rename fail
        let path = dir.path().join("config.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_atomic(&path, "new\n").unwrap_err();

        assert!(matches!(err, EditorError::Persist { .. }));
        assert_eq!(entries(dir.path()), vec!["config.txt".to_string()]);
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.txt");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, EditorError::NotFound { .. }));
    }

    #[test]
    fn test_file_get_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_get(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, EditorError::NotFound { .. }));
    }

    #[test]
    fn test_touch_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        touch(&path).unwrap();
        assert!(file_exists(&path));
        fs::write(&path, "a=1\n").unwrap();
        touch(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a=1\n");
    }
}
