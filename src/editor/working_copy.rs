//! Scratch copy of a config file for an editing session
//!
//! Edits go to the scratch copy through the usual primitives. The live file
//! is only touched by [`WorkingCopy::save`], and only when the two differ
//! materially.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use tempfile::{Builder, NamedTempFile};

use crate::editor::diff::differ_materially;
use crate::editor::EditorError;
use crate::utils::{file_exists, file_get, touch, write_atomic};

#[derive(Debug)]
pub struct WorkingCopy {
    original: PathBuf,
    // Removed from disk when the working copy is dropped
    scratch: NamedTempFile,
}

impl WorkingCopy {
    /// Copy `original` into a fresh scratch file, creating an empty
    /// `original` first if it does not exist
    pub fn create(original: impl AsRef<Path>) -> Result<Self, EditorError> {
        let original = original.as_ref().to_path_buf();
        if !file_exists(&original) {
            info!("{} does not exist, creating it empty", original.display());
            touch(&original)?;
        }
        let scratch = Builder::new()
            .prefix("bootconf-")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| EditorError::io(&std::env::temp_dir(), e))?;
        fs::copy(&original, scratch.path()).map_err(|e| EditorError::io(&original, e))?;
        Ok(WorkingCopy { original, scratch })
    }

    /// Path of the scratch copy; pass this to the editing primitives
    pub fn path(&self) -> &Path {
        self.scratch.path()
    }

    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Whether the scratch copy differs materially from the live file
    pub fn is_dirty(&self) -> Result<bool, EditorError> {
        differ_materially(self.path(), &self.original)
    }

    /// Replace the live file with the scratch copy if they differ
    /// materially, returning whether anything was written
    pub fn save(&self) -> Result<bool, EditorError> {
        if !self.is_dirty()? {
            return Ok(false);
        }
        write_atomic(&self.original, &file_get(self.path())?)?;
        info!("Saved changes to {}", self.original.display());
        Ok(true)
    }

    /// Throw away scratch edits by copying the live file back over them
    pub fn revert(&self) -> Result<(), EditorError> {
        let content = file_get(&self.original)?;
        write_atomic(self.path(), &content)
    }
}
