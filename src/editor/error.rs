use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// The config file (or the directory meant to hold it) does not exist.
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Reading, creating or writing a file failed.
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A key or value that would spill onto extra lines when written.
    #[error("invalid directive {key:?} = {value:?}: line terminators are not allowed")]
    InvalidValue { key: String, value: String },

    /// The finished temp file could not be renamed over the target. The
    /// target is left as it was.
    #[error("failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    /// Wrap an I/O error for `path`, reporting a missing file as `NotFound`
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            EditorError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            EditorError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
