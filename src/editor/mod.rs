//! Filter-aware editing of boot config files
//!
//! ```no_run
//! use std::path::Path;
//! use bootconf::editor;
//! use bootconf::models::QualifiedKey;
//!
//! let path = Path::new("/boot/config.txt");
//! let key = QualifiedKey::parse("hdmi_mode@pi4");
//! editor::set(&key, "16", path, true, true)?;
//! assert!(editor::is_defined(&key, path)?);
//! # Ok::<(), bootconf::editor::EditorError>(())
//! ```

pub mod diff;
mod error;
pub mod ops;
pub mod working_copy;

pub use diff::{active_directives, differ_materially, documents_differ_materially, ActiveDirective};
pub use error::EditorError;
pub use ops::{comment, get, is_defined, load, set, set_or_comment};
pub use working_copy::WorkingCopy;
