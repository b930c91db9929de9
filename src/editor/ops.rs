//! The path-level editing primitives
//!
//! Every call reads the file afresh, works on a [`ConfigDocument`], and for
//! mutations commits the result with [`write_atomic`]. Nothing is cached
//! between calls.

use std::path::Path;

use log::{debug, info};

use crate::editor::EditorError;
use crate::models::{ConfigValue, QualifiedKey};
use crate::parser::ConfigDocument;
use crate::utils::{file_get, write_atomic};

/// Read and parse the config file at `path`
pub fn load(path: &Path) -> Result<ConfigDocument, EditorError> {
    file_get(path).map(|content| ConfigDocument::parse(&content))
}

/// Read the value of `key`
///
/// Returns `default` when the key is not defined in its scope, or when
/// `int_cast` is set and the stored value is not an integer.
pub fn get(
    key: &QualifiedKey,
    path: &Path,
    default: Option<ConfigValue>,
    int_cast: bool,
) -> Result<Option<ConfigValue>, EditorError> {
    Ok(load(path)?.get(key, default, int_cast))
}

/// Whether `key` has an uncommented definition in its scope
pub fn is_defined(key: &QualifiedKey, path: &Path) -> Result<bool, EditorError> {
    Ok(load(path)?.is_defined(key))
}

fn already_holds(doc: &ConfigDocument, key: &QualifiedKey, value: &str, int_cast: bool) -> bool {
    if int_cast {
        match (doc.get(key, None, true), ConfigValue::coerce_int(value)) {
            (Some(ConfigValue::Int(current)), Some(target)) => current == target,
            _ => false,
        }
    } else {
        doc.get_raw(key) == Some(value)
    }
}

fn check_single_line(key: &QualifiedKey, value: &str) -> Result<(), EditorError> {
    let has_terminator = |s: &str| s.contains(&['\n', '\r'][..]);
    if has_terminator(&key.key) || has_terminator(&key.filter) || has_terminator(value) {
        return Err(EditorError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Set `key` to `value`, returning whether the file was rewritten
///
/// With `check_first`, nothing is written when the key already holds the
/// value (compared as integers when `int_cast` is set). A key or value
/// containing a line terminator is rejected before the file is read.
pub fn set(
    key: &QualifiedKey,
    value: &str,
    path: &Path,
    check_first: bool,
    int_cast: bool,
) -> Result<bool, EditorError> {
    check_single_line(key, value)?;
    let mut doc = load(path)?;
    if check_first && already_holds(&doc, key, value, int_cast) {
        debug!("{} already set to {}, not writing", key, value);
        return Ok(false);
    }
    doc.set(key, value);
    write_atomic(path, &doc.render())?;
    info!("Set {} = {} in {}", key, value, path.display());
    Ok(true)
}

/// Comment out every uncommented definition of `key` in its scope,
/// returning whether the file was rewritten
///
/// With `check_first`, nothing is written when the key is not defined.
pub fn comment(key: &QualifiedKey, path: &Path, check_first: bool) -> Result<bool, EditorError> {
    let mut doc = load(path)?;
    if check_first && !doc.is_defined(key) {
        debug!("{} not defined, nothing to comment out", key);
        return Ok(false);
    }
    let count = doc.comment(key);
    write_atomic(path, &doc.render())?;
    info!("Commented out {} line(s) of {} in {}", count, key, path.display());
    Ok(true)
}

/// Comment out `key` when `value` is absent or equal to `default`, and set
/// it otherwise
///
/// Values that look like integers are compared as integers in the
/// `check_first` test.
pub fn set_or_comment(
    key: &QualifiedKey,
    value: Option<&str>,
    default: Option<&str>,
    path: &Path,
    check_first: bool,
) -> Result<bool, EditorError> {
    match value {
        Some(v) if Some(v) != default => {
            let int_cast = ConfigValue::coerce_int(v).is_some();
            set(key, v, path, check_first, int_cast)
        }
        _ => comment(key, path, check_first),
    }
}
