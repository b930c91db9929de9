//! Material comparison of two config files
//!
//! Two files differ materially when their sets of active directives differ.
//! Comments, blank lines, whitespace around keys and values, and the order
//! of lines do not count. The scope a directive sits under does.

use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::editor::ops::load;
use crate::editor::EditorError;
use crate::parser::ConfigDocument;
use crate::utils::is_comment;

lazy_static! {
    static ref ACTIVE_LINE_REGEX: Regex = Regex::new(r"^\s*([^#=,\s][^=,]*)([=,])(.*)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActiveDirective {
    pub scope: String,
    pub key: String,
    /// Separator followed by the trimmed value, e.g. `=128`
    pub tail: String,
}

/// Every uncommented directive in the document, sorted
pub fn active_directives(doc: &ConfigDocument) -> Vec<ActiveDirective> {
    let mut directives: Vec<ActiveDirective> = doc
        .lines()
        .iter()
        .filter(|line| !line.is_header && !is_comment(&line.text))
        .filter_map(|line| {
            let caps = ACTIVE_LINE_REGEX.captures(&line.text)?;
            Some(ActiveDirective {
                scope: line.scope.clone(),
                key: caps[1].trim_end().to_string(),
                tail: format!("{}{}", &caps[2], caps[3].trim()),
            })
        })
        .collect();
    directives.sort();
    directives
}

pub fn documents_differ_materially(a: &ConfigDocument, b: &ConfigDocument) -> bool {
    active_directives(a) != active_directives(b)
}

/// Whether the config files at `path_a` and `path_b` differ materially
pub fn differ_materially(path_a: &Path, path_b: &Path) -> Result<bool, EditorError> {
    let active_a = active_directives(&load(path_a)?);
    let active_b = active_directives(&load(path_b)?);
    debug!("Active directives in {}: {:?}", path_a.display(), active_a);
    debug!("Active directives in {}: {:?}", path_b.display(), active_b);
    Ok(active_a != active_b)
}
