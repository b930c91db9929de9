use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::is_section_filter;

lazy_static! {
    static ref SECTION_REGEX: Regex = Regex::new(r"^\s*\[([^\[]+)\]").unwrap();
}

/// Return the bracketed name on a line, recognised or not
pub fn bracket_name(line: &str) -> Option<&str> {
    SECTION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return the filter a line switches to, if it is a section header
///
/// Only `[all]`, `[none]` and `[pi...]` count. Other bracketed text is
/// inert and yields `None`.
pub fn parse_section_header(line: &str) -> Option<&str> {
    bracket_name(line).filter(|name| is_section_filter(name))
}
