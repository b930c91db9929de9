//! Names of the filter sections that change scope in a boot config file

/// Scope of every line before the first recognised section header
pub const FILTER_ALL: &str = "all";

/// Disabled block; nothing inside it is ever read back as defined
pub const FILTER_NONE: &str = "none";

/// Board-model filters (`[pi3]`, `[pi4]`, `[pi0w]`, ...) all share this prefix
pub const FILTER_PI_PREFIX: &str = "pi";

/// Check whether a bracketed name switches the active scope
///
/// Only `all`, `none`, and names starting with `pi` are section filters.
/// Anything else in brackets (`[HDMI:1]`, `[EDID=...]`) is left alone.
pub fn is_section_filter(name: &str) -> bool {
    name == FILTER_ALL || name == FILTER_NONE || name.starts_with(FILTER_PI_PREFIX)
}
