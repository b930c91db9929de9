use log::LevelFilter;

// Log level used by the command-line tool when no settings file says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Map a settings `log_level` string onto a `log` filter
///
/// Unknown names fall back to [`DEFAULT_LOG_LEVEL`].
pub fn level_filter(name: &str) -> LevelFilter {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" | "verbose" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("info"), LevelFilter::Info);
        assert_eq!(level_filter(" DEBUG "), LevelFilter::Debug);
        assert_eq!(level_filter("verbose"), LevelFilter::Trace);
        assert_eq!(level_filter("bogus"), LevelFilter::Warn);
    }
}
