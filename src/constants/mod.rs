pub mod filters;
pub mod log_level;

pub use filters::{is_section_filter, FILTER_ALL, FILTER_NONE, FILTER_PI_PREFIX};
