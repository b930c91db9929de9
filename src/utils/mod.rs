pub mod file;
pub mod string;

// Re-export common utilities
pub use file::{file_exists, file_get, touch, write_atomic};
pub use string::{is_comment, split_lines};
