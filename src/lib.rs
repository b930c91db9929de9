pub mod constants;
pub mod editor;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the editing primitives and their key type for easier access
pub use editor::{comment, differ_materially, get, is_defined, set, set_or_comment, EditorError};
pub use models::{AssignStyle, ConfigValue, QualifiedKey};
pub use parser::ConfigDocument;
