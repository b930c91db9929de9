pub mod directive;
pub mod document;
pub mod modes;
pub mod section;

pub use directive::DirectivePattern;
pub use document::{ConfigDocument, ConfigLine};
pub use modes::{available_modes, parse_mode_line, parse_mode_listing};
pub use section::parse_section_header;
