//! Data types shared by the parser and the editor
//!
//! ```rust
//! use bootconf::models::{AssignStyle, QualifiedKey};
//!
//! let key = QualifiedKey::parse("hdmi_mode@pi4");
//! assert_eq!(key.filter, "pi4");
//! assert_eq!(key.assign, AssignStyle::Equals);
//! ```

mod config_value;
pub mod display_mode;
mod qualified_key;

pub use config_value::ConfigValue;
pub use display_mode::{mode_choices, DisplayMode, ModeGroup};
pub use qualified_key::{AssignStyle, QualifiedKey};
