use crate::models::QualifiedKey;

/// Matcher for the lines that define one key
///
/// A line defines `key` when, after optional leading whitespace, it starts
/// with the key followed by `=` or `,`. For embedded keys such as
/// `dtoverlay=vc4-` the separator may be missing. A disabled definition has a
/// single `#` (optionally surrounded by whitespace) in front of the key.
#[derive(Debug, Clone)]
pub struct DirectivePattern<'a> {
    key: &'a str,
    separator_optional: bool,
}

impl<'a> DirectivePattern<'a> {
    pub fn new(key: &'a QualifiedKey) -> Self {
        DirectivePattern {
            key: &key.key,
            separator_optional: key.assign.separator_optional(),
        }
    }

    fn strip_key<'l>(&self, text: &'l str) -> Option<&'l str> {
        let rest = text.strip_prefix(self.key)?;
        match rest.strip_prefix(&['=', ','][..]) {
            Some(value) => Some(value),
            None if self.separator_optional => Some(rest),
            None => None,
        }
    }

    /// Value of an uncommented definition on this line
    pub fn value<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.strip_key(line.trim_start())
    }

    /// Whether the line is an uncommented definition
    pub fn is_active(&self, line: &str) -> bool {
        self.value(line).is_some()
    }

    /// Whether the line defines the key, commented out or not
    pub fn matches_any(&self, line: &str) -> bool {
        let text = line.trim_start();
        let text = text.strip_prefix('#').map_or(text, str::trim_start);
        self.strip_key(text).is_some()
    }
}
