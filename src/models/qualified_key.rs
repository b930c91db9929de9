use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::constants::FILTER_ALL;

/// How a directive joins its key to its value when written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignStyle {
    /// `key=value`
    Equals,
    /// `key,value`
    Comma,
    /// The key already ends with its own operator (`dtparam=spi=`,
    /// `dtoverlay=vc4-`) and the value is appended directly
    Embedded,
}

impl AssignStyle {
    /// Infer the style from the key text: keys that carry a `=` are
    /// embedded, everything else uses `=`
    pub fn infer(key: &str) -> Self {
        if key.contains('=') {
            AssignStyle::Embedded
        } else {
            AssignStyle::Equals
        }
    }

    /// Text placed between key and value
    pub fn operator(&self) -> &'static str {
        match self {
            AssignStyle::Equals => "=",
            AssignStyle::Comma => ",",
            AssignStyle::Embedded => "",
        }
    }

    /// Whether the `=`/`,` separator may be absent when matching existing lines
    pub fn separator_optional(&self) -> bool {
        matches!(self, AssignStyle::Embedded)
    }
}

/// A directive key together with the filter section it lives under
///
/// Written as `key@filter` on the command line; a bare `key` means `key@all`.
/// Two qualified keys are equal when key and filter both match, whatever
/// their assignment style.
#[derive(Debug, Clone)]
pub struct QualifiedKey {
    pub key: String,
    pub filter: String,
    pub assign: AssignStyle,
}

impl QualifiedKey {
    pub fn new(key: &str, filter: &str) -> Self {
        QualifiedKey {
            key: key.to_string(),
            filter: filter.to_string(),
            assign: AssignStyle::infer(key),
        }
    }

    /// Split `key@filter` on the first `@`; the filter defaults to `all`
    ///
    /// The filter name is not validated. A filter that no section header can
    /// produce simply never matches anything.
    pub fn parse(fullkey: &str) -> Self {
        match fullkey.split_once('@') {
            Some((key, filter)) => QualifiedKey::new(key, filter),
            None => QualifiedKey::new(fullkey, FILTER_ALL),
        }
    }

    pub fn with_assign(mut self, assign: AssignStyle) -> Self {
        self.assign = assign;
        self
    }

    /// Render the directive line (without terminator) for `value`
    pub fn directive_line(&self, value: &str) -> String {
        format!("{}{}{}", self.key, self.assign.operator(), value)
    }
}

impl PartialEq for QualifiedKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.filter == other.filter
    }
}

impl Eq for QualifiedKey {}

impl Hash for QualifiedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.filter.hash(state);
    }
}

impl FromStr for QualifiedKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QualifiedKey::parse(s))
    }
}

impl From<&str> for QualifiedKey {
    fn from(s: &str) -> Self {
        QualifiedKey::parse(s)
    }
}

impl fmt::Display for QualifiedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.key, self.filter)
    }
}
