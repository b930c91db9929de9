use std::fmt;

/// A value read back from a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Int(i64),
    Text(String),
}

impl ConfigValue {
    /// Parse the raw text of a directive value as an integer
    ///
    /// Surrounding whitespace is ignored. Anything else that does not parse
    /// yields `None`.
    pub fn coerce_int(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            ConfigValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Int(_) => None,
            ConfigValue::Text(s) => Some(s.as_str()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(ConfigValue::coerce_int("42"), Some(42));
        assert_eq!(ConfigValue::coerce_int(" -3 "), Some(-3));
        assert_eq!(ConfigValue::coerce_int("0xa5000080"), None);
        assert_eq!(ConfigValue::coerce_int(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::Int(7).to_string(), "7");
        assert_eq!(ConfigValue::from("kms-v3d").to_string(), "kms-v3d");
    }
}
