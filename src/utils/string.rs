//! String utility functions for line-oriented text

/// Split text into lines, keeping each line's terminator apart
///
/// Returns `(text, terminator)` pairs where the terminator is `"\n"`,
/// `"\r\n"`, or `""` for a final line with no newline. Joining every pair
/// back together reproduces the input exactly.
pub fn split_lines(content: &str) -> Vec<(&str, &str)> {
    content
        .split_inclusive('\n')
        .map(|line| {
            if let Some(text) = line.strip_suffix("\r\n") {
                (text, "\r\n")
            } else if let Some(text) = line.strip_suffix('\n') {
                (text, "\n")
            } else {
                (line, "")
            }
        })
        .collect()
}

/// Check whether a line is a comment (first non-blank character is `#`)
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(
            split_lines("a=1\r\nb=2\nc=3"),
            vec![("a=1", "\r\n"), ("b=2", "\n"), ("c=3", "")]
        );
        assert_eq!(split_lines("\n"), vec![("", "\n")]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment("#gpu_mem=128"));
        assert!(is_comment("   # note"));
        assert!(!is_comment("gpu_mem=128 # trailing"));
        assert!(!is_comment(""));
    }
}
