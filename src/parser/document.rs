//! In-memory view of a filter-sectioned config file
//!
//! A [`ConfigDocument`] is the file split into lines, each tagged with the
//! filter section it falls under. The tagging is a single top-down pass:
//! the scope starts as `all` and changes at every `[all]`, `[none]` or
//! `[pi...]` header. A header line belongs to the scope it opens.
//!
//! Edits work on line indices and [`ConfigDocument::render`] writes every
//! untouched line back exactly as it was read.

use log::debug;

use crate::constants::{FILTER_ALL, FILTER_NONE};
use crate::models::{ConfigValue, QualifiedKey};
use crate::parser::directive::DirectivePattern;
use crate::parser::section::parse_section_header;
use crate::utils::split_lines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    /// Line text without its terminator
    pub text: String,
    /// `"\n"`, `"\r\n"`, or `""` for an unterminated last line
    pub terminator: &'static str,
    /// Filter section in force on this line
    pub scope: String,
    /// Set for `[all]`/`[none]`/`[pi...]` header lines
    pub is_header: bool,
}

impl ConfigLine {
    fn new(text: String, terminator: &'static str, scope: &str, is_header: bool) -> Self {
        ConfigLine {
            text,
            terminator,
            scope: scope.to_string(),
            is_header,
        }
    }

    /// Whether directives on this line count for `filter`
    ///
    /// Headers never hold directives and nothing in `none` is ever eligible.
    fn in_editable_scope(&self, filter: &str) -> bool {
        !self.is_header && self.scope != FILTER_NONE && self.scope == filter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<ConfigLine>,
}

fn static_terminator(terminator: &str) -> &'static str {
    match terminator {
        "\r\n" => "\r\n",
        "\n" => "\n",
        _ => "",
    }
}

impl ConfigDocument {
    pub fn parse(content: &str) -> Self {
        let mut scope = FILTER_ALL;
        let mut lines = Vec::new();
        for (text, terminator) in split_lines(content) {
            let header = parse_section_header(text);
            if let Some(filter) = header {
                scope = filter;
            }
            lines.push(ConfigLine::new(
                text.to_string(),
                static_terminator(terminator),
                scope,
                header.is_some(),
            ));
        }
        ConfigDocument { lines }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.text.len() + 2).sum());
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(line.terminator);
        }
        out
    }

    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    /// Scope in force after the last line
    pub fn scope_at_eof(&self) -> &str {
        self.lines.last().map_or(FILTER_ALL, |l| l.scope.as_str())
    }

    /// Terminator used for inserted lines: whatever the file already uses
    fn newline(&self) -> &'static str {
        self.lines
            .iter()
            .map(|l| l.terminator)
            .find(|t| !t.is_empty())
            .unwrap_or("\n")
    }

    /// Index of the last line under `filter`, i.e. the end of the last
    /// block of that scope
    pub fn last_line_in_scope(&self, filter: &str) -> Option<usize> {
        self.lines.iter().rposition(|l| l.scope == filter)
    }

    /// Raw text of the first uncommented definition of `key` in its scope
    pub fn get_raw(&self, key: &QualifiedKey) -> Option<&str> {
        let pattern = DirectivePattern::new(key);
        self.lines
            .iter()
            .filter(|l| l.in_editable_scope(&key.filter))
            .find_map(|l| pattern.value(&l.text))
    }

    /// Value of `key`, or `default` when it is not defined in scope
    ///
    /// With `int_cast` the value is parsed as an integer and a value that
    /// does not parse also yields `default`.
    pub fn get(
        &self,
        key: &QualifiedKey,
        default: Option<ConfigValue>,
        int_cast: bool,
    ) -> Option<ConfigValue> {
        match self.get_raw(key) {
            Some(raw) if int_cast => ConfigValue::coerce_int(raw).map(ConfigValue::Int).or(default),
            Some(raw) => Some(ConfigValue::Text(raw.to_string())),
            None => default,
        }
    }

    /// Whether `key` has at least one uncommented definition in its scope
    pub fn is_defined(&self, key: &QualifiedKey) -> bool {
        self.get_raw(key).is_some()
    }

    /// Make `key` hold `value`
    ///
    /// The first definition in scope, commented or not, becomes the new
    /// directive and every later uncommented one in scope is commented out.
    /// Without any definition the directive goes after the last line of the
    /// key's scope, or at the end of the file under a new header.
    pub fn set(&mut self, key: &QualifiedKey, value: &str) {
        let pattern = DirectivePattern::new(key);
        let def_line = key.directive_line(value);
        let mut replaced = false;

        for line in self.lines.iter_mut() {
            if !line.in_editable_scope(&key.filter) || !pattern.matches_any(&line.text) {
                continue;
            }
            if !replaced {
                line.text = def_line.clone();
                replaced = true;
            } else if pattern.is_active(&line.text) {
                line.text.insert(0, '#');
            }
        }
        if replaced {
            return;
        }

        let newline = self.newline();
        match self.last_line_in_scope(&key.filter) {
            Some(idx) => {
                debug!("Inserting {} after line {}", key, idx + 1);
                if self.lines[idx].terminator.is_empty() {
                    self.lines[idx].terminator = newline;
                }
                self.lines.insert(
                    idx + 1,
                    ConfigLine::new(def_line, newline, &key.filter, false),
                );
            }
            None => {
                debug!("Appending {} at end of file", key);
                if let Some(last) = self.lines.last_mut() {
                    if last.terminator.is_empty() {
                        last.terminator = newline;
                    }
                }
                if self.scope_at_eof() != key.filter {
                    self.lines.push(ConfigLine::new(
                        format!("[{}]", key.filter),
                        newline,
                        &key.filter,
                        true,
                    ));
                }
                self.lines
                    .push(ConfigLine::new(def_line, newline, &key.filter, false));
            }
        }
    }

    /// Comment out every uncommented definition of `key` in its scope and
    /// return how many lines changed
    pub fn comment(&mut self, key: &QualifiedKey) -> usize {
        let pattern = DirectivePattern::new(key);
        let mut count = 0;
        for line in self.lines.iter_mut() {
            if line.in_editable_scope(&key.filter) && pattern.is_active(&line.text) {
                line.text.insert(0, '#');
                count += 1;
            }
        }
        count
    }
}
