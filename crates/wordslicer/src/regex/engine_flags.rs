//! # Engine Flags

use std::borrow::Cow;

/// Matching flags applied to a tokenizer pattern.
///
/// Flags are applied as an inline flag group prefix on the compiled
/// pattern, so `regex` and `fancy_regex` interpret them identically.
///
/// The default enables `multi_line` and `dot_matches_new_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineFlags {
    /// `(?i)`: case-insensitive matching.
    pub case_insensitive: bool,

    /// `(?m)`: `^` and `$` match at line boundaries.
    pub multi_line: bool,

    /// `(?s)`: `.` matches `\n`.
    pub dot_matches_new_line: bool,

    /// `(?x)`: verbose mode; whitespace is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
}

impl Default for EngineFlags {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: true,
            dot_matches_new_line: true,
            ignore_whitespace: false,
        }
    }
}

impl EngineFlags {
    /// No flags set.
    pub const fn empty() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
        }
    }

    /// Sets `case_insensitive`.
    pub fn with_case_insensitive(
        mut self,
        case_insensitive: bool,
    ) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets `multi_line`.
    pub fn with_multi_line(
        mut self,
        multi_line: bool,
    ) -> Self {
        self.multi_line = multi_line;
        self
    }

    /// Sets `dot_matches_new_line`.
    pub fn with_dot_matches_new_line(
        mut self,
        dot_matches_new_line: bool,
    ) -> Self {
        self.dot_matches_new_line = dot_matches_new_line;
        self
    }

    /// Sets `ignore_whitespace`.
    pub fn with_ignore_whitespace(
        mut self,
        ignore_whitespace: bool,
    ) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    /// Are all flags off?
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// The inline flag letters, in `imsx` order.
    pub fn letters(&self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect()
    }

    /// Prefix `pattern` with the inline flag group for these flags.
    ///
    /// ## Returns
    /// `pattern` unchanged when no flags are set.
    pub fn apply<'a>(
        &self,
        pattern: &'a str,
    ) -> Cow<'a, str> {
        if self.is_empty() {
            Cow::Borrowed(pattern)
        } else {
            Cow::Owned(format!("(?{}){}", self.letters(), pattern))
        }
    }
}

impl core::fmt::Display for EngineFlags {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "(?{})", self.letters())
    }
}
