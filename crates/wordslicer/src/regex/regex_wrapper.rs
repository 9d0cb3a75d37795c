//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for compiled regex.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// The name of the engine behind this regex.
    pub fn engine_name(&self) -> &'static str {
        match self {
            Self::Basic(_) => "regex",
            Self::Fancy(_) => "fancy_regex",
        }
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate the byte ranges of all non-overlapping matches, left to right.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    pub fn find_ranges<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy(Some(regex.find_iter(haystack))),
        }
    }
}

/// Iterator over match ranges for [`RegexWrapper::find_ranges`].
///
/// `fancy_regex` can fail mid-stream (backtrack limit). The failure is
/// logged at `warn`, ends the stream, and is kept for [`MatchRanges::error`].
pub enum MatchRanges<'r, 'h> {
    /// Matches from `regex::Regex`.
    Basic(regex::Matches<'r, 'h>),

    /// Matches from `fancy_regex::Regex`; `None` once exhausted.
    Fancy(Option<fancy_regex::Matches<'r, 'h>>),

    /// The engine gave up; no further matches.
    Failed(ErrorWrapper),
}

impl MatchRanges<'_, '_> {
    /// The engine failure that ended this stream, if any.
    pub fn error(&self) -> Option<&ErrorWrapper> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Consume the stream, returning the engine failure that ended it, if any.
    pub fn into_error(self) -> Option<ErrorWrapper> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self {
            Self::Basic(matches) => return matches.next().map(|m| m.range()),
            Self::Fancy(slot) => slot.as_mut()?.next(),
            Self::Failed(_) => return None,
        };

        match next {
            Some(Ok(m)) => Some(m.start()..m.end()),
            Some(Err(err)) => {
                log::warn!("pattern matching stopped early: {err}");
                *self = Self::Failed(err.into());
                None
            }
            None => {
                *self = Self::Fancy(None);
                None
            }
        }
    }
}
