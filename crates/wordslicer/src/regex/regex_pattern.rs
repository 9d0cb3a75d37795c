//! # Regex Pattern Labeled Wrapper

use crate::regex::{ErrorWrapper, RegexWrapper};

/// Const Regex Wrapper Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(&'static str),

    /// This is a regex pattern that requires regex extensions.
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    pub fn to_pattern(&self) -> RegexPattern {
        (*self).into()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        use ConstRegexPattern::*;
        match pattern {
            Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Labeled wrapper for regex patterns.
///
/// This is the input to tokenizer construction. Plain strings become
/// [`RegexPattern::Adaptive`]; a pre-compiled regex contributes its source
/// text and is labeled with the engine that compiled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown, and it may require regex extensions.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl From<&String> for RegexPattern {
    fn from(pattern: &String) -> Self {
        Self::Adaptive(pattern.clone())
    }
}

impl From<&regex::Regex> for RegexPattern {
    fn from(regex: &regex::Regex) -> Self {
        Self::Basic(regex.as_str().to_string())
    }
}

impl From<regex::Regex> for RegexPattern {
    fn from(regex: regex::Regex) -> Self {
        (&regex).into()
    }
}

impl From<&fancy_regex::Regex> for RegexPattern {
    fn from(regex: &fancy_regex::Regex) -> Self {
        Self::Fancy(regex.as_str().to_string())
    }
}

impl From<fancy_regex::Regex> for RegexPattern {
    fn from(regex: fancy_regex::Regex) -> Self {
        (&regex).into()
    }
}

impl From<&RegexWrapper> for RegexPattern {
    fn from(regex: &RegexWrapper) -> Self {
        match regex {
            RegexWrapper::Basic(regex) => regex.into(),
            RegexWrapper::Fancy(regex) => regex.into(),
        }
    }
}

impl From<RegexWrapper> for RegexPattern {
    fn from(regex: RegexWrapper) -> Self {
        (&regex).into()
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Build a pattern with the same engine label over a different source.
    ///
    /// ## Arguments
    /// * `source` - The replacement pattern text.
    pub fn relabel(
        &self,
        source: String,
    ) -> Self {
        match self {
            Self::Basic(_) => Self::Basic(source),
            Self::Fancy(_) => Self::Fancy(source),
            Self::Adaptive(_) => Self::Adaptive(source),
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// `Adaptive` patterns try `regex` first, then fall up to `fancy_regex`;
    /// if both fail, the `fancy_regex` error is reported.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(ErrorWrapper::from)
                }),
        }
    }
}
