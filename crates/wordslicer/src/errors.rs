//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from building a pattern tokenizer.
///
/// These are only ever produced at construction time; a tokenizer that
/// was built successfully never fails while tokenizing.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The normalized pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    Compile {
        /// The pattern as supplied by the caller.
        pattern: String,

        /// The pattern after capturing groups were made non-capturing.
        normalized: String,

        /// The engine's diagnostic.
        #[source]
        source: ErrorWrapper,
    },

    /// The pattern uses a numeric backreference to a group that would be
    /// rewritten as non-capturing.
    #[error(
        "invalid pattern {pattern:?}: numeric backreference at offset {offset} \
         cannot survive capturing group removal; use a named group instead"
    )]
    Backreference {
        /// The pattern as supplied by the caller.
        pattern: String,

        /// Byte offset of the backreference in `pattern`.
        offset: usize,
    },
}

impl PatternError {
    /// The pattern text, as supplied by the caller, that caused the error.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Compile { pattern, .. } => pattern,
            Self::Backreference { pattern, .. } => pattern,
        }
    }

    /// The normalized pattern, when normalization got far enough to produce one.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::Compile { normalized, .. } => Some(normalized),
            Self::Backreference { .. } => None,
        }
    }
}

/// Result type for pattern tokenizer construction.
pub type PTResult<T> = core::result::Result<T, PatternError>;
