//! # Tokenizer Options

use crate::{
    errors::PTResult,
    regex::{EngineFlags, RegexPattern},
    tokenize::PatternTokenizer,
};

/// Options for configuring a [`PatternTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenizerOptions {
    /// Does the pattern match the separators between tokens,
    /// rather than the tokens themselves?
    ///
    /// Empty matches count as separators too: gap-splitting `"hello world"`
    /// on `\b` gives `["hello", " ", "world"]`.
    pub gaps: bool,

    /// Drop empty tokens? Only gap mode can produce them.
    pub discard_empty: bool,

    /// Matching flags.
    pub flags: EngineFlags,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            gaps: false,
            discard_empty: true,
            flags: EngineFlags::default(),
        }
    }
}

impl TokenizerOptions {
    /// Options for a gap-mode tokenizer; otherwise default.
    pub fn for_gaps() -> Self {
        Self::default().with_gaps(true)
    }

    /// Sets the gap mode.
    pub fn set_gaps(
        &mut self,
        gaps: bool,
    ) {
        self.gaps = gaps;
    }

    /// Sets the gap mode.
    pub fn with_gaps(
        mut self,
        gaps: bool,
    ) -> Self {
        self.set_gaps(gaps);
        self
    }

    /// Sets whether empty tokens are dropped.
    pub fn set_discard_empty(
        &mut self,
        discard_empty: bool,
    ) {
        self.discard_empty = discard_empty;
    }

    /// Sets whether empty tokens are dropped.
    pub fn with_discard_empty(
        mut self,
        discard_empty: bool,
    ) -> Self {
        self.set_discard_empty(discard_empty);
        self
    }

    /// Sets the matching flags.
    pub fn set_flags(
        &mut self,
        flags: EngineFlags,
    ) {
        self.flags = flags;
    }

    /// Sets the matching flags.
    pub fn with_flags(
        mut self,
        flags: EngineFlags,
    ) -> Self {
        self.set_flags(flags);
        self
    }

    /// Build a [`PatternTokenizer`] for the given pattern.
    pub fn build<P>(
        &self,
        pattern: P,
    ) -> PTResult<PatternTokenizer>
    where
        P: Into<RegexPattern>,
    {
        PatternTokenizer::with_options(pattern, *self)
    }
}
