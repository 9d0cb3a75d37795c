//! # Pattern Tokenizer

use core::ops::Range;

use crate::{
    errors::{PTResult, PatternError},
    regex::{
        EngineFlags,
        ErrorWrapper,
        MatchRanges,
        RegexPattern,
        RegexWrapper,
        to_non_capturing,
    },
    tokenize::{TextTokenizer, TokenizerOptions},
};

/// A tokenizer that splits a string using a single regex pattern.
///
/// The pattern matches either the tokens themselves (the default), or,
/// with [`TokenizerOptions::gaps`], the separators between tokens.
///
/// Capturing groups in the pattern are rewritten as non-capturing at
/// construction, so grouping never changes what a token is:
///
/// ```
/// use wordslicer::tokenize::PatternTokenizer;
///
/// let tokenizer = PatternTokenizer::new(r"(a)(b)(c)").unwrap();
/// assert_eq!(tokenizer.tokenize("abc"), vec!["abc"]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternTokenizer {
    pattern: String,
    normalized: String,
    options: TokenizerOptions,
    regex: RegexWrapper,
}

impl PatternTokenizer {
    /// Build a token-mode tokenizer with default options.
    ///
    /// ## Arguments
    /// * `pattern` - A pattern string, or a pre-compiled regex whose source is used.
    pub fn new<P>(pattern: P) -> PTResult<Self>
    where
        P: Into<RegexPattern>,
    {
        Self::with_options(pattern, TokenizerOptions::default())
    }

    /// Build a tokenizer.
    ///
    /// ## Arguments
    /// * `pattern` - A pattern string, or a pre-compiled regex whose source is used.
    ///   Flags a pre-compiled regex was built with are not carried over;
    ///   `options.flags` applies.
    /// * `options` - Gap mode, empty-token handling, and matching flags.
    ///
    /// ## Errors
    /// [`PatternError`] if the pattern cannot be normalized or compiled.
    pub fn with_options<P>(
        pattern: P,
        options: TokenizerOptions,
    ) -> PTResult<Self>
    where
        P: Into<RegexPattern>,
    {
        let pattern = pattern.into();
        let source = pattern.as_str();

        let normalized = to_non_capturing(source)?.into_owned();
        let regex = pattern
            .relabel(options.flags.apply(&normalized).into_owned())
            .compile()
            .map_err(|source_err| PatternError::Compile {
                pattern: source.to_string(),
                normalized: normalized.clone(),
                source: source_err,
            })?;

        log::debug!(
            "built tokenizer for {:?} (normalized {:?}, engine {})",
            source,
            normalized,
            regex.engine_name()
        );

        Ok(Self {
            pattern: source.to_string(),
            normalized,
            options,
            regex,
        })
    }

    /// The pattern as supplied at construction.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern with capturing groups made non-capturing.
    pub fn normalized_pattern(&self) -> &str {
        &self.normalized
    }

    /// The compiled matcher.
    ///
    /// Its source is the normalized pattern behind the inline flag group.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// The options this tokenizer was built with.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Does the pattern match separators rather than tokens?
    pub fn gaps(&self) -> bool {
        self.options.gaps
    }

    /// Are empty tokens dropped?
    pub fn discard_empty(&self) -> bool {
        self.options.discard_empty
    }

    /// The matching flags.
    pub fn flags(&self) -> EngineFlags {
        self.options.flags
    }

    /// Byte ranges of the tokens of `text`, in left-to-right order.
    ///
    /// In gap mode these are the pieces between matches, including the
    /// pieces before the first and after the last match; empty pieces are
    /// dropped when `discard_empty` is set. Otherwise they are the matches.
    ///
    /// ## Partial Results
    /// A `fancy_regex` pattern can exceed its backtrack limit. Matching then
    /// stops at that point, a `warn` is logged, and the result is partial:
    /// token mode returns the tokens found so far; gap mode returns the
    /// pieces found so far followed by the whole unsplit remainder as one
    /// final piece. Use [`try_span_tokenize`](Self::try_span_tokenize) to
    /// detect this.
    pub fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        self.collect_spans(&mut self.regex.find_ranges(text), text)
    }

    /// Like [`span_tokenize`](Self::span_tokenize), but reports an engine
    /// failure instead of returning a partial result.
    ///
    /// ## Errors
    /// The engine error if matching stopped before the end of `text`.
    pub fn try_span_tokenize(
        &self,
        text: &str,
    ) -> Result<Vec<Range<usize>>, ErrorWrapper> {
        let mut matches = self.regex.find_ranges(text);
        let spans = self.collect_spans(&mut matches, text);
        match matches.into_error() {
            Some(err) => Err(err),
            None => Ok(spans),
        }
    }

    fn collect_spans(
        &self,
        matches: &mut MatchRanges<'_, '_>,
        text: &str,
    ) -> Vec<Range<usize>> {
        if !self.options.gaps {
            return matches.collect();
        }

        let mut spans = Vec::new();
        let mut last = 0;
        for m in matches {
            spans.push(last..m.start);
            last = m.end;
        }
        spans.push(last..text.len());

        if self.options.discard_empty {
            spans.retain(|span| !span.is_empty());
        }
        spans
    }

    /// The tokens of `text`, in left-to-right order.
    ///
    /// The result is partial if the engine gives up part way; see
    /// [`span_tokenize`](Self::span_tokenize) and
    /// [`try_tokenize`](Self::try_tokenize).
    ///
    /// ## Returns
    /// Slices borrowed from `text`.
    pub fn tokenize<'h>(
        &self,
        text: &'h str,
    ) -> Vec<&'h str> {
        self.span_tokenize(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    /// Like [`tokenize`](Self::tokenize), but reports an engine failure
    /// instead of returning a partial result.
    ///
    /// ## Errors
    /// The engine error if matching stopped before the end of `text`.
    pub fn try_tokenize<'h>(
        &self,
        text: &'h str,
    ) -> Result<Vec<&'h str>, ErrorWrapper> {
        Ok(self
            .try_span_tokenize(text)?
            .into_iter()
            .map(|range| &text[range])
            .collect())
    }
}

impl TextTokenizer for PatternTokenizer {
    fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        PatternTokenizer::span_tokenize(self, text)
    }
}

impl core::fmt::Display for PatternTokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "PatternTokenizer(pattern={:?}, gaps={}, discard_empty={}, flags={})",
            self.pattern, self.options.gaps, self.options.discard_empty, self.options.flags
        )
    }
}
