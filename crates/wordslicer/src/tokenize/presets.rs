//! # Preset Tokenizers
//!
//! Fixed [`PatternTokenizer`] configurations for common segmentations.

use std::sync::LazyLock;

use crate::{
    regex::ConstRegexPattern,
    tokenize::{PatternTokenizer, TokenizerOptions},
};

/// Any run of whitespace; used as a separator.
pub const WHITESPACE_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"\s+");

/// A blank line: optional whitespace, newline, optional whitespace, newline,
/// optional whitespace; used as a separator.
pub const BLANKLINE_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"\s*\n\s*\n\s*");

/// A run of word characters, or a run of non-word non-space characters.
pub const WORD_PUNCT_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"\w+|[^\w\s]+");

/// A run of word characters.
pub const WORD_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"\w+");

static BLANKLINE_TOKENIZER: LazyLock<PatternTokenizer> = LazyLock::new(PatternTokenizer::blankline);

static WORD_PUNCT_TOKENIZER: LazyLock<PatternTokenizer> =
    LazyLock::new(PatternTokenizer::word_punct);

impl PatternTokenizer {
    fn preset(
        pattern: ConstRegexPattern,
        options: TokenizerOptions,
    ) -> Self {
        options
            .build(pattern)
            .unwrap_or_else(|err| panic!("preset pattern failed to compile: {err}"))
    }

    /// Splits on runs of whitespace.
    ///
    /// ```
    /// use wordslicer::tokenize::PatternTokenizer;
    ///
    /// let tokenizer = PatternTokenizer::whitespace();
    /// assert_eq!(tokenizer.tokenize("a b\tc\nd"), vec!["a", "b", "c", "d"]);
    /// ```
    pub fn whitespace() -> Self {
        Self::preset(WHITESPACE_PATTERN, TokenizerOptions::for_gaps())
    }

    /// Splits on blank lines; yields paragraph blocks.
    pub fn blankline() -> Self {
        Self::preset(BLANKLINE_PATTERN, TokenizerOptions::for_gaps())
    }

    /// Extracts runs of word characters and runs of punctuation.
    pub fn word_punct() -> Self {
        Self::preset(WORD_PUNCT_PATTERN, TokenizerOptions::default())
    }

    /// Extracts runs of word characters; everything else is dropped.
    ///
    /// Deprecated: this does not handle contractions, hyphenation or
    /// abbreviations. A linguistically aware word tokenizer is the
    /// better choice; a warning is logged on every construction.
    pub fn word() -> Self {
        log::warn!(
            "PatternTokenizer::word() is deprecated; use a linguistically aware \
             word tokenizer (e.g. a Treebank-style tokenizer) instead"
        );
        Self::preset(WORD_PATTERN, TokenizerOptions::default())
    }
}

/// The shared [`PatternTokenizer::blankline`] instance.
pub fn blankline_tokenizer() -> &'static PatternTokenizer {
    &BLANKLINE_TOKENIZER
}

/// The shared [`PatternTokenizer::word_punct`] instance.
pub fn word_punct_tokenizer() -> &'static PatternTokenizer {
    &WORD_PUNCT_TOKENIZER
}

/// Split `text` into paragraph blocks with the shared blank-line tokenizer.
pub fn blankline_tokenize(text: &str) -> Vec<&str> {
    BLANKLINE_TOKENIZER.tokenize(text)
}

/// Split `text` into word and punctuation runs with the shared tokenizer.
pub fn wordpunct_tokenize(text: &str) -> Vec<&str> {
    WORD_PUNCT_TOKENIZER.tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let tokenizer = PatternTokenizer::whitespace();
        assert!(tokenizer.gaps());
        assert!(tokenizer.discard_empty());
        assert_eq!(tokenizer.tokenize("a b\tc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(
            tokenizer.tokenize("  leading and trailing \n"),
            vec!["leading", "and", "trailing"]
        );
        assert_eq!(tokenizer.tokenize("caf\u{e9}\u{a0}na\u{ef}ve"), vec!["caf\u{e9}", "na\u{ef}ve"]);
    }

    #[test]
    fn test_blankline() {
        let tokenizer = PatternTokenizer::blankline();
        assert!(tokenizer.gaps());
        assert_eq!(
            tokenizer.tokenize("para one\n\npara two\n \npara three"),
            vec!["para one", "para two", "para three"]
        );
        assert_eq!(
            tokenizer.tokenize("line one\nline two\n\n\n\t\nnext"),
            vec!["line one\nline two", "next"]
        );
    }

    #[test]
    fn test_word_punct() {
        let tokenizer = PatternTokenizer::word_punct();
        assert!(!tokenizer.gaps());
        assert_eq!(
            tokenizer.tokenize("She said 'hello'."),
            vec!["She", "said", "'", "hello", "'."]
        );
        assert_eq!(
            tokenizer.tokenize("Good muffins cost $3.88\nin New York."),
            vec!["Good", "muffins", "cost", "$", "3", ".", "88", "in", "New", "York", "."]
        );
    }

    #[test]
    fn test_word() {
        let tokenizer = PatternTokenizer::word();
        assert_eq!(
            tokenizer.tokenize("She said 'hello'."),
            vec!["She", "said", "hello"]
        );
    }

    #[test]
    fn test_shared_instances() {
        assert!(core::ptr::eq(blankline_tokenizer(), blankline_tokenizer()));
        assert!(core::ptr::eq(word_punct_tokenizer(), word_punct_tokenizer()));

        assert_eq!(blankline_tokenize("a\n\nb"), vec!["a", "b"]);
        assert_eq!(wordpunct_tokenize("x, y!"), vec!["x", ",", "y", "!"]);
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("w{i}, v{i}.");
                    wordpunct_tokenize(&text)
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let tokens = handle.join().unwrap();
            assert_eq!(
                tokens,
                vec![format!("w{i}"), ",".to_string(), format!("v{i}"), ".".to_string()]
            );
        }
    }
}
