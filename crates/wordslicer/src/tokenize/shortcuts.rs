//! # One-Shot Tokenizing
//!
//! Build a transient [`PatternTokenizer`] and apply it to a single text.
//! To tokenize many texts with one pattern, build the tokenizer once instead.

use crate::{
    errors::PTResult,
    regex::RegexPattern,
    tokenize::{PatternTokenizer, TokenizerOptions},
};

/// Tokenize `text` with a transient tokenizer.
///
/// Equivalent to `PatternTokenizer::with_options(pattern, options)?.tokenize(text)`.
///
/// ```
/// use wordslicer::tokenize::{TokenizerOptions, tokenize_with_pattern};
///
/// let tokens = tokenize_with_pattern("a, b,c", r",\s*", TokenizerOptions::for_gaps()).unwrap();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
pub fn tokenize_with_pattern<'h, P>(
    text: &'h str,
    pattern: P,
    options: TokenizerOptions,
) -> PTResult<Vec<&'h str>>
where
    P: Into<RegexPattern>,
{
    Ok(PatternTokenizer::with_options(pattern, options)?.tokenize(text))
}

/// Tokenize `text` with a transient token-mode tokenizer and default options.
pub fn regexp_tokenize<'h, P>(
    text: &'h str,
    pattern: P,
) -> PTResult<Vec<&'h str>>
where
    P: Into<RegexPattern>,
{
    tokenize_with_pattern(text, pattern, TokenizerOptions::default())
}
