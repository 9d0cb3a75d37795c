//! # Pattern Tokenizers
//!
//! A [`PatternTokenizer`] divides text into substrings with one regex
//! pattern, which matches either the tokens themselves or the gaps between
//! them ([`TokenizerOptions::gaps`]).
//!
//! * [`PatternTokenizer`] - the configurable tokenizer.
//! * [`TokenizerOptions`] - gap mode, empty-token handling, and flags.
//! * [`TextTokenizer`] - the tokenizer trait.
//! * Presets - [`PatternTokenizer::whitespace`], [`PatternTokenizer::blankline`],
//!   [`PatternTokenizer::word_punct`], and the deprecated [`PatternTokenizer::word`].
//! * One-shot functions - [`tokenize_with_pattern`], [`regexp_tokenize`],
//!   [`blankline_tokenize`], [`wordpunct_tokenize`].

mod pattern_tokenizer;
mod presets;
mod shortcuts;
mod text_tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use pattern_tokenizer::PatternTokenizer;
#[doc(inline)]
pub use presets::*;
#[doc(inline)]
pub use shortcuts::{regexp_tokenize, tokenize_with_pattern};
#[doc(inline)]
pub use text_tokenizer::TextTokenizer;
#[doc(inline)]
pub use tokenizer_options::TokenizerOptions;
