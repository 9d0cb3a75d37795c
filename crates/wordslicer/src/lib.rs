//! # `wordslicer` Pattern Tokenizers
//!
//! Split text into substrings with a single regex pattern, where the
//! pattern matches either the tokens themselves or the gaps between them.
//!
//! See:
//! * [`tokenize`] for the [`PatternTokenizer`](tokenize::PatternTokenizer),
//!   its presets, and one-shot helpers.
//! * [`regex`] for pattern labeling, engine flags, and capture-group rewriting.
//! * [`errors`] for construction errors.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! This enables a parallel batch tokenizer wrapper using the ``rayon`` crate.
//!
//! ## Logging
//!
//! Tokenizer construction and a few unusual runtime events are reported
//! through the [`log`] facade; install any `log` backend to see them.
//!
//! ## Example
//!
//! ```rust
//! use wordslicer::tokenize::{PatternTokenizer, TokenizerOptions, wordpunct_tokenize};
//!
//! let words = PatternTokenizer::whitespace();
//! assert_eq!(words.tokenize("a b\tc\nd"), vec!["a", "b", "c", "d"]);
//!
//! let commas = TokenizerOptions::for_gaps()
//!     .with_discard_empty(false)
//!     .build(",")
//!     .unwrap();
//! assert_eq!(commas.tokenize("a,,b"), vec!["a", "", "b"]);
//!
//! assert_eq!(wordpunct_tokenize("Hi, you!"), vec!["Hi", ",", "you", "!"]);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod regex;
pub mod tokenize;

#[doc(inline)]
pub use errors::{PTResult, PatternError};
