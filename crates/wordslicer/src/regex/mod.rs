//! # Regex Utilities
//!
//! Tokenizer patterns are compiled by one of two engines: the standard
//! [`regex`] crate, or [`fancy_regex`] when a pattern needs extensions such
//! as lookaround or backreferences. We prefer [`regex`], falling up to
//! [`fancy_regex`] only when a pattern requires it.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Matching Flags - [`EngineFlags`]
//! * Group Rewriting - [`to_non_capturing`]

mod engine_flags;
mod non_capturing;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use engine_flags::EngineFlags;
#[doc(inline)]
pub use non_capturing::to_non_capturing;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
