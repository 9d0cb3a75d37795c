//! # Text Tokenizer Trait

use core::ops::Range;

use std::sync::Arc;

/// A tokenizer that divides a string into substrings.
///
/// Implementations are immutable after construction; every method is a
/// pure read, so a tokenizer can be shared across threads freely.
pub trait TextTokenizer: Send + Sync {
    /// Byte ranges of the tokens of `text`, in left-to-right order.
    fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>>;

    /// The tokens of `text`, in left-to-right order.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    ///
    /// ## Returns
    /// Slices borrowed from `text`.
    fn tokenize<'h>(
        &self,
        text: &'h str,
    ) -> Vec<&'h str> {
        self.span_tokenize(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    /// Tokenize each text of a batch.
    ///
    /// ## Arguments
    /// * `batch` - The texts to tokenize.
    ///
    /// ## Returns
    /// One token list per input text, in input order.
    fn batch_tokenize<'h>(
        &self,
        batch: &[&'h str],
    ) -> Vec<Vec<&'h str>> {
        batch.iter().map(|&text| self.tokenize(text)).collect()
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for &T {
    fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        (**self).span_tokenize(text)
    }

    fn batch_tokenize<'h>(
        &self,
        batch: &[&'h str],
    ) -> Vec<Vec<&'h str>> {
        (**self).batch_tokenize(batch)
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for Arc<T> {
    fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        (**self).span_tokenize(text)
    }

    fn batch_tokenize<'h>(
        &self,
        batch: &[&'h str],
    ) -> Vec<Vec<&'h str>> {
        (**self).batch_tokenize(batch)
    }
}
