//! # Parallel Tokenizer

use core::ops::Range;

use crate::tokenize::TextTokenizer;

/// Batch-Level Parallel Tokenizer Wrapper.
///
/// Enables ``rayon`` tokenizing of batches; single texts are tokenized
/// by the inner tokenizer on the calling thread.
#[derive(Debug, Clone)]
pub struct ParallelRayonTokenizer<D: TextTokenizer> {
    /// Inner tokenizer.
    pub inner: D,
}

impl<D: TextTokenizer> ParallelRayonTokenizer<D> {
    /// Create a new parallel tokenizer.
    ///
    /// ## Arguments
    /// * `inner` - The tokenizer to wrap.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TextTokenizer> TextTokenizer for ParallelRayonTokenizer<D> {
    fn span_tokenize(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        self.inner.span_tokenize(text)
    }

    fn batch_tokenize<'h>(
        &self,
        batch: &[&'h str],
    ) -> Vec<Vec<&'h str>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|&text| self.inner.tokenize(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::PatternTokenizer;

    #[test]
    fn test_batch_matches_serial() {
        let serial = PatternTokenizer::word_punct();
        let parallel = ParallelRayonTokenizer::new(serial.clone());

        let batch: Vec<String> = (0..64)
            .map(|i| format!("Item {i}: it's {}% done.", i * 3))
            .collect();
        let batch: Vec<&str> = batch.iter().map(String::as_str).collect();

        assert_eq!(parallel.batch_tokenize(&batch), serial.batch_tokenize(&batch));
        assert_eq!(parallel.tokenize(batch[1]), vec!["Item", "1", ":", "it", "'", "s", "3", "%", "done", "."]);
    }

    #[test]
    fn test_shared_inner() {
        let parallel = ParallelRayonTokenizer::new(std::sync::Arc::new(PatternTokenizer::whitespace()));
        assert_eq!(
            parallel.batch_tokenize(&["a b", "c"]),
            vec![vec!["a", "b"], vec!["c"]]
        );
    }
}
