//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch tokenizing.

mod rayon_tokenizer;

pub use rayon_tokenizer::ParallelRayonTokenizer;
