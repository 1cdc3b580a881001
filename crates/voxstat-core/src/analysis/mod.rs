//! Transcript analytics.
//!
//! Three independent components, each a pure function over corpus text:
//!
//! - [`frequency`] counts tokens.
//! - [`phrases`] ranks n-grams.
//! - [`similarity`] ranks other users by TF-IDF cosine similarity.
//!
//! None of them keeps state between calls, so they can run concurrently over
//! the same snapshot. [`crate::engine::Engine`] wires them to a corpus
//! provider.

pub mod frequency;
pub mod phrases;
pub mod reports;
pub mod similarity;

pub use frequency::{count_tokens, count_words};
pub use phrases::{
    DEFAULT_NGRAM_WIDTH, DEFAULT_PHRASE_LIMIT, extract_phrases, top_phrases,
    top_phrases_in_streams,
};
pub use reports::{
    FrequencyReport, PhraseCount, PhraseReport, ReportKind, SimilarUser, SimilarityOutcome,
    UserReport, WordCount,
};
pub use similarity::{
    DEFAULT_SIMILARITY_LIMIT, TermVector, TfIdfModel, cosine_similarity, rank_similar_users,
};
