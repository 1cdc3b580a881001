//! Report structs for transcript analytics.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the CLI
//! can print them as JSON and downstream consumers can validate them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// -- Word Frequency ---------------------------------------------------------

/// One token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The token, exactly as delimited by whitespace.
    pub word: String,
    /// Occurrences (always at least 1).
    pub count: usize,
}

/// Word frequencies for one user alongside the whole population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyReport {
    /// The user the report was requested for.
    pub user_id: String,
    /// The user's tokens, most frequent first.
    pub user_frequency: Vec<WordCount>,
    /// Every user's tokens, most frequent first.
    pub all_users_frequency: Vec<WordCount>,
}

// -- Phrases ----------------------------------------------------------------

/// One n-gram and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhraseCount {
    /// Tokens of the n-gram joined by single spaces.
    pub phrase: String,
    /// Occurrences.
    pub count: usize,
}

/// Most frequent n-grams for one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhraseReport {
    /// Tokens per phrase.
    pub ngram_width: usize,
    /// Number of n-gram windows counted.
    pub windows: usize,
    /// Top phrases, most frequent first.
    pub phrases: Vec<PhraseCount>,
}

// -- Similarity -------------------------------------------------------------

/// Another user and how similar their text is to the target's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimilarUser {
    /// The other user's identifier.
    pub user_id: String,
    /// Cosine similarity of TF-IDF vectors, in `[0, 1]`.
    pub score: f64,
}

/// Outcome of a similarity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarityOutcome {
    /// At least one other user had text to compare against.
    Ranked {
        /// Most similar users first.
        most_similar_users: Vec<SimilarUser>,
    },
    /// No other user has any text.
    NoComparableUsers,
}

impl SimilarityOutcome {
    /// The ranked users, or an empty slice when nobody was comparable.
    pub fn users(&self) -> &[SimilarUser] {
        match self {
            Self::Ranked { most_similar_users } => most_similar_users,
            Self::NoComparableUsers => &[],
        }
    }
}

// -- Combined ---------------------------------------------------------------

/// All three analyses for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserReport {
    /// The user the report was requested for.
    pub user_id: String,
    /// Number of stored records for the user.
    pub records: usize,
    /// Word frequencies.
    pub frequency: FrequencyReport,
    /// Most frequent phrases.
    pub phrases: PhraseReport,
    /// Similar users.
    pub similarity: SimilarityOutcome,
}

// -- Schemas ----------------------------------------------------------------

/// A document the engine emits, for JSON Schema export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportKind {
    /// A stored transcription.
    Record,
    /// [`FrequencyReport`]
    Frequency,
    /// [`PhraseReport`]
    Phrases,
    /// [`SimilarityOutcome`]
    Similarity,
    /// [`UserReport`]
    Report,
}

impl ReportKind {
    /// JSON Schema describing this document.
    pub fn schema(self) -> schemars::Schema {
        match self {
            Self::Record => schemars::schema_for!(crate::record::TextRecord),
            Self::Frequency => schemars::schema_for!(FrequencyReport),
            Self::Phrases => schemars::schema_for!(PhraseReport),
            Self::Similarity => schemars::schema_for!(SimilarityOutcome),
            Self::Report => schemars::schema_for!(UserReport),
        }
    }
}
