//! Corpora and the provider contract the analytic components read from.
//!
//! A [`Corpus`] is the ordered list of one owner's record texts (or every
//! owner's, for the global view). It is derived on demand from a
//! [`CorpusProvider`] and never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::record::TextRecord;
use crate::text;

/// How record boundaries are treated when a corpus is flattened for n-gram
/// extraction.
///
/// Frequency counting and similarity scoring treat a corpus as a bag of words
/// and are unaffected by this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecordBoundaries {
    /// Join all records into a single token stream. Phrases may span the end
    /// of one record and the start of the next.
    #[default]
    Join,
    /// Keep each record a separate token stream, so no phrase crosses a
    /// record boundary.
    Respect,
}

impl RecordBoundaries {
    /// Returns the policy name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Respect => "respect",
        }
    }
}

impl std::fmt::Display for RecordBoundaries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The accumulated text of one owner, or of the whole population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    segments: Vec<String>,
}

impl Corpus {
    /// Build a corpus from record texts, preserving their order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a corpus from the contents of `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TextRecord>,
    {
        Self::from_texts(records.into_iter().map(|r| r.content.as_str()))
    }

    /// Number of records in the corpus.
    pub fn record_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the corpus contains no tokens at all.
    pub fn is_empty(&self) -> bool {
        !self.segments.iter().any(|s| text::has_tokens(s))
    }

    /// The records joined with single spaces.
    pub fn text(&self) -> String {
        self.segments.join(" ")
    }

    /// Every token across all records, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().flat_map(|s| s.split_whitespace())
    }

    /// Token streams for n-gram extraction under the given boundary policy.
    ///
    /// [`RecordBoundaries::Join`] yields one stream; [`RecordBoundaries::Respect`]
    /// yields one stream per record.
    pub fn token_streams(&self, boundaries: RecordBoundaries) -> Vec<Vec<&str>> {
        match boundaries {
            RecordBoundaries::Join => vec![self.tokens().collect()],
            RecordBoundaries::Respect => self
                .segments
                .iter()
                .map(|s| text::tokenize(s))
                .collect(),
        }
    }
}

/// Read access to stored records, grouped into corpora.
///
/// Implementors supply the two record-level primitives; the corpus views are
/// derived from them. Each call must return a consistent snapshot.
pub trait CorpusProvider {
    /// All records owned by `user`, in insertion order. Unknown users yield
    /// an empty list.
    fn records_for(&self, user: &str) -> StoreResult<Vec<TextRecord>>;

    /// Every stored record, in insertion order.
    fn all_records(&self) -> StoreResult<Vec<TextRecord>>;

    /// The corpus of one user.
    fn corpus_for(&self, user: &str) -> StoreResult<Corpus> {
        Ok(Corpus::from_records(&self.records_for(user)?))
    }

    /// The concatenated text of one user, possibly empty.
    fn text_for(&self, user: &str) -> StoreResult<String> {
        Ok(self.corpus_for(user)?.text())
    }

    /// The corpus of the whole population.
    fn global_corpus(&self) -> StoreResult<Corpus> {
        Ok(Corpus::from_records(&self.all_records()?))
    }

    /// One corpus per user, ordered by each user's first stored record.
    fn corpora_by_user(&self) -> StoreResult<Vec<(String, Corpus)>> {
        Ok(group_by_owner(&self.all_records()?))
    }

    /// One concatenated text per user, ordered by first stored record.
    fn text_for_all_users(&self) -> StoreResult<Vec<(String, String)>> {
        Ok(self
            .corpora_by_user()?
            .into_iter()
            .map(|(user, corpus)| {
                let text = corpus.text();
                (user, text)
            })
            .collect())
    }
}

/// Group records into per-owner corpora, keeping first-appearance order.
pub fn group_by_owner(records: &[TextRecord]) -> Vec<(String, Corpus)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<&str>)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.owner.as_str()).or_insert_with(|| {
            grouped.push((record.owner.clone(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(record.content.as_str());
    }

    grouped
        .into_iter()
        .map(|(owner, texts)| (owner, Corpus::from_texts(texts)))
        .collect()
}
