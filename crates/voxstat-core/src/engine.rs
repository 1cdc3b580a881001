//! The analytics engine: per-user queries over a [`CorpusProvider`].
//!
//! Every query fetches a fresh snapshot from the provider and hands it to the
//! pure functions in [`crate::analysis`]. The engine holds no mutable state,
//! so one instance can serve concurrent requests.

use crate::analysis::{
    self, DEFAULT_NGRAM_WIDTH, DEFAULT_PHRASE_LIMIT, DEFAULT_SIMILARITY_LIMIT, FrequencyReport,
    PhraseReport, SimilarityOutcome, UserReport,
};
use crate::config::Config;
use crate::corpus::{Corpus, CorpusProvider, RecordBoundaries, group_by_owner};
use crate::error::{AnalysisError, AnalysisResult};
use crate::record::{TextRecord, validate_user_id};

/// Tunables for the engine's default queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Tokens per phrase.
    pub ngram_width: usize,
    /// Phrases returned by [`Engine::top_phrases`].
    pub phrase_limit: usize,
    /// Users returned by [`Engine::similar_users`].
    pub similarity_limit: usize,
    /// Whether phrases may cross record boundaries.
    pub record_boundaries: RecordBoundaries,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ngram_width: DEFAULT_NGRAM_WIDTH,
            phrase_limit: DEFAULT_PHRASE_LIMIT,
            similarity_limit: DEFAULT_SIMILARITY_LIMIT,
            record_boundaries: RecordBoundaries::default(),
        }
    }
}

impl From<&Config> for EngineSettings {
    fn from(config: &Config) -> Self {
        Self {
            ngram_width: config.ngram_width,
            phrase_limit: config.phrase_limit,
            similarity_limit: config.similarity_limit,
            record_boundaries: config.record_boundaries,
        }
    }
}

/// Transcript analytics over a corpus provider.
#[derive(Debug)]
pub struct Engine<P> {
    provider: P,
    settings: EngineSettings,
}

impl<P: CorpusProvider> Engine<P> {
    /// Create an engine with default settings.
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, EngineSettings::default())
    }

    /// Create an engine with explicit settings.
    pub const fn with_settings(provider: P, settings: EngineSettings) -> Self {
        Self { provider, settings }
    }

    /// The underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The active settings.
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Stored records of `user`, in insertion order. Unknown users have none.
    #[tracing::instrument(skip(self))]
    pub fn history(&self, user: &str) -> AnalysisResult<Vec<TextRecord>> {
        validate_user_id(user)?;
        let records = self.provider.records_for(user)?;
        if records.is_empty() {
            tracing::debug!("no records for user");
        }
        Ok(records)
    }

    /// Word frequencies for `user` and for the whole population, from a
    /// single snapshot.
    #[tracing::instrument(skip(self))]
    pub fn word_frequency(&self, user: &str) -> AnalysisResult<FrequencyReport> {
        validate_user_id(user)?;
        let records = self.provider.all_records()?;
        let user_corpus = Corpus::from_records(records.iter().filter(|r| r.owner == user));
        let global = Corpus::from_records(&records);
        Ok(frequency_of(user, &user_corpus, &global))
    }

    /// Top phrases for `user` using the configured width and limit.
    pub fn top_phrases(&self, user: &str) -> AnalysisResult<PhraseReport> {
        self.top_phrases_with(user, self.settings.ngram_width, self.settings.phrase_limit)
    }

    /// Top phrases for `user` with an explicit width and limit.
    pub fn top_phrases_with(
        &self,
        user: &str,
        n: usize,
        limit: usize,
    ) -> AnalysisResult<PhraseReport> {
        self.top_phrases_across(user, n, limit, self.settings.record_boundaries)
    }

    /// Top phrases for `user`, overriding the record boundary policy too.
    #[tracing::instrument(skip(self))]
    pub fn top_phrases_across(
        &self,
        user: &str,
        n: usize,
        limit: usize,
        boundaries: RecordBoundaries,
    ) -> AnalysisResult<PhraseReport> {
        validate_user_id(user)?;
        if n == 0 {
            return Err(AnalysisError::InvalidNgramWidth);
        }
        let corpus = self.provider.corpus_for(user)?;
        phrases_of(&corpus, n, limit, boundaries)
    }

    /// Users most similar to `user` using the configured limit.
    pub fn similar_users(&self, user: &str) -> AnalysisResult<SimilarityOutcome> {
        self.similar_users_with(user, self.settings.similarity_limit)
    }

    /// Users most similar to `user`, at most `limit` of them.
    #[tracing::instrument(skip(self))]
    pub fn similar_users_with(&self, user: &str, limit: usize) -> AnalysisResult<SimilarityOutcome> {
        validate_user_id(user)?;
        let corpora = self.provider.corpora_by_user()?;
        Ok(similarity_of(user, &corpora, limit))
    }

    /// All three analyses for `user` from a single snapshot.
    ///
    /// The components run concurrently on the rayon pool.
    #[tracing::instrument(skip(self))]
    pub fn report(&self, user: &str) -> AnalysisResult<UserReport> {
        validate_user_id(user)?;
        let records = self.provider.all_records()?;
        let corpora = group_by_owner(&records);
        let global = Corpus::from_records(&records);
        let user_corpus = corpora
            .iter()
            .find(|(owner, _)| owner == user)
            .map(|(_, corpus)| corpus.clone())
            .unwrap_or_default();

        let settings = self.settings;
        let (frequency, (phrases, similarity)) = rayon::join(
            || frequency_of(user, &user_corpus, &global),
            || {
                rayon::join(
                    || {
                        phrases_of(
                            &user_corpus,
                            settings.ngram_width,
                            settings.phrase_limit,
                            settings.record_boundaries,
                        )
                    },
                    || similarity_of(user, &corpora, settings.similarity_limit),
                )
            },
        );

        Ok(UserReport {
            user_id: user.to_string(),
            records: user_corpus.record_count(),
            frequency,
            phrases: phrases?,
            similarity,
        })
    }
}

fn frequency_of(user: &str, user_corpus: &Corpus, global: &Corpus) -> FrequencyReport {
    let (user_frequency, all_users_frequency) = (
        analysis::count_tokens(user_corpus.tokens()),
        analysis::count_tokens(global.tokens()),
    );
    tracing::debug!(
        user_terms = user_frequency.len(),
        all_terms = all_users_frequency.len(),
        "word frequency computed"
    );
    FrequencyReport {
        user_id: user.to_string(),
        user_frequency,
        all_users_frequency,
    }
}

fn phrases_of(
    corpus: &Corpus,
    n: usize,
    limit: usize,
    boundaries: RecordBoundaries,
) -> AnalysisResult<PhraseReport> {
    analysis::top_phrases_in_streams(&corpus.token_streams(boundaries), n, limit)
}

fn similarity_of(user: &str, corpora: &[(String, Corpus)], limit: usize) -> SimilarityOutcome {
    let texts: Vec<(&str, String)> = corpora
        .iter()
        .map(|(owner, corpus)| (owner.as_str(), corpus.text()))
        .collect();
    let target_text = texts
        .iter()
        .find(|(owner, _)| *owner == user)
        .map(|(_, text)| text.as_str())
        .unwrap_or_default();
    let candidates = texts
        .iter()
        .filter(|(owner, _)| *owner != user)
        .map(|(owner, text)| (*owner, text.as_str()));

    analysis::rank_similar_users(user, target_text, candidates, limit)
}
