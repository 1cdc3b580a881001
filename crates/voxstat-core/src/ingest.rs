//! Ingestion: validate, normalize, and store transcriptions.
//!
//! Text reaching the analytic components must already be in one language.
//! A [`Normalizer`] is responsible for that; [`Passthrough`] trusts the caller
//! and records the declared language unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::record::{DEFAULT_LANGUAGE, TextRecord, validate_user_id};
use crate::store::RecordSink;

/// Text after normalization, with the language it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Text in the target language.
    pub text: String,
    /// Language of the original input.
    pub source_language: String,
}

/// Converts raw transcription text into the engine's single language.
pub trait Normalizer: Send + Sync {
    /// Normalize `text`, optionally hinted with the caller's declared language.
    fn normalize(&self, text: &str, declared_language: Option<&str>) -> AnalysisResult<Normalized>;
}

/// Normalizer that keeps text as-is and records the declared language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Normalizer for Passthrough {
    fn normalize(&self, text: &str, declared_language: Option<&str>) -> AnalysisResult<Normalized> {
        let language = declared_language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE);
        Ok(Normalized {
            text: text.trim().to_string(),
            source_language: language.to_lowercase(),
        })
    }
}

/// One line of a bulk import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEntry {
    /// Owner of the transcription.
    pub user_id: String,
    /// Raw transcription text.
    pub text: String,
    /// Declared language, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Validate, normalize, and store one transcription.
///
/// Returns the stored record.
#[tracing::instrument(skip(sink, normalizer, text), fields(text_len = text.len()))]
pub fn ingest<S, N>(
    sink: &S,
    normalizer: &N,
    user_id: &str,
    text: &str,
    language: Option<&str>,
) -> AnalysisResult<TextRecord>
where
    S: RecordSink + ?Sized,
    N: Normalizer + ?Sized,
{
    validate_user_id(user_id)?;
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let normalized = normalizer.normalize(text, language)?;
    let record = TextRecord::new(user_id, normalized.text, normalized.source_language)?;
    sink.append(&record)?;

    tracing::info!(
        user_id,
        language = %record.source_language,
        "transcription stored"
    );
    Ok(record)
}

/// Ingest a parsed import entry.
pub fn ingest_entry<S, N>(sink: &S, normalizer: &N, entry: &ImportEntry) -> AnalysisResult<TextRecord>
where
    S: RecordSink + ?Sized,
    N: Normalizer + ?Sized,
{
    ingest(
        sink,
        normalizer,
        &entry.user_id,
        &entry.text,
        entry.language.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusProvider;
    use crate::store::MemoryStore;

    /// Normalizer that upper-cases text, to prove the hook is applied.
    struct Shouting;

    impl Normalizer for Shouting {
        fn normalize(&self, text: &str, _: Option<&str>) -> AnalysisResult<Normalized> {
            Ok(Normalized {
                text: text.to_uppercase(),
                source_language: "xx".to_string(),
            })
        }
    }

    #[test]
    fn stores_trimmed_text_with_declared_language() {
        let store = MemoryStore::new();
        let record = ingest(&store, &Passthrough, "alice", "  bonjour  ", Some("FR")).unwrap();
        assert_eq!(record.content, "bonjour");
        assert_eq!(record.source_language, "fr");
        assert_eq!(store.records_for("alice").unwrap(), vec![record]);
    }

    #[test]
    fn language_defaults_to_english() {
        let store = MemoryStore::new();
        let record = ingest(&store, &Passthrough, "alice", "hello", None).unwrap();
        assert_eq!(record.source_language, "en");
        let record = ingest(&store, &Passthrough, "alice", "hello", Some(" ")).unwrap();
        assert_eq!(record.source_language, "en");
    }

    #[test]
    fn rejects_empty_text() {
        let store = MemoryStore::new();
        let err = ingest(&store, &Passthrough, "alice", " \n ", None).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_bad_user_id() {
        let store = MemoryStore::new();
        let err = ingest(&store, &Passthrough, "", "hello", None).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUserId { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn custom_normalizer_is_applied() {
        let store = MemoryStore::new();
        let record = ingest(&store, &Shouting, "bob", "quiet words", Some("en")).unwrap();
        assert_eq!(record.content, "QUIET WORDS");
        assert_eq!(record.source_language, "xx");
    }

    #[test]
    fn import_entry_parses_without_language() {
        let entry: ImportEntry =
            serde_json::from_str(r#"{"user_id": "carol", "text": "hi there"}"#).unwrap();
        assert!(entry.language.is_none());
        let store = MemoryStore::new();
        let record = ingest_entry(&store, &Passthrough, &entry).unwrap();
        assert_eq!(record.owner, "carol");
    }
}
