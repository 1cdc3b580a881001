//! N-gram phrase extraction.

use crate::error::{AnalysisError, AnalysisResult};

use super::frequency::tally;
use super::reports::{PhraseCount, PhraseReport};

/// Default number of tokens per phrase.
pub const DEFAULT_NGRAM_WIDTH: usize = 3;

/// Default number of phrases returned.
pub const DEFAULT_PHRASE_LIMIT: usize = 3;

/// Every window of `n` consecutive tokens, joined with single spaces.
///
/// A stream shorter than `n` yields nothing. `n` must be non-zero.
pub fn extract_phrases(tokens: &[&str], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}

/// Rank the n-grams of several independent token streams.
///
/// Windows never span two streams. Counts are merged across streams, ordered
/// by count with ties in first-appearance order, and truncated to `limit`.
#[tracing::instrument(skip(streams), fields(streams = streams.len()))]
pub fn top_phrases_in_streams(
    streams: &[Vec<&str>],
    n: usize,
    limit: usize,
) -> AnalysisResult<PhraseReport> {
    if n == 0 {
        return Err(AnalysisError::InvalidNgramWidth);
    }

    let phrases: Vec<String> = streams
        .iter()
        .flat_map(|tokens| extract_phrases(tokens, n))
        .collect();
    let windows = phrases.len();

    let mut ranked: Vec<PhraseCount> = tally(phrases)
        .into_iter()
        .map(|(phrase, count)| PhraseCount { phrase, count })
        .collect();
    ranked.truncate(limit);

    tracing::debug!(windows, returned = ranked.len(), "phrases ranked");
    Ok(PhraseReport {
        ngram_width: n,
        windows,
        phrases: ranked,
    })
}

/// Rank the n-grams of a single corpus string.
pub fn top_phrases(text: &str, n: usize, limit: usize) -> AnalysisResult<PhraseReport> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    top_phrases_in_streams(&[tokens], n, limit)
}
