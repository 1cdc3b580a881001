//! TF-IDF vector space and cosine similarity ranking.
//!
//! The model is fitted per call over exactly the corpora being compared: the
//! candidates plus the target. Nothing is cached between calls.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::reports::{SimilarUser, SimilarityOutcome};

/// Default number of similar users returned.
pub const DEFAULT_SIMILARITY_LIMIT: usize = 3;

/// A sparse TF-IDF vector, entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Whether every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    /// Dot product, accumulated in term-index order.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and IDF weights fitted over one collection of documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    /// term -> dimension index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Fit vocabulary and IDF over `documents`.
    ///
    /// IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`, where `n` is the number
    /// of documents and `df` the number containing the term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        // Indices are assigned in first-appearance order so repeated fits over
        // the same collection produce bit-identical vectors.
        for doc in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for term in doc.as_ref().split_whitespace() {
                let idx = match vocabulary.get(term) {
                    Some(&idx) => idx,
                    None => {
                        let idx = doc_freq.len();
                        vocabulary.insert(term.to_string(), idx);
                        doc_freq.push(0);
                        idx
                    }
                };
                if seen.insert(idx) {
                    doc_freq[idx] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    /// Vectorize a document: raw term count times IDF for each known term.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, document: &str) -> TermVector {
        let mut tf: HashMap<usize, f64> = HashMap::new();
        for token in document.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = tf
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        entries.sort_by_key(|(idx, _)| *idx);
        TermVector { entries }
    }
}

/// Cosine similarity of two vectors.
///
/// Defined as 0 when either vector has zero length. The result is clamped to
/// `[0, 1]`, which TF-IDF weights can only leave through rounding.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Rank `candidates` by similarity to the target's text.
///
/// Candidates whose id equals `target_user` or whose text has no tokens are
/// skipped. If none remain the outcome is
/// [`SimilarityOutcome::NoComparableUsers`]. Otherwise the model is fitted
/// over the remaining candidates followed by the target, and the top `limit`
/// candidates are returned, highest score first, ties in candidate order.
#[tracing::instrument(skip(target_text, candidates), fields(target_len = target_text.len()))]
pub fn rank_similar_users<'a, I>(
    target_user: &str,
    target_text: &str,
    candidates: I,
    limit: usize,
) -> SimilarityOutcome
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let comparable: Vec<(&str, &str)> = candidates
        .into_iter()
        .filter(|(user, text)| *user != target_user && text.split_whitespace().next().is_some())
        .collect();

    if comparable.is_empty() {
        tracing::debug!("no comparable users");
        return SimilarityOutcome::NoComparableUsers;
    }

    let mut documents: Vec<&str> = comparable.iter().map(|(_, text)| *text).collect();
    documents.push(target_text);

    let model = TfIdfModel::fit(&documents);
    let vectors: Vec<TermVector> = documents.iter().map(|d| model.transform(d)).collect();
    let Some((target_vector, others)) = vectors.split_last() else {
        return SimilarityOutcome::NoComparableUsers;
    };

    let mut scored: Vec<SimilarUser> = comparable
        .iter()
        .zip(others)
        .map(|((user, _), vector)| SimilarUser {
            user_id: (*user).to_string(),
            score: cosine_similarity(target_vector, vector),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    tracing::debug!(
        vocabulary = model.vocabulary_len(),
        candidates = comparable.len(),
        returned = scored.len(),
        "similarity ranked"
    );
    SimilarityOutcome::Ranked {
        most_similar_users: scored,
    }
}
