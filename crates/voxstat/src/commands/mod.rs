//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use voxstat_core::{PhraseReport, SimilarityOutcome, WordCount};

pub mod frequency;
pub mod history;
pub mod import;
pub mod info;
pub mod ingest;
pub mod phrases;
pub mod report;
pub mod schema;
pub mod similar;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Print a word/count table, or a placeholder when empty.
pub(crate) fn print_word_counts(words: &[WordCount]) {
    if words.is_empty() {
        println!("  {}", "(no words)".dimmed());
        return;
    }
    let width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
    for entry in words {
        println!("  {:<width$}  {}", entry.word, entry.count.cyan());
    }
}

/// Print ranked phrases.
pub(crate) fn print_phrases(report: &PhraseReport) {
    if report.phrases.is_empty() {
        println!("  {}", "(no phrases)".dimmed());
        return;
    }
    for (rank, entry) in report.phrases.iter().enumerate() {
        println!(
            "  {}. \"{}\" {}",
            rank + 1,
            entry.phrase,
            format!("x{}", entry.count).dimmed()
        );
    }
}

/// Print a similarity ranking.
pub(crate) fn print_similarity(outcome: &SimilarityOutcome) {
    match outcome {
        SimilarityOutcome::NoComparableUsers => {
            println!("  {}", "no other users to compare against".yellow());
        }
        SimilarityOutcome::Ranked { most_similar_users } => {
            for (rank, user) in most_similar_users.iter().enumerate() {
                println!(
                    "  {}. {} {}",
                    rank + 1,
                    user.user_id.bold(),
                    format!("{:.3}", user.score).green()
                );
            }
        }
    }
}
