//! Import command: bulk-load a JSON Lines file.
//!
//! Each non-blank line is an object with `user_id`, `text`, and an optional
//! `language`. Lines that fail to parse or validate are skipped and reported;
//! a store failure aborts the import.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use voxstat_core::{AnalysisError, ImportEntry, Passthrough, TranscriptStore, ingest_entry};

use super::read_input_file;

/// Arguments for the `import` subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON Lines file of `{"user_id", "text", "language"}` objects.
    pub file: Utf8PathBuf,
}

#[derive(Debug, Default, Serialize)]
struct ImportSummary {
    imported: usize,
    skipped: Vec<SkippedLine>,
}

#[derive(Debug, Serialize)]
struct SkippedLine {
    line: usize,
    reason: String,
}

/// Import every valid line of `args.file` into the store.
#[instrument(name = "cmd_import", skip_all, fields(file = %args.file))]
pub fn cmd_import(
    args: ImportArgs,
    global_json: bool,
    store: &TranscriptStore,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();
    debug!(lines = lines.len(), "executing import command");

    let progress = if global_json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(lines.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")?,
    );

    let mut summary = ImportSummary::default();
    for (line_no, line) in lines {
        progress.inc(1);
        let entry: ImportEntry = match serde_json::from_str(line) {
            Ok(entry) => entry,
            Err(e) => {
                summary.skip(line_no, e.to_string());
                continue;
            }
        };
        match ingest_entry(store, &Passthrough, &entry) {
            Ok(_) => summary.imported += 1,
            Err(AnalysisError::Store(e)) => {
                progress.abandon();
                return Err(e.into());
            }
            Err(e) => summary.skip(line_no, e.to_string()),
        }
    }
    progress.finish_and_clear();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} imported {} transcriptions into {}",
            "OK:".green(),
            summary.imported,
            store.path()
        );
        for skipped in &summary.skipped {
            println!(
                "  {} line {}: {}",
                "skipped".yellow(),
                skipped.line,
                skipped.reason
            );
        }
    }
    Ok(())
}

impl ImportSummary {
    fn skip(&mut self, line: usize, reason: String) {
        warn!(line, %reason, "skipping import line");
        self.skipped.push(SkippedLine { line, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use voxstat_core::CorpusProvider;

    fn setup(lines: &str) -> (TempDir, TranscriptStore, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let file = root.join("batch.jsonl");
        fs::write(&file, lines).unwrap();
        let store = TranscriptStore::open(root.join("store.jsonl"));
        (tmp, store, file)
    }

    #[test]
    fn imports_valid_lines_and_skips_bad_ones() {
        let (_tmp, store, file) = setup(concat!(
            r#"{"user_id": "alice", "text": "hello world"}"#,
            "\n\n",
            "not json\n",
            r#"{"user_id": "bob", "text": "  ", "language": "en"}"#,
            "\n",
            r#"{"user_id": "bob", "text": "good day", "language": "fr"}"#,
            "\n",
        ));
        cmd_import(ImportArgs { file }, true, &store, None).unwrap();

        let records = store.all_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source_language, "fr");
    }

    #[test]
    fn oversized_file_is_rejected() {
        let (_tmp, store, file) = setup(r#"{"user_id": "alice", "text": "hello world"}"#);
        let err = cmd_import(ImportArgs { file }, true, &store, Some(8)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(store.all_records().unwrap().is_empty());
    }
}
