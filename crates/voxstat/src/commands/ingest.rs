//! Ingest command: store one transcription.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use voxstat_core::text::token_count;
use voxstat_core::{Passthrough, TextRecord, TranscriptStore, ingest};

/// Arguments for the `ingest` subcommand.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// User the transcription belongs to.
    pub user: String,

    /// Transcribed text.
    pub text: String,

    /// Language the text was spoken in (default: en).
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Serialize)]
struct IngestOutput<'a> {
    store: &'a Utf8Path,
    words: usize,
    record: TextRecord,
}

/// Validate and store a transcription.
#[instrument(name = "cmd_ingest", skip_all, fields(user = %args.user))]
pub fn cmd_ingest(
    args: IngestArgs,
    global_json: bool,
    store: &TranscriptStore,
) -> anyhow::Result<()> {
    debug!(language = ?args.language, "executing ingest command");

    let record = ingest(
        store,
        &Passthrough,
        &args.user,
        &args.text,
        args.language.as_deref(),
    )
    .with_context(|| format!("failed to ingest transcription for {:?}", args.user))?;

    let output = IngestOutput {
        store: store.path(),
        words: token_count(&record.content),
        record,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} stored {} words for {} ({})",
            "OK:".green(),
            output.words,
            output.record.owner.bold(),
            output.record.source_language
        );
    }
    Ok(())
}
