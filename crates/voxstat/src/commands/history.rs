//! History command: list a user's stored transcriptions.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;
use voxstat_core::{CorpusProvider, Engine, TextRecord};

/// Arguments for the `history` subcommand.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// User whose transcriptions to list.
    pub user: String,
}

#[derive(Serialize)]
struct HistoryOutput {
    user_id: String,
    records: Vec<TextRecord>,
}

/// Print every record stored for `args.user`, oldest first.
#[instrument(name = "cmd_history", skip_all, fields(user = %args.user))]
pub fn cmd_history<P: CorpusProvider>(
    args: HistoryArgs,
    global_json: bool,
    engine: &Engine<P>,
) -> anyhow::Result<()> {
    let records = engine.history(&args.user)?;

    if global_json {
        let output = HistoryOutput {
            user_id: args.user,
            records,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", format!("no transcriptions for {}", args.user).yellow());
        return Ok(());
    }
    println!(
        "{} ({} records)",
        args.user.bold().underline(),
        records.len()
    );
    for (idx, record) in records.iter().enumerate() {
        println!(
            "  {} {} {}",
            format!("{:>3}.", idx + 1).dimmed(),
            format!("[{}]", record.source_language).dimmed(),
            record.content
        );
    }
    Ok(())
}
