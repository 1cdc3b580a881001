//! Report command: all analyses for one user.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;
use voxstat_core::{CorpusProvider, Engine};

use super::{print_phrases, print_similarity, print_word_counts};

/// Words shown per table in text output.
const REPORT_WORDS: usize = 10;

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// User to report on.
    pub user: String,
}

/// Print frequency, phrases, and similarity for `args.user`.
#[instrument(name = "cmd_report", skip_all, fields(user = %args.user))]
pub fn cmd_report<P: CorpusProvider>(
    args: ReportArgs,
    global_json: bool,
    engine: &Engine<P>,
) -> anyhow::Result<()> {
    let report = engine.report(&args.user)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({} records)",
        report.user_id.bold().underline(),
        report.records
    );

    println!();
    println!("{}", "Most used words".bold());
    let words = &report.frequency.user_frequency;
    print_word_counts(&words[..words.len().min(REPORT_WORDS)]);

    println!();
    println!(
        "{}",
        format!("Top {}-word phrases", report.phrases.ngram_width).bold()
    );
    print_phrases(&report.phrases);

    println!();
    println!("{}", "Most similar users".bold());
    print_similarity(&report.similarity);
    Ok(())
}
