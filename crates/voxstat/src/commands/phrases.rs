//! Phrases command: most frequent n-grams in a user's speech.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;
use voxstat_core::{CorpusProvider, Engine, RecordBoundaries};

use super::print_phrases;

/// Arguments for the `phrases` subcommand.
#[derive(Args, Debug)]
pub struct PhrasesArgs {
    /// User to report on.
    pub user: String,

    /// Words per phrase (default from config, normally 3).
    #[arg(short = 'n', long = "width", value_name = "N")]
    pub width: Option<usize>,

    /// Number of phrases to show (default from config, normally 3).
    #[arg(long, value_name = "K")]
    pub limit: Option<usize>,

    /// Whether phrases may span two transcriptions (default from config).
    #[arg(long, value_enum, value_name = "POLICY")]
    pub boundaries: Option<RecordBoundaries>,
}

/// Print the top phrases for `args.user`.
#[instrument(name = "cmd_phrases", skip_all, fields(user = %args.user))]
pub fn cmd_phrases<P: CorpusProvider>(
    args: PhrasesArgs,
    global_json: bool,
    engine: &Engine<P>,
) -> anyhow::Result<()> {
    let settings = engine.settings();
    let width = args.width.unwrap_or(settings.ngram_width);
    let limit = args.limit.unwrap_or(settings.phrase_limit);
    let boundaries = args.boundaries.unwrap_or(settings.record_boundaries);
    let report = engine.top_phrases_across(&args.user, width, limit, boundaries)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            format!("Top {}-word phrases for {}", report.ngram_width, args.user)
                .bold()
                .underline()
        );
        print_phrases(&report);
    }
    Ok(())
}
