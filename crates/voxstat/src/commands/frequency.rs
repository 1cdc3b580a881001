//! Frequency command: word counts for a user and for everyone.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;
use voxstat_core::{CorpusProvider, Engine, WordCount};

use super::print_word_counts;

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// User to report on.
    pub user: String,

    /// Show only the N most frequent words in text output.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Print word frequencies for `args.user` and for all users.
///
/// `--top` trims the text tables only; JSON output is always complete.
#[instrument(name = "cmd_frequency", skip_all, fields(user = %args.user))]
pub fn cmd_frequency<P: CorpusProvider>(
    args: FrequencyArgs,
    global_json: bool,
    engine: &Engine<P>,
) -> anyhow::Result<()> {
    let report = engine.word_frequency(&args.user)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let shown = |words: &[WordCount]| -> usize { args.top.map_or(words.len(), |n| n.min(words.len())) };

    println!("{}", format!("Words used by {}", report.user_id).bold().underline());
    print_word_counts(&report.user_frequency[..shown(&report.user_frequency)]);
    println!();
    println!("{}", "Words used by all users".bold().underline());
    print_word_counts(&report.all_users_frequency[..shown(&report.all_users_frequency)]);
    Ok(())
}
