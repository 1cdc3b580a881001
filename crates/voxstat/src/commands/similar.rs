//! Similar command: rank users by vocabulary similarity.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;
use voxstat_core::{CorpusProvider, Engine, SimilarityOutcome};

use super::print_similarity;

/// Arguments for the `similar` subcommand.
#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// User to compare everyone else against.
    pub user: String,

    /// Number of users to show (default from config, normally 3).
    #[arg(long, value_name = "K")]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct SimilarOutput {
    user_id: String,
    #[serde(flatten)]
    outcome: SimilarityOutcome,
}

/// Print the users most similar to `args.user`.
#[instrument(name = "cmd_similar", skip_all, fields(user = %args.user))]
pub fn cmd_similar<P: CorpusProvider>(
    args: SimilarArgs,
    global_json: bool,
    engine: &Engine<P>,
) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(engine.settings().similarity_limit);
    let outcome = engine.similar_users_with(&args.user, limit)?;

    if global_json {
        let output = SimilarOutput {
            user_id: args.user,
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}",
            format!("Users most similar to {}", args.user)
                .bold()
                .underline()
        );
        print_similarity(&outcome);
    }
    Ok(())
}
