//! Schema command: print the JSON Schema of an output document.

use clap::Args;
use tracing::instrument;
use voxstat_core::ReportKind;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Document to describe.
    #[arg(value_enum)]
    pub kind: ReportKind,
}

/// Print the schema as pretty JSON. Output is JSON regardless of `--json`.
#[instrument(name = "cmd_schema", skip_all, fields(kind = ?args.kind))]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&args.kind.schema())?);
    Ok(())
}
