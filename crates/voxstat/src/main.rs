//! voxstat CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;
use voxstat::{Cli, Commands, commands};
use voxstat_core::config::{Config, ConfigLoader};
use voxstat_core::{Engine, EngineSettings, TranscriptStore};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    let store_path = cli.store.clone().or_else(|| config.resolved_store_path());

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        store = ?store_path,
        "CLI initialized"
    );

    let result = match command {
        Commands::Ingest(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::ingest::cmd_ingest(args, cli.json, engine.provider())),
        Commands::Import(args) => open_engine(store_path, &config).and_then(|engine| {
            commands::import::cmd_import(args, cli.json, engine.provider(), config.input_limit())
        }),
        Commands::History(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::history::cmd_history(args, cli.json, &engine)),
        Commands::Frequency(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::frequency::cmd_frequency(args, cli.json, &engine)),
        Commands::Phrases(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::phrases::cmd_phrases(args, cli.json, &engine)),
        Commands::Similar(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::similar::cmd_similar(args, cli.json, &engine)),
        Commands::Report(args) => open_engine(store_path, &config)
            .and_then(|engine| commands::report::cmd_report(args, cli.json, &engine)),
        Commands::Schema(args) => commands::schema::cmd_schema(args),
        Commands::Info(args) => commands::info::cmd_info(
            args,
            cli.json,
            &config,
            &config_sources,
            store_path.as_deref(),
        ),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Open the transcript store and wrap it in an engine configured from `config`.
fn open_engine(
    store_path: Option<Utf8PathBuf>,
    config: &Config,
) -> anyhow::Result<Engine<TranscriptStore>> {
    let path = store_path.context(
        "could not determine a transcript store location; pass --store or set store_path",
    )?;
    Ok(Engine::with_settings(
        TranscriptStore::open(path),
        EngineSettings::from(config),
    ))
}
