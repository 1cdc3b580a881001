//! Logging setup.
//!
//! Human-readable events go to stderr. When a log location can be resolved
//! and created, events are also written as JSON lines to a file through a
//! non-blocking writer. The returned guard must live until exit so buffered
//! lines are flushed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "VOXSTAT_LOG_PATH";
/// Directory for daily-rotated log files.
const LOG_DIR_ENV: &str = "VOXSTAT_LOG_DIR";
const LOG_FILE_PREFIX: &str = "voxstat";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where JSONL logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, never rotated.
    File(PathBuf),
    /// A directory of daily-rotated files.
    Dir(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// File logging target; `None` logs to stderr only.
    pub log_target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, then the configured
    /// directory, then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let default_dir = voxstat_core::config::user_data_local_dir()
            .map(|dir| dir.join("logs").into_std_path_buf());
        Self::resolve(
            env_path(LOG_PATH_ENV),
            env_path(LOG_DIR_ENV),
            config_log_dir,
            default_dir,
        )
    }

    fn resolve(
        env_file: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let log_target = env_file
            .map(LogTarget::File)
            .or_else(|| env_dir.or(config_dir).or(default_dir).map(LogTarget::Dir));
        Self { log_target }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the event filter.
///
/// `-q` and `-v` win over everything; otherwise `RUST_LOG` applies, and
/// failing that the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let forced = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };
    if let Some(level) = forced {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// If the log file cannot be opened, logging continues on stderr alone.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_target.as_ref().and_then(open_appender) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}

fn open_appender(target: &LogTarget) -> Option<RollingFileAppender> {
    let (dir, builder) = match target {
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path.file_name()?.to_str()?;
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name);
            (dir, builder)
        }
        LogTarget::Dir(dir) => {
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX);
            (dir.as_path(), builder)
        }
    };
    fs::create_dir_all(dir).ok()?;
    builder.build(dir).ok()
}
