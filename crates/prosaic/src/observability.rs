//! Logging setup: console on stderr, plain-text file log via tracing-appender.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "PROSAIC_LOG_PATH";
const LOG_DIR_ENV: &str = "PROSAIC_LOG_DIR";
const LOG_FILE_NAME: &str = "prosaic.log";

/// Where the file log goes, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: Option<PathBuf>,
    /// File name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve from `PROSAIC_LOG_PATH`, then `PROSAIC_LOG_DIR`, then the
    /// configured `log_dir`, then the platform data-local directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let default_dir = prosaic_core::config::user_data_local_dir()
            .map(|dir| dir.into_std_path_buf().join("logs"));
        Self::resolve(
            non_empty_env(LOG_PATH_ENV),
            non_empty_env(LOG_DIR_ENV),
            config_log_dir,
            default_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name()
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name: name.to_string_lossy().into_owned(),
            };
        }

        Self {
            log_dir: env_dir.or(config_dir).or(default_dir),
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the event filter: `-q`/`-v` win, then `RUST_LOG`, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Console verbosity: warnings by default so command output stays clean.
const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file log on drop; hold it for the life of
/// the process. File logging is skipped when the directory cannot be created.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    quiet: bool,
    verbose: u8,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_level(quiet, verbose));

    let file = config
        .log_dir
        .as_deref()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .and_then(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&config.file_name)
                .build(dir)
                .ok()
        })
        .map(tracing_appender::non_blocking);

    let (file_layer, guard) = match file {
        Some((writer, guard)) => (
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
