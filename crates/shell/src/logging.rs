//! Tracing subscriber setup

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::state::LogConfig;

/// Overrides the configured level, using `EnvFilter` directive syntax
pub const LOG_ENV: &str = "GVFSH_LOG";
pub const LOG_FILE_NAME: &str = "gvfsh.log";

const FALLBACK_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file in {}: {source}", .dir.display())]
    Appender {
        dir: PathBuf,
        #[source]
        source: InitError,
    },
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Filter from `GVFSH_LOG` if set and valid, otherwise from `level`
pub fn filter(level: &str) -> EnvFilter {
    build_filter(std::env::var(LOG_ENV).ok().as_deref(), level)
}

fn build_filter(directives: Option<&str>, level: &str) -> EnvFilter {
    directives
        .ok_or(())
        .and_then(|d| EnvFilter::try_new(d).map_err(|_| ()))
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

fn file_writer(dir: &Path) -> Result<BoxMakeWriter, LoggingError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(|source| LoggingError::Appender {
            dir: dir.to_path_buf(),
            source,
        })?;
    Ok(BoxMakeWriter::new(appender))
}

/// Install the global subscriber. Logs go to stderr unless a directory is
/// configured, so they never interleave with command output on stdout.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let writer = match &config.dir {
        Some(dir) => file_writer(dir)?,
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
