//! File logging through log4rs.
//!
//! The game owns the terminal, so log records go to a file instead of
//! stdout/stderr.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Build the log4rs configuration: one file appender filtered at `level`.
pub fn log_config(level: LevelFilter, file_path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(false)
        .build(file_path)
        .with_context(|| format!("open log file {}", file_path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("build log configuration")?;
    Ok(config)
}

/// Install the global logger. Call once, before the game starts.
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    let config = log_config(level, file_path)?;
    log4rs::init_config(config).context("install logger")?;
    log::info!("logging at {level} to {}", file_path.display());
    Ok(())
}
