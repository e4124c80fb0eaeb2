//! Logging initialization for the sitedeck binary.
//!
//! The shell owns the terminal, so records go to `sitedeck.log` in the data
//! directory unless configured otherwise.

use std::fs::{File, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::cli::LogTarget;

pub const LOG_FILENAME: &str = "sitedeck.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Append to `sitedeck.log` in the data directory.
    #[default]
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Raise `base` by one level per `-v`.
pub fn effective_level(base: LevelFilter, verbose: u8) -> LevelFilter {
    match verbose {
        0 => base,
        1 => base.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger. A file that cannot be opened is reported on
/// stderr and skipped.
pub fn initialize(destination: LogDestination, level: LevelFilter, data_dir: Option<&Path>) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = data_dir.and_then(|dir| create_file_logger(dir, level, config)) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    dir: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    let log_path = dir.join(LOG_FILENAME);
    let opened = std::fs::create_dir_all(dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });
    match opened {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_only_raises_the_level() {
        assert_eq!(effective_level(LevelFilter::Info, 0), LevelFilter::Info);
        assert_eq!(effective_level(LevelFilter::Info, 1), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Trace, 1), LevelFilter::Trace);
        assert_eq!(effective_level(LevelFilter::Warn, 3), LevelFilter::Trace);
    }
}
