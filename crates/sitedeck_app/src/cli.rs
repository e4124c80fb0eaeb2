//! Command-line flags for the `sitedeck` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// sitedeck -- keep a handful of web apps one command away
#[derive(Debug, Parser)]
#[command(name = "sitedeck", version, about = "Personal dashboard of embedded web apps")]
pub struct Cli {
    /// Directory holding the site list, config and log file
    #[arg(long, env = "SITEDECK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/config.ron)
    #[arg(long, short = 'c', env = "SITEDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep the site list in memory only; nothing is read or written
    #[arg(long)]
    pub ephemeral: bool,

    /// Where log records go (overrides the config file)
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip delete confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}
