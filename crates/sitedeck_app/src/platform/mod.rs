mod config;
mod logging;
mod render;
mod shell;
mod viewer;

use std::io;

use anyhow::Context;
use sitedeck_engine::{ensure_dir, Dashboard, FileStore, KeyValueStore, MemoryStore};
use sitedeck_logging::{deck_info, deck_warn};

use crate::cli::Cli;
use config::{load_config, resolve_data_dir, AppConfig, CONFIG_FILENAME};
use logging::{effective_level, LogDestination};
use shell::Shell;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILENAME));

    // Logging depends on the config, so config problems are reported once it is up.
    let (config, config_error) = match load_config(&config_path) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    let (base_level, level_error) = match config.level() {
        Ok(level) => (level, None),
        Err(err) => (log::LevelFilter::Info, Some(err)),
    };

    let destination = cli
        .log
        .map(LogDestination::from)
        .unwrap_or(config.log_destination);
    let log_dir = (!cli.ephemeral).then_some(data_dir.as_path());
    logging::initialize(
        destination,
        effective_level(base_level, cli.verbose),
        log_dir,
    );

    for err in config_error.iter().chain(level_error.iter()) {
        deck_warn!("Ignoring config at {:?}: {}", config_path, err);
    }

    let confirm_deletes = config.confirm_deletes && !cli.yes;
    if cli.ephemeral {
        deck_info!("Starting with an in-memory site list");
        return run_shell(Dashboard::load(MemoryStore::new()), confirm_deletes);
    }

    ensure_dir(&data_dir)
        .with_context(|| format!("cannot use data directory {}", data_dir.display()))?;
    deck_info!("Starting with data directory {:?}", data_dir);
    run_shell(Dashboard::load(FileStore::new(data_dir.clone())), confirm_deletes)
}

fn run_shell<S: KeyValueStore>(
    dashboard: Dashboard<S>,
    confirm_deletes: bool,
) -> anyhow::Result<()> {
    let mut shell = Shell::new(dashboard, confirm_deletes);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell
        .run(&mut stdin.lock(), &mut stdout.lock())
        .context("terminal i/o failed")?;
    deck_info!("Session ended");
    Ok(())
}
