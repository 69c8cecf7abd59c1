//! # CLI Behavior
//!
//! This is **one possible UI client** for stockpile. It is the only place that
//! knows about stdin, stdout, logging setup and exit codes.
//!
//! ## Session
//!
//! A run is one interactive session:
//!
//! 1. Resolve the data directory (`--data-dir`, else `./db`, or the per-user
//!    data directory with `--global`) and its `config.json`.
//! 2. Load the live products file. A missing or malformed file ends the run.
//! 3. Ask for a username and print the welcome banner.
//! 4. Loop on commands (`List`, `Show`, `Create`, `Update`, `Destroy`,
//!    `Reset`, `Done`), matched case-insensitively.
//!
//! `Done` (or end of input at the command prompt) saves the products and exits.
//! `Reset` restores the factory defaults and exits without that final save.
//!
//! ## Structure
//!
//! - `setup.rs`: clap flags
//! - `prompt.rs`: line prompts and per-field validation loops
//! - `session.rs`: the command loop and per-command handlers
//! - `render.rs`: banner, section headers, product lines, colored messages

mod prompt;
mod render;
mod session;
mod setup;

use clap::Parser;
use log::{debug, LevelFilter};
use setup::Cli;
use std::io;
use std::path::PathBuf;
use stockpile::api::InventoryApi;
use stockpile::config::{scope_dir, InventoryConfig};
use stockpile::error::Result;
use stockpile::model::Scope;
use stockpile::store::fs::CsvStore;

use session::Session;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = init_store(&cli)?;
    let api = InventoryApi::open(store)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, stdin.lock(), stdout.lock());
    let end = session.run()?;
    debug!("Session ended with {:?}", end);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn init_store(cli: &Cli) -> Result<CsvStore> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let scope = if cli.global {
                Scope::Global
            } else {
                Scope::Project
            };
            scope_dir(scope, &cwd)?
        }
    };

    let config = InventoryConfig::load(&data_dir)?;
    let store = CsvStore::new(
        config.products_path(&data_dir),
        config.defaults_path(&data_dir),
    );
    debug!(
        "Live products: {}, defaults: {}",
        store.live_path().display(),
        store.defaults_path().display()
    );
    Ok(store)
}
