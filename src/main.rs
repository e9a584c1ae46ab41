mod cli;
mod config;
mod decision;
mod error;
mod logger;
mod prompt;
mod save;
mod tasks;
mod utils;

use chrono::Local;
use clap::Parser;
use cli::Cli;
use config::Config;
use logger::log_error;
use prompt::TerminalConfirmer;
use std::process;
use tasks::sync;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = cli::parse_exit_code(&e);
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config.with_overrides(cli.dry_run, cli.sorted),
        Err(e) => {
            log_error("Configuration error", &e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = sync::run(&config, &mut TerminalConfirmer, &Local::now) {
        log_error("Save sync failed", &e);
        process::exit(e.exit_code());
    }
}
