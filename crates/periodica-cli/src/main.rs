mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;

use crate::cli::{Cli, Commands};
use crate::config::PartialAppConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("Periodica CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config =
        PartialAppConfig::discover(cli.config.as_deref())?.merge_with_cli(&cli.set_values)?;
    debug!("Resolved configuration: {:?}", config);

    let result = match cli.command {
        Commands::Elements(args) => {
            info!("Dispatching to 'elements' command.");
            commands::elements::run_list(args, &config)
        }
        Commands::Show(args) => {
            info!("Dispatching to 'show' command.");
            commands::elements::run_show(args, &config)
        }
        Commands::Grid(args) => {
            info!("Dispatching to 'grid' command.");
            commands::elements::run_grid(args, &config)
        }
        Commands::Lessons => {
            info!("Dispatching to 'lessons' command.");
            commands::lessons::run_list(&config)
        }
        Commands::Quiz(args) => {
            info!("Dispatching to 'quiz' command.");
            commands::lessons::run_quiz(args, &config)
        }
        Commands::Calc(args) => {
            info!("Dispatching to 'calc' command.");
            commands::calc::run(args)
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
