pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use pagemark::config;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match config::load_config(PathBuf::from("."), cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        types::Commands::Toc { .. } => commands::handle_toc_command(&cli.command, &config),
        types::Commands::Highlight { .. } => commands::handle_highlight_command(&cli.command, &config),
        types::Commands::Paginate { .. } => commands::handle_paginate_command(&cli.command, &config),
        types::Commands::Resize { .. } => commands::handle_resize_command(&cli.command, &config),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
