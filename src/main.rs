use std::process::ExitCode;

use bball::cli::Cli;
use bball::commands;
use bball::config::FeedConfig;
use bball::error::Error;
use bball::feed::NbaFeed;
use bball::present::Presenter;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bball=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Logs go to stderr; stdout is reserved for the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FeedConfig::from_env();
    debug!(?config, "Loaded feed config");
    let feed = NbaFeed::new(config);
    let presenter = Presenter::for_terminal();

    match commands::run(&cli.command, &feed, &presenter, chrono::Utc::now()) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(Error::NotFound(outcome)) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
